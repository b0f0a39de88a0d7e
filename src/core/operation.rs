//! Operation trait for the inputs a machine accepts.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// An operation a caller can invoke on a machine.
///
/// Operations are the second key of the transition table: a machine looks
/// up `(current state, operation)` to find the next state.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Operation;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorOp {
///     Open,
///     Close,
/// }
///
/// impl Operation for DoorOp {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "open",
///             Self::Close => "close",
///         }
///     }
/// }
///
/// assert_eq!(DoorOp::Close.name(), "close");
/// ```
pub trait Operation:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and error values.
    fn name(&self) -> &'static str;
}
