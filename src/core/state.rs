//! State trait for machine state tags.
//!
//! Every machine in this crate keeps exactly one state tag. The tag is a
//! plain enum; this trait gives the runtime what it needs to compare,
//! record and print it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. A state is a value drawn from a small fixed
/// enumeration, and `label` is the human-readable name shown to users
/// (which may contain spaces, e.g. `"Moving Up"`).
///
/// # Required Traits
///
/// - `Copy` + `PartialEq`: tags are compared on every transition lookup
/// - `Debug`: for diagnostics and log fields
/// - `Serialize` + `Deserialize`: histories can be exported by a host
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn label(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn all() -> &'static [Self] {
///         &[Self::Open, Self::Closed]
///     }
/// }
///
/// assert_eq!(Door::Closed.label(), "Closed");
/// assert_eq!(Door::all().len(), 2);
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Human-readable label for display and logging.
    fn label(&self) -> &'static str;

    /// Every value of the enumeration, in declaration order.
    fn all() -> &'static [Self];
}
