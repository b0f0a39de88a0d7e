//! Macros for ergonomic state and operation enums.

/// Generate a state enum together with its `State` and `Display` impls.
///
/// Each variant is paired with its display label.
///
/// # Example
///
/// ```
/// use switchyard::core::State;
/// use switchyard::state_enum;
///
/// state_enum! {
///     pub enum LiftState {
///         Idle => "Idle",
///         MovingUp => "Moving Up",
///     }
/// }
///
/// assert_eq!(LiftState::MovingUp.label(), "Moving Up");
/// assert_eq!(LiftState::all(), &[LiftState::Idle, LiftState::MovingUp]);
/// assert_eq!(LiftState::Idle.to_string(), "Idle");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::label(self))
            }
        }
    };
}

/// Generate an operation enum together with its `Operation` impl.
///
/// # Example
///
/// ```
/// use switchyard::core::Operation;
/// use switchyard::operation_enum;
///
/// operation_enum! {
///     pub enum LiftOp {
///         MoveUp => "move_up",
///         Stop => "stop",
///     }
/// }
///
/// assert_eq!(LiftOp::Stop.name(), "stop");
/// ```
#[macro_export]
macro_rules! operation_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $op_name:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Operation for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $op_name),*
                }
            }
        }
    };
}
