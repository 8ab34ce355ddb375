//! Macros for declaring state enums.

/// Generate a `State` implementation for a simple fieldless enum.
///
/// Every variant's name doubles as its display name. Variants listed under
/// `final:` report `is_final() == true`.
///
/// # Example
///
/// ```
/// use birdie_terminal::state_enum;
/// use birdie_terminal::core::State;
///
/// state_enum! {
///     pub enum Phase {
///         Start,
///         Done,
///     }
///     final: [Done]
/// }
///
/// assert_eq!(Phase::Start.name(), "Start");
/// assert!(Phase::Done.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
