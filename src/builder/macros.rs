//! Macros for declaring the closed set of states a machine runs.

/// Generate a state identifier enum for a machine.
///
/// Each variant maps to a `StateId` equal to its declaration index, and the
/// enum gets `name()`, `id()`, `ALL`, `From<_> for StateId` and
/// `TryFrom<StateId>`.
///
/// # Example
///
/// ```
/// use minigame::core::StateId;
/// use minigame::state_ids;
///
/// state_ids! {
///     pub enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// assert_eq!(Light::Green.id(), StateId(1));
/// assert_eq!(Light::Red.name(), "Red");
/// assert_eq!(Light::try_from(StateId(0)), Ok(Light::Red));
/// ```
#[macro_export]
macro_rules! state_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
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

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// Variant name for display and logging.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            /// Machine id of this variant.
            pub fn id(self) -> $crate::core::StateId {
                $crate::core::StateId(self as u32)
            }
        }

        impl From<$name> for $crate::core::StateId {
            fn from(value: $name) -> Self {
                value.id()
            }
        }

        impl TryFrom<$crate::core::StateId> for $name {
            type Error = $crate::core::StateId;

            fn try_from(id: $crate::core::StateId) -> Result<Self, Self::Error> {
                Self::ALL.iter().copied().find(|v| v.id() == id).ok_or(id)
            }
        }
    };
}
