//! Plain data types. The stored ones implement
//! [`CatalogEntity`](catalog_actor::CatalogEntity) in their `*_actor` modules.

/// Declares a `u32` newtype identifier with a prefixed `Display`.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub mod capabilities;
pub mod order;
pub mod price;
pub mod product_set;
pub mod product_set_type;
pub mod store;
pub mod user;
pub mod variation;

pub use capabilities::*;
pub use order::*;
pub use price::*;
pub use product_set::*;
pub use product_set_type::*;
pub use store::*;
pub use user::*;
pub use variation::*;
