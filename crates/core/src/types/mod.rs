//! Catalog entities and API payloads.
//!
//! These types mirror the JSON shapes exchanged with the external catalog API.
//! The API owns every invariant (unique ids, collection membership); this layer
//! treats entities as read-mostly snapshots.

pub mod category;
pub mod collection;
pub mod contact;
pub mod email;
pub mod faq;
pub mod id;
pub mod placeholder;
pub mod price;
pub mod product;
pub mod responses;

pub use category::{Category, CategoryInput};
pub use collection::{AddProductRequest, Collection, CollectionInput};
pub use contact::{Contact, ContactInput};
pub use email::{Email, EmailError};
pub use faq::{Faq, FaqInput};
pub use id::*;
pub use placeholder::{Placeholder, PlaceholderCheck, PlaceholderInput};
pub use price::{Price, PriceError};
pub use product::{Product, ProductInput};
pub use responses::{DumpInfo, RestoreResult, UploadedImage};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default.
///
/// The catalog API encodes empty lists as `null`; `#[serde(default)]` alone only
/// covers missing keys.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
