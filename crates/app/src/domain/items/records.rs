//! Item Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Item UUID
pub type ItemUuid = TypedUuid<ItemRecord>;

/// Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub uuid: ItemUuid,
    pub title: String,
    pub description: String,
    /// Stored image file name, if an image was uploaded.
    pub image: Option<String>,
    /// Unit price in minor units.
    pub price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
