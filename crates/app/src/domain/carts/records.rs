//! Cart Records

use std::num::NonZeroU32;

use jiff::Timestamp;

use crate::{
    domain::{
        carts::data::SessionKey,
        items::records::{ItemRecord, ItemUuid},
    },
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub session_key: SessionKey,
    /// Lines in the order they were first added.
    pub lines: Vec<CartLineRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartRecord {
    /// The line holding `item`, if any.
    #[must_use]
    pub fn line(&self, item: ItemUuid) -> Option<&CartLineRecord> {
        self.lines.iter().find(|line| line.item.uuid == item)
    }

    /// Units of `item` in the cart, `0` when there is no line.
    #[must_use]
    pub fn quantity_of(&self, item: ItemUuid) -> u32 {
        self.line(item).map_or(0, |line| line.quantity.get())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantity times locked price over all lines.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .map(CartLineRecord::subtotal)
            .fold(0, u64::saturating_add)
    }
}

/// Cart Line Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineRecord {
    pub item: ItemRecord,
    pub quantity: NonZeroU32,
    /// Unit price locked in when the line was created.
    pub price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartLineRecord {
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        u64::from(self.quantity.get()).saturating_mul(self.price)
    }
}
