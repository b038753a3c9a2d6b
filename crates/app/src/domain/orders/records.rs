//! Order Records

use std::num::NonZeroU32;

use jiff::Timestamp;

use crate::{
    domain::{carts::records::CartUuid, items::records::ItemRecord},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    /// Cart of the session that placed the order.
    pub cart_uuid: CartUuid,
    pub lines: Vec<OrderLineRecord>,
    pub created_at: Timestamp,
}

impl OrderRecord {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .map(OrderLineRecord::subtotal)
            .fold(0, u64::saturating_add)
    }
}

/// Order Line UUID
pub type OrderLineUuid = TypedUuid<OrderLineRecord>;

/// Order Line Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineRecord {
    pub uuid: OrderLineUuid,
    pub item: ItemRecord,
    pub quantity: NonZeroU32,
    /// Unit price copied from the cart line.
    pub price: u64,
}

impl OrderLineRecord {
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        u64::from(self.quantity.get()).saturating_mul(self.price)
    }
}
