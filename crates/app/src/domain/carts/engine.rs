//! Cart mutation engine.
//!
//! Applies a single [`CartAction`] to an in-memory cart. Persisting the
//! resulting aggregate is left to the carts service.

use std::num::NonZeroU32;

use jiff::Timestamp;
use thiserror::Error;

use crate::domain::{
    carts::{
        data::CartAction,
        records::{CartLineRecord, CartRecord},
    },
    items::records::ItemRecord,
};

/// Largest quantity a line may hold, bounded by the `INTEGER` column.
pub const MAX_LINE_QUANTITY: u32 = i32::MAX.unsigned_abs();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartEngineError {
    #[error("line quantity would exceed {MAX_LINE_QUANTITY}")]
    QuantityLimit,
}

impl CartRecord {
    /// Apply `action` for `item`, returning the updated cart.
    ///
    /// New lines lock in the item's current price and are stamped with `now`.
    ///
    /// # Errors
    ///
    /// Returns [`CartEngineError::QuantityLimit`] when an increase would push a
    /// line past [`MAX_LINE_QUANTITY`].
    pub fn apply(
        mut self,
        item: &ItemRecord,
        action: CartAction,
        now: Timestamp,
    ) -> Result<Self, CartEngineError> {
        let position = self
            .lines
            .iter()
            .position(|line| line.item.uuid == item.uuid);

        match (position, action) {
            (None, CartAction::Increase) => {
                self.lines.push(CartLineRecord {
                    item: item.clone(),
                    quantity: NonZeroU32::MIN,
                    price: item.price,
                    created_at: now,
                    updated_at: now,
                });
            }
            (None, CartAction::Decrease | CartAction::Remove) => {}
            (Some(index), CartAction::Increase) => {
                let line = &mut self.lines[index];

                line.quantity = line
                    .quantity
                    .checked_add(1)
                    .filter(|quantity| quantity.get() <= MAX_LINE_QUANTITY)
                    .ok_or(CartEngineError::QuantityLimit)?;
                line.updated_at = now;
            }
            (Some(index), CartAction::Decrease) => {
                let line = &mut self.lines[index];

                match NonZeroU32::new(line.quantity.get() - 1) {
                    Some(quantity) => {
                        line.quantity = quantity;
                        line.updated_at = now;
                    }
                    None => {
                        self.lines.remove(index);
                    }
                }
            }
            (Some(index), CartAction::Remove) => {
                self.lines.remove(index);
            }
        }

        Ok(self)
    }
}
