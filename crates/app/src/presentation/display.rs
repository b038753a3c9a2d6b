use std::path::Path;

use crate::domain::{
    carts::records::{CartLineRecord, CartRecord},
    items::records::{ItemRecord, ItemUuid},
    orders::records::OrderLineRecord,
};

/// An item ready to render: catalog data, a quantity and the unit price that applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub uuid: ItemUuid,
    pub title: String,
    pub description: String,
    /// `<images dir>/<item uuid>/<file name>`, set only when the item has an image.
    pub image_path: Option<String>,
    pub quantity: u32,
    /// Unit price in minor units.
    pub price: u64,
}

impl DisplayItem {
    #[must_use]
    pub fn new(item: &ItemRecord, quantity: u32, price: u64, images_dir: &Path) -> Self {
        Self {
            uuid: item.uuid,
            title: item.title.clone(),
            description: item.description.clone(),
            image_path: item
                .image
                .as_deref()
                .map(|name| image_path(images_dir, item.uuid, name)),
            quantity,
            price,
        }
    }

    /// Catalog view: current price and whatever quantity the cart holds.
    #[must_use]
    pub fn for_catalog(item: &ItemRecord, cart: &CartRecord, images_dir: &Path) -> Self {
        Self::new(item, cart.quantity_of(item.uuid), item.price, images_dir)
    }

    /// Cart view: the price locked in on the line.
    #[must_use]
    pub fn for_cart_line(line: &CartLineRecord, images_dir: &Path) -> Self {
        Self::new(&line.item, line.quantity.get(), line.price, images_dir)
    }

    /// Order view: the price copied into the order.
    #[must_use]
    pub fn for_order_line(line: &OrderLineRecord, images_dir: &Path) -> Self {
        Self::new(&line.item, line.quantity.get(), line.price, images_dir)
    }

    #[must_use]
    pub fn subtotal(&self) -> u64 {
        u64::from(self.quantity).saturating_mul(self.price)
    }
}

fn image_path(images_dir: &Path, item: ItemUuid, name: &str) -> String {
    let dir = images_dir.to_string_lossy();

    format!("{}/{item}/{name}", dir.trim_end_matches('/'))
}
