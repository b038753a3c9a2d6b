//! Test Helpers

use crate::{
    domain::{
        carts::{CartsService, CartsServiceError, data::SessionKey, records::CartRecord},
        items::{
            ItemsService, ItemsServiceError,
            data::NewItem,
            records::{ItemRecord, ItemUuid},
        },
    },
    test::TestContext,
};

pub(crate) async fn create_item(
    ctx: &TestContext,
    title: &str,
    price: u64,
) -> Result<ItemRecord, ItemsServiceError> {
    ctx.items
        .create_item(
            NewItem {
                uuid: ItemUuid::new(),
                title: title.to_string(),
                description: String::new(),
                price,
            },
            None,
        )
        .await
}

/// A cart for a freshly generated session.
pub(crate) async fn new_cart(ctx: &TestContext) -> Result<CartRecord, CartsServiceError> {
    ctx.carts.get_or_create_cart(SessionKey::generate()).await
}
