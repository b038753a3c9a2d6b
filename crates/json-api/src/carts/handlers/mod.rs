//! Cart Handlers

pub(crate) mod get;
pub(crate) mod update;

use std::path::Path;

use market_app::{carts::records::CartRecord, money::format_price, presentation::DisplayItem};
use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};

use crate::{carts::errors::into_status_error, state::State, views::DisplayItemResponse};

/// Cart view
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Lines in the order they were added, priced at their locked unit price
    pub items: Vec<DisplayItemResponse>,

    /// Sum of all line subtotals
    pub total: String,

    /// Whether the cart has no lines
    pub empty: bool,
}

impl CartResponse {
    fn new(cart: &CartRecord, total: u64, images_dir: &Path) -> Self {
        Self {
            items: cart
                .lines
                .iter()
                .map(|line| DisplayItem::for_cart_line(line, images_dir).into())
                .collect(),
            total: format_price(total),
            empty: cart.is_empty(),
        }
    }
}

async fn cart_response(state: &State, cart: &CartRecord) -> Result<CartResponse, StatusError> {
    let total = state
        .app
        .carts
        .cart_total(cart.uuid)
        .await
        .map_err(into_status_error)?;

    Ok(CartResponse::new(
        cart,
        total,
        &state.presentation.images_dir,
    ))
}
