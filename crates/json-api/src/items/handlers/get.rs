//! Get Item Handler

use std::sync::Arc;

use market_app::{items::records::ItemUuid, presentation::DisplayItem};
use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::session_cart, extensions::*, items::errors::into_status_error, state::State,
    views::DisplayItemResponse,
};

/// Get Item Handler
///
/// Returns an item at its current price, with the quantity held in the
/// session's cart.
#[endpoint(
    tags("items"),
    summary = "Get Item",
    responses(
        (status_code = StatusCode::OK, description = "Item"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<DisplayItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .items
        .get_item(ItemUuid::from_uuid(item.into_inner()))
        .await
        .map_err(into_status_error)?;

    let cart = session_cart(state, depot).await?;

    Ok(Json(
        DisplayItem::for_catalog(&item, &cart, &state.presentation.images_dir).into(),
    ))
}
