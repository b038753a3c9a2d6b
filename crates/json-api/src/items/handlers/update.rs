//! Update Item Quantity Handler

use std::sync::Arc;

use market_app::{items::records::ItemUuid, presentation::DisplayItem};
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{self, action::CartActionParam, session_cart},
    extensions::*,
    items::errors::into_status_error,
    state::State,
    views::DisplayItemResponse,
};

/// Update Item Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateItemRequest {
    pub action: CartActionParam,
}

/// Update Item Quantity Handler
///
/// Changes how many units of the item the session's cart holds and returns
/// the item with its new quantity.
#[endpoint(
    tags("items"),
    summary = "Update Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Item with updated quantity"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    json: JsonBody<UpdateItemRequest>,
    depot: &mut Depot,
) -> Result<Json<DisplayItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let item = ItemUuid::from_uuid(item.into_inner());
    let cart = session_cart(state, depot).await?;

    let cart = state
        .app
        .carts
        .update_cart(cart.uuid, item, json.into_inner().action.into())
        .await
        .map_err(carts::errors::into_status_error)?;

    let item = state
        .app
        .items
        .get_item(item)
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        DisplayItem::for_catalog(&item, &cart, &state.presentation.images_dir).into(),
    ))
}
