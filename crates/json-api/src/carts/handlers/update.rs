//! Update Cart Handler

use std::sync::Arc;

use market_app::items::records::ItemUuid;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{
        action::CartActionParam, errors::into_status_error, handlers::CartResponse, session_cart,
    },
    extensions::*,
    state::State,
};

/// Update Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartRequest {
    /// Item whose line changes
    pub item: Uuid,

    pub action: CartActionParam,
}

/// Update Cart Handler
///
/// Applies a single line change to the calling session's cart and returns
/// the resulting cart.
#[endpoint(
    tags("cart"),
    summary = "Update Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let cart = session_cart(state, depot).await?;

    let cart = state
        .app
        .carts
        .update_cart(
            cart.uuid,
            ItemUuid::from_uuid(request.item),
            request.action.into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(super::cart_response(state, &cart).await?))
}
