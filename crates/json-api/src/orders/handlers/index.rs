//! Order Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    carts::session_cart,
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// Orders placed by this session, oldest first
    pub orders: Vec<OrderResponse>,
}

/// Order Index Handler
///
/// Returns every order placed from the session's cart.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    responses(
        (status_code = StatusCode::OK, description = "Orders"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = session_cart(state, depot).await?;

    let orders = state
        .app
        .orders
        .list_orders(cart.uuid)
        .await
        .map_err(into_status_error)?;

    let images_dir = &state.presentation.images_dir;

    Ok(Json(OrdersResponse {
        orders: orders
            .iter()
            .map(|order| OrderResponse::new(order, order.total(), images_dir))
            .collect(),
    }))
}
