//! Get Order Handler

use std::sync::Arc;

use market_app::orders::records::OrderUuid;
use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

/// Get Order Handler
///
/// Returns an order with the prices its lines were bought at.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    responses(
        (status_code = StatusCode::OK, description = "Order"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let uuid = OrderUuid::from_uuid(order.into_inner());

    let order = state
        .app
        .orders
        .get_order(uuid)
        .await
        .map_err(into_status_error)?;

    let total = state
        .app
        .orders
        .order_total(uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrderResponse::new(
        &order,
        total,
        &state.presentation.images_dir,
    )))
}
