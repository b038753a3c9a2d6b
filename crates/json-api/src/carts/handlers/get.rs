//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{handlers::CartResponse, session_cart},
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// Returns the calling session's cart.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart view"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = session_cart(state, depot).await?;

    Ok(Json(super::cart_response(state, &cart).await?))
}
