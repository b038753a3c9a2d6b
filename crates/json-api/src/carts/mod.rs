//! Cart

pub(crate) mod action;
pub(crate) mod errors;
mod handlers;

use market_app::carts::records::CartRecord;
use salvo::prelude::{Depot, StatusError};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

pub(crate) use handlers::*;

/// The cart of the calling session, created on first use.
pub(crate) async fn session_cart(state: &State, depot: &Depot) -> Result<CartRecord, StatusError> {
    let session_key = depot.session_key_or_500()?;

    state
        .app
        .carts
        .get_or_create_cart(session_key)
        .await
        .map_err(into_status_error)
}
