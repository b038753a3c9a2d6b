//! Item Index Handler

use std::sync::Arc;

use market_app::{
    items::data::{ItemQuery, ItemSort},
    paging::PageRequest,
    presentation::{DisplayItem, Paging, row_chunk},
};
use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    carts::session_cart,
    extensions::*,
    items::errors::into_status_error,
    state::State,
    views::{DisplayItemResponse, PagingResponse},
};

/// Catalog page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemsResponse {
    /// Items grouped into display rows
    pub rows: Vec<Vec<DisplayItemResponse>>,

    pub paging: PagingResponse,

    /// Search term as given, if any
    pub search: Option<String>,

    /// Sort mode applied
    pub sort: String,
}

/// Item Index Handler
///
/// Returns one page of the catalog, with quantities from the session's cart.
#[endpoint(
    tags("items"),
    summary = "List Items",
    responses(
        (status_code = StatusCode::OK, description = "Catalog page"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown sort mode"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    search: QueryParam<String, false>,
    sort: QueryParam<String, false>,
    page_size: QueryParam<u32, false>,
    page_number: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ItemsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sort = sort
        .into_inner()
        .as_deref()
        .map(str::parse::<ItemSort>)
        .transpose()
        .or_400("Unknown sort mode")?
        .unwrap_or_default();

    let query = ItemQuery {
        search: search.into_inner(),
        sort,
        page: PageRequest::new(
            page_number.into_inner().unwrap_or(1),
            page_size
                .into_inner()
                .unwrap_or(state.presentation.default_page_size),
        ),
    };

    let cart = session_cart(state, depot).await?;

    let page = state
        .app
        .items
        .list_items(query.clone())
        .await
        .map_err(into_status_error)?;

    let paging = Paging::from(&page);
    let images_dir = &state.presentation.images_dir;

    let items: Vec<DisplayItemResponse> = page
        .items
        .iter()
        .map(|item| DisplayItem::for_catalog(item, &cart, images_dir).into())
        .collect();

    Ok(Json(ItemsResponse {
        rows: row_chunk(items, state.presentation.item_row_size),
        paging: paging.into(),
        search: query.search,
        sort: query.sort.to_string(),
    }))
}
