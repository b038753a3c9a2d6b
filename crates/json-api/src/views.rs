//! Response shapes shared by the catalog, cart and order endpoints.

use market_app::{
    money::format_price,
    presentation::{DisplayItem, Paging},
};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An item as shown on a page.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub(crate) struct DisplayItemResponse {
    /// Item UUID
    pub uuid: Uuid,

    pub title: String,

    pub description: String,

    /// Where the item image is stored, when it has one
    pub image_path: Option<String>,

    /// Units held in the session's cart or order
    pub quantity: u32,

    /// Unit price as a decimal string, e.g. "12.50"
    pub price: String,

    /// Quantity times unit price
    pub subtotal: String,
}

impl From<DisplayItem> for DisplayItemResponse {
    fn from(item: DisplayItem) -> Self {
        let subtotal = format_price(item.subtotal());

        Self {
            uuid: item.uuid.into_uuid(),
            title: item.title,
            description: item.description,
            image_path: item.image_path,
            quantity: item.quantity,
            price: format_price(item.price),
            subtotal,
        }
    }
}

/// Paging metadata.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub(crate) struct PagingResponse {
    /// 1-based page number
    pub page_number: u32,

    pub page_size: u32,

    /// Matching items across all pages
    pub total: u64,

    pub has_next: bool,

    pub has_previous: bool,
}

impl From<Paging> for PagingResponse {
    fn from(paging: Paging) -> Self {
        Self {
            page_number: paging.page_number,
            page_size: paging.page_size,
            total: paging.total,
            has_next: paging.has_next,
            has_previous: paging.has_previous,
        }
    }
}
