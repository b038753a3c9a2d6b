//! Order Handlers

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;

use std::path::Path;

use market_app::{money::format_price, orders::records::OrderRecord, presentation::DisplayItem};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::views::DisplayItemResponse;

/// Order view
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// Order UUID
    pub uuid: Uuid,

    /// When the order was placed
    pub created_at: String,

    /// Lines at the prices they were bought for
    pub items: Vec<DisplayItemResponse>,

    pub total: String,
}

impl OrderResponse {
    fn new(order: &OrderRecord, total: u64, images_dir: &Path) -> Self {
        Self {
            uuid: order.uuid.into_uuid(),
            created_at: order.created_at.to_string(),
            items: order
                .lines
                .iter()
                .map(|line| DisplayItem::for_order_line(line, images_dir).into())
                .collect(),
            total: format_price(total),
        }
    }
}
