//! Presentation Config

use std::{num::NonZeroUsize, path::PathBuf};

use clap::Args;
use market_app::paging::DEFAULT_PAGE_SIZE;

/// Image storage and catalog layout settings.
#[derive(Debug, Args)]
pub struct PresentationConfig {
    /// Directory item images are stored under
    #[arg(long, env = "IMAGES_DIR", default_value = "images")]
    pub images_dir: PathBuf,

    /// Items per catalog row
    #[arg(long, env = "ITEM_ROW_SIZE", default_value = "3")]
    pub item_row_size: NonZeroUsize,

    /// Catalog page size when the request does not give one
    #[arg(long, env = "DEFAULT_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub default_page_size: u32,
}
