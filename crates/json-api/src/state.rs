//! State

use std::{num::NonZeroUsize, path::PathBuf, sync::Arc};

use market_app::{context::AppContext, paging::DEFAULT_PAGE_SIZE};

use crate::config::presentation::PresentationConfig;

/// Settings handlers need when shaping responses.
#[derive(Debug, Clone)]
pub(crate) struct Presentation {
    pub(crate) images_dir: PathBuf,
    pub(crate) item_row_size: NonZeroUsize,
    pub(crate) default_page_size: u32,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("images"),
            item_row_size: NonZeroUsize::MIN.saturating_add(2),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<PresentationConfig> for Presentation {
    fn from(config: PresentationConfig) -> Self {
        Self {
            images_dir: config.images_dir,
            item_row_size: config.item_row_size,
            default_page_size: config.default_page_size,
        }
    }
}

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) presentation: Presentation,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, presentation: Presentation) -> Self {
        Self { app, presentation }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, presentation: Presentation) -> Arc<Self> {
        Arc::new(Self::new(app, presentation))
    }
}
