//! App Context

use std::{path::Path, sync::Arc};

use thiserror::Error;

use crate::{
    carts::{CartsService, PgCartsService},
    database::{self, Db},
    items::{ItemsService, PgItemsService},
    orders::{OrdersService, PgOrdersService},
    storage::FsImageStorage,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub items: Arc<dyn ItemsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context from a database URL and the image storage root.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, images_dir: &Path) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            items: Arc::new(PgItemsService::new(
                db.clone(),
                Arc::new(FsImageStorage::new(images_dir)),
            )),
            carts: Arc::new(PgCartsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db)),
        })
    }
}
