//! Carts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::{CartAction, SessionKey},
            errors::CartsServiceError,
            records::{CartRecord, CartUuid},
            repositories::{PgCartLinesRepository, PgCartsRepository},
        },
        items::{records::ItemUuid, repository::PgItemsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    lines_repository: PgCartLinesRepository,
    items_repository: PgItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            lines_repository: PgCartLinesRepository::new(),
            items_repository: PgItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_or_create_cart(
        &self,
        session_key: SessionKey,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut cart = self
            .carts_repository
            .upsert_cart(&mut tx, CartUuid::new(), &session_key)
            .await?;

        cart.lines = self
            .lines_repository
            .get_cart_lines(&mut tx, cart.uuid)
            .await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn update_cart(
        &self,
        cart: CartUuid,
        item: ItemUuid,
        action: CartAction,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let item = self
            .items_repository
            .get_item(&mut tx, item)
            .await
            .map_err(|error| match error {
                sqlx::Error::RowNotFound => CartsServiceError::ItemNotFound,
                error => error.into(),
            })?;

        let mut current = self.carts_repository.get_cart(&mut tx, cart).await?;

        current.lines = self.lines_repository.get_cart_lines(&mut tx, cart).await?;

        let updated = current.apply(&item, action, Timestamp::now())?;

        self.lines_repository
            .save_cart_lines(&mut tx, cart, &updated.lines)
            .await?;

        let mut saved = self.carts_repository.touch_cart(&mut tx, cart).await?;

        saved.lines = self.lines_repository.get_cart_lines(&mut tx, cart).await?;

        tx.commit().await?;

        debug!(
            cart = %cart,
            item = %item.uuid,
            ?action,
            quantity = saved.quantity_of(item.uuid),
            "updated cart"
        );

        Ok(saved)
    }

    async fn clear_cart(&self, cart: CartUuid) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.lines_repository.clear_cart_lines(&mut tx, cart).await?;

        tx.commit().await?;

        debug!(cart = %cart, lines = rows_affected, "cleared cart");

        Ok(rows_affected)
    }

    async fn cart_total(&self, cart: CartUuid) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let total = self.lines_repository.cart_total(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(total)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the cart for a session, creating an empty one on first use.
    async fn get_or_create_cart(
        &self,
        session_key: SessionKey,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Apply `action` for `item` to the cart and persist the result.
    async fn update_cart(
        &self,
        cart: CartUuid,
        item: ItemUuid,
        action: CartAction,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Delete every line in the cart, returning how many were removed.
    async fn clear_cart(&self, cart: CartUuid) -> Result<u64, CartsServiceError>;

    /// Sum of quantity times locked price over the cart's lines.
    async fn cart_total(&self, cart: CartUuid) -> Result<u64, CartsServiceError>;
}
