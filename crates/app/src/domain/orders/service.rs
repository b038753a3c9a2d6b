//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        carts::records::CartUuid,
        orders::{
            errors::OrdersServiceError,
            records::{OrderRecord, OrderUuid},
            repository::PgOrdersRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn place_order(&self, cart: CartUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_order(&mut tx, OrderUuid::new(), cart)
            .await?;

        let copied = self
            .repository
            .copy_cart_lines(&mut tx, created.uuid, cart)
            .await?;

        if copied == 0 {
            return Err(OrdersServiceError::EmptyCart);
        }

        let order = self.repository.get_order(&mut tx, created.uuid).await?;

        tx.commit().await?;

        info!(order = %order.uuid, cart = %cart, lines = copied, "placed order");

        Ok(order)
    }

    async fn list_orders(&self, cart: CartUuid) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn order_total(&self, order: OrderUuid) -> Result<u64, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let total = self.repository.order_total(&mut tx, order).await?;

        tx.commit().await?;

        Ok(total)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Snapshot the cart's current lines into a new order.
    ///
    /// The cart itself is left untouched.
    async fn place_order(&self, cart: CartUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// All orders placed from a cart, oldest first.
    async fn list_orders(&self, cart: CartUuid) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order with its lines.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Sum of quantity times price over the order's lines.
    async fn order_total(&self, order: OrderUuid) -> Result<u64, OrdersServiceError>;
}
