//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    database::{saturating_total, try_get_amount, try_get_quantity},
    domain::{
        carts::records::CartUuid,
        items::repository::try_get_item,
        orders::records::{OrderLineRecord, OrderLineUuid, OrderRecord, OrderUuid},
    },
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const COPY_CART_LINES_SQL: &str = include_str!("sql/copy_cart_lines.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const GET_ORDER_LINES_SQL: &str = include_str!("sql/get_order_lines.sql");
const ORDER_TOTAL_SQL: &str = include_str!("sql/order_total.sql");

/// An order line tagged with the order it belongs to.
struct OrderLineRow {
    order_uuid: Uuid,
    line: OrderLineRecord,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        cart: CartUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Copy the current lines of `cart` into `order`, returning how many were copied.
    pub(crate) async fn copy_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(COPY_CART_LINES_SQL)
            .bind(order.into_uuid())
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        let mut order = query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        self.attach_lines(tx, std::slice::from_mut(&mut order))
            .await?;

        Ok(order)
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        let mut orders = query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(cart.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        self.attach_lines(tx, &mut orders).await?;

        Ok(orders)
    }

    pub(crate) async fn order_total(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<u64, sqlx::Error> {
        let total: Decimal = query_scalar(ORDER_TOTAL_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(saturating_total(total))
    }

    async fn attach_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &mut [OrderRecord],
    ) -> Result<(), sqlx::Error> {
        if orders.is_empty() {
            return Ok(());
        }

        let uuids: Vec<Uuid> = orders.iter().map(|order| order.uuid.into_uuid()).collect();

        let rows = query_as::<Postgres, OrderLineRow>(GET_ORDER_LINES_SQL)
            .bind(uuids.as_slice())
            .fetch_all(&mut **tx)
            .await?;

        let mut lines: FxHashMap<Uuid, Vec<OrderLineRecord>> = FxHashMap::default();

        for row in rows {
            lines.entry(row.order_uuid).or_default().push(row.line);
        }

        for order in orders {
            order.lines = lines.remove(&order.uuid.into_uuid()).unwrap_or_default();
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            cart_uuid: CartUuid::from_uuid(row.try_get("cart_uuid")?),
            lines: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderLineRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            order_uuid: row.try_get("order_uuid")?,
            line: OrderLineRecord {
                uuid: OrderLineUuid::from_uuid(row.try_get("uuid")?),
                item: try_get_item(row, "item_")?,
                quantity: try_get_quantity(row, "quantity")?,
                price: try_get_amount(row, "price")?,
            },
        })
    }
}
