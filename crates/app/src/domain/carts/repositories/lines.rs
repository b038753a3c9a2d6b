//! Cart Lines Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::{
        amount_to_i64, quantity_to_i32, saturating_total, try_get_amount, try_get_quantity,
    },
    domain::{
        carts::records::{CartLineRecord, CartUuid},
        items::repository::try_get_item,
    },
};

const GET_CART_LINES_SQL: &str = include_str!("../sql/get_cart_lines.sql");
const DELETE_CART_LINES_EXCEPT_SQL: &str = include_str!("../sql/delete_cart_lines_except.sql");
const UPSERT_CART_LINES_SQL: &str = include_str!("../sql/upsert_cart_lines.sql");
const CLEAR_CART_LINES_SQL: &str = include_str!("../sql/clear_cart_lines.sql");
const CART_TOTAL_SQL: &str = include_str!("../sql/cart_total.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartLinesRepository;

impl PgCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(GET_CART_LINES_SQL)
            .bind(cart.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Make the stored lines of `cart` match `lines`.
    ///
    /// Missing lines are deleted, new lines inserted and changed quantities
    /// updated. Stored prices are never rewritten.
    pub(crate) async fn save_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        lines: &[CartLineRecord],
    ) -> Result<(), sqlx::Error> {
        let mut items = Vec::with_capacity(lines.len());
        let mut quantities = Vec::with_capacity(lines.len());
        let mut prices = Vec::with_capacity(lines.len());

        for line in lines {
            items.push(line.item.uuid.into_uuid());
            quantities.push(quantity_to_i32(line.quantity, "quantity")?);
            prices.push(amount_to_i64(line.price, "price")?);
        }

        query(DELETE_CART_LINES_EXCEPT_SQL)
            .bind(cart.into_uuid())
            .bind(items.as_slice())
            .execute(&mut **tx)
            .await?;

        if items.is_empty() {
            return Ok(());
        }

        query(UPSERT_CART_LINES_SQL)
            .bind(cart.into_uuid())
            .bind(items.as_slice())
            .bind(quantities.as_slice())
            .bind(prices.as_slice())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn clear_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_CART_LINES_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn cart_total(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let total: Decimal = query_scalar(CART_TOTAL_SQL)
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(saturating_total(total))
    }
}

impl<'r> FromRow<'r, PgRow> for CartLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            item: try_get_item(row, "item_")?,
            quantity: try_get_quantity(row, "quantity")?,
            price: try_get_amount(row, "price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
