//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::carts::{
    data::SessionKey,
    records::{CartRecord, CartUuid},
};

const UPSERT_CART_SQL: &str = include_str!("../sql/upsert_cart.sql");
const GET_CART_SQL: &str = include_str!("../sql/get_cart.sql");
const TOUCH_CART_SQL: &str = include_str!("../sql/touch_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Fetch the cart for `session_key`, inserting it under `cart` when absent.
    pub(crate) async fn upsert_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        session_key: &SessionKey,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(UPSERT_CART_SQL)
            .bind(cart.into_uuid())
            .bind(session_key.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(GET_CART_SQL)
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn touch_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(TOUCH_CART_SQL)
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let session_key: String = row.try_get("session_key")?;

        let session_key =
            SessionKey::parse(session_key).map_err(|e| sqlx::Error::ColumnDecode {
                index: "session_key".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            session_key,
            lines: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
