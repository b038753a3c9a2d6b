//! Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::items::{
        data::{ItemQuery, NewItem},
        records::{ItemRecord, ItemUuid},
    },
};

const GET_ITEM_SQL: &str = include_str!("sql/get_item.sql");
const LIST_ITEMS_SQL: &str = include_str!("sql/list_items.sql");
const COUNT_ITEMS_SQL: &str = include_str!("sql/count_items.sql");
const CREATE_ITEM_SQL: &str = include_str!("sql/create_item.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgItemsRepository;

impl PgItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemUuid,
    ) -> Result<ItemRecord, sqlx::Error> {
        query_as::<Postgres, ItemRecord>(GET_ITEM_SQL)
            .bind(item.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        query: &ItemQuery,
    ) -> Result<Vec<ItemRecord>, sqlx::Error> {
        let limit = i64::from(query.page.size());
        let offset = i64::try_from(query.page.offset()).map_err(|e| sqlx::Error::ColumnDecode {
            index: "offset".to_string(),
            source: Box::new(e),
        })?;

        query_as::<Postgres, ItemRecord>(LIST_ITEMS_SQL)
            .bind(query.search_pattern())
            .bind(query.sort.as_str())
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        query: &ItemQuery,
    ) -> Result<u64, sqlx::Error> {
        let total: i64 = query_scalar(COUNT_ITEMS_SQL)
            .bind(query.search_pattern())
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(total).map_err(|e| sqlx::Error::ColumnDecode {
            index: "total".to_string(),
            source: Box::new(e),
        })
    }

    pub(crate) async fn create_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: &NewItem,
        image: Option<&str>,
    ) -> Result<ItemRecord, sqlx::Error> {
        query_as::<Postgres, ItemRecord>(CREATE_ITEM_SQL)
            .bind(item.uuid.into_uuid())
            .bind(item.title.as_str())
            .bind(item.description.as_str())
            .bind(image)
            .bind(amount_to_i64(item.price, "price")?)
            .fetch_one(&mut **tx)
            .await
    }
}

/// Read an item from columns named `{prefix}uuid`, `{prefix}title` and so on.
///
/// Cart and order line queries join the item under an `item_` prefix.
pub(crate) fn try_get_item(row: &PgRow, prefix: &str) -> Result<ItemRecord, sqlx::Error> {
    let col = |name: &str| format!("{prefix}{name}");

    Ok(ItemRecord {
        uuid: ItemUuid::from_uuid(row.try_get(col("uuid").as_str())?),
        title: row.try_get(col("title").as_str())?,
        description: row.try_get(col("description").as_str())?,
        image: row.try_get(col("image").as_str())?,
        price: try_get_amount(row, &col("price"))?,
        created_at: row
            .try_get::<SqlxTimestamp, _>(col("created_at").as_str())?
            .to_jiff(),
        updated_at: row
            .try_get::<SqlxTimestamp, _>(col("updated_at").as_str())?
            .to_jiff(),
    })
}

impl<'r> FromRow<'r, PgRow> for ItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        try_get_item(row, "")
    }
}
