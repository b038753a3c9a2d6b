//! Items service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::items::{
        data::{ImageUpload, ItemQuery, NewItem},
        errors::ItemsServiceError,
        records::{ItemRecord, ItemUuid},
        repository::PgItemsRepository,
    },
    paging::Page,
    storage::{ImageStorage, StorageError, sanitize_file_name},
};

#[derive(Clone)]
pub struct PgItemsService {
    db: Db,
    repository: PgItemsRepository,
    storage: Arc<dyn ImageStorage>,
}

impl fmt::Debug for PgItemsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgItemsService")
            .field("db", &self.db)
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}

impl PgItemsService {
    #[must_use]
    pub fn new(db: Db, storage: Arc<dyn ImageStorage>) -> Self {
        Self {
            db,
            repository: PgItemsRepository::new(),
            storage,
        }
    }
}

#[async_trait]
impl ItemsService for PgItemsService {
    async fn list_items(&self, query: ItemQuery) -> Result<Page<ItemRecord>, ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let total = self.repository.count_items(&mut tx, &query).await?;
        let items = self.repository.list_items(&mut tx, &query).await?;

        tx.commit().await?;

        Ok(Page {
            items,
            request: query.page,
            total,
        })
    }

    async fn get_item(&self, item: ItemUuid) -> Result<ItemRecord, ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let item = self.repository.get_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn create_item(
        &self,
        item: NewItem,
        image: Option<ImageUpload>,
    ) -> Result<ItemRecord, ItemsServiceError> {
        if item.title.trim().is_empty() {
            return Err(ItemsServiceError::InvalidData);
        }

        let image_name = image
            .as_ref()
            .map(|upload| {
                sanitize_file_name(&upload.file_name).ok_or(StorageError::InvalidFileName)
            })
            .transpose()?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_item(&mut tx, &item, image_name.as_deref())
            .await?;

        // Store the file before committing so a failed copy leaves no item behind.
        if let (Some(upload), Some(name)) = (&image, &image_name) {
            self.storage.store(created.uuid, name, &upload.path).await?;
        }

        tx.commit().await?;

        info!(item = %created.uuid, title = %created.title, "created item");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ItemsService: Send + Sync {
    /// One page of the catalog, filtered and ordered by `query`.
    async fn list_items(&self, query: ItemQuery) -> Result<Page<ItemRecord>, ItemsServiceError>;

    /// Retrieve a single item.
    async fn get_item(&self, item: ItemUuid) -> Result<ItemRecord, ItemsServiceError>;

    /// Add an item to the catalog, storing its image when one is given.
    async fn create_item(
        &self,
        item: NewItem,
        image: Option<ImageUpload>,
    ) -> Result<ItemRecord, ItemsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::items::data::ItemSort,
        paging::PageRequest,
        test::{TestContext, helpers::create_item},
    };

    use super::*;

    #[tokio::test]
    async fn create_item_returns_stored_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ItemUuid::new();

        let item = ctx
            .items
            .create_item(
                NewItem {
                    uuid,
                    title: "Lamp".to_string(),
                    description: "A desk lamp".to_string(),
                    price: 1999,
                },
                None,
            )
            .await?;

        assert_eq!(item.uuid, uuid);
        assert_eq!(item.title, "Lamp");
        assert_eq!(item.description, "A desk lamp");
        assert_eq!(item.price, 1999);
        assert_eq!(item.image, None);

        Ok(())
    }

    #[tokio::test]
    async fn create_item_with_blank_title_is_invalid() {
        let ctx = TestContext::new().await;

        let result = ctx
            .items
            .create_item(
                NewItem {
                    uuid: ItemUuid::new(),
                    title: "   ".to_string(),
                    description: String::new(),
                    price: 100,
                },
                None,
            )
            .await;

        assert!(
            matches!(result, Err(ItemsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_item_twice_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let item = create_item(&ctx, "Mug", 500).await?;

        let result = ctx
            .items
            .create_item(
                NewItem {
                    uuid: item.uuid,
                    title: "Mug".to_string(),
                    description: String::new(),
                    price: 500,
                },
                None,
            )
            .await;

        assert!(
            matches!(result, Err(ItemsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_item_with_image_stores_file() -> TestResult {
        let ctx = TestContext::new().await;
        let uploads = tempfile::tempdir()?;
        let upload = uploads.path().join("upload.tmp");

        tokio::fs::write(&upload, b"png").await?;

        let item = ctx
            .items
            .create_item(
                NewItem {
                    uuid: ItemUuid::new(),
                    title: "Poster".to_string(),
                    description: String::new(),
                    price: 1200,
                },
                Some(ImageUpload {
                    file_name: "C:\\photos\\poster.png".to_string(),
                    path: upload,
                }),
            )
            .await?;

        assert_eq!(item.image.as_deref(), Some("poster.png"));

        let stored = ctx
            .images
            .path()
            .join(item.uuid.to_string())
            .join("poster.png");

        assert_eq!(tokio::fs::read(stored).await?, b"png");

        Ok(())
    }

    #[tokio::test]
    async fn create_item_with_missing_upload_rolls_back() -> TestResult {
        let ctx = TestContext::new().await;
        let uploads = tempfile::tempdir()?;
        let uuid = ItemUuid::new();

        let result = ctx
            .items
            .create_item(
                NewItem {
                    uuid,
                    title: "Ghost".to_string(),
                    description: String::new(),
                    price: 100,
                },
                Some(ImageUpload {
                    file_name: "ghost.png".to_string(),
                    path: uploads.path().join("missing"),
                }),
            )
            .await;

        assert!(
            matches!(result, Err(ItemsServiceError::Storage(_))),
            "expected Storage error, got {result:?}"
        );

        let lookup = ctx.items.get_item(uuid).await;

        assert!(
            matches!(lookup, Err(ItemsServiceError::NotFound)),
            "expected NotFound, got {lookup:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_item_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.items.get_item(ItemUuid::new()).await;

        assert!(
            matches!(result, Err(ItemsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_items_pages_in_insertion_order() -> TestResult {
        let ctx = TestContext::new().await;

        let a = create_item(&ctx, "Alpha", 300).await?;
        let b = create_item(&ctx, "Bravo", 100).await?;
        let c = create_item(&ctx, "Charlie", 200).await?;

        let first = ctx
            .items
            .list_items(ItemQuery {
                page: PageRequest::new(1, 2),
                ..ItemQuery::default()
            })
            .await?;

        let uuids: Vec<_> = first.items.iter().map(|item| item.uuid).collect();

        assert_eq!(uuids, vec![a.uuid, b.uuid]);
        assert_eq!(first.total, 3);
        assert!(first.has_next());

        let second = ctx
            .items
            .list_items(ItemQuery {
                page: PageRequest::new(2, 2),
                ..ItemQuery::default()
            })
            .await?;

        let uuids: Vec<_> = second.items.iter().map(|item| item.uuid).collect();

        assert_eq!(uuids, vec![c.uuid]);
        assert!(!second.has_next());

        Ok(())
    }

    #[tokio::test]
    async fn list_items_sorts_by_price_and_title() -> TestResult {
        let ctx = TestContext::new().await;

        let lamp = create_item(&ctx, "lamp", 300).await?;
        let bowl = create_item(&ctx, "Bowl", 100).await?;
        let chair = create_item(&ctx, "chair", 200).await?;

        let uuids = |page: Page<ItemRecord>| -> Vec<ItemUuid> {
            page.items.into_iter().map(|item| item.uuid).collect()
        };

        let by_price = ctx
            .items
            .list_items(ItemQuery {
                sort: ItemSort::Price,
                ..ItemQuery::default()
            })
            .await?;

        assert_eq!(uuids(by_price), vec![bowl.uuid, chair.uuid, lamp.uuid]);

        let by_price_desc = ctx
            .items
            .list_items(ItemQuery {
                sort: ItemSort::PriceDesc,
                ..ItemQuery::default()
            })
            .await?;

        assert_eq!(
            uuids(by_price_desc),
            vec![lamp.uuid, chair.uuid, bowl.uuid]
        );

        let by_title = ctx
            .items
            .list_items(ItemQuery {
                sort: ItemSort::Alpha,
                ..ItemQuery::default()
            })
            .await?;

        assert_eq!(uuids(by_title), vec![bowl.uuid, chair.uuid, lamp.uuid]);

        Ok(())
    }

    #[tokio::test]
    async fn list_items_filters_by_title_and_description() -> TestResult {
        let ctx = TestContext::new().await;

        let lamp = create_item(&ctx, "Desk Lamp", 300).await?;
        let light = ctx
            .items
            .create_item(
                NewItem {
                    uuid: ItemUuid::new(),
                    title: "Reading light".to_string(),
                    description: "A clip-on LAMP for late nights".to_string(),
                    price: 250,
                },
                None,
            )
            .await?;

        create_item(&ctx, "Chair", 200).await?;

        let result = ctx
            .items
            .list_items(ItemQuery {
                search: Some("lamp".to_string()),
                ..ItemQuery::default()
            })
            .await?;

        let mut found: Vec<ItemUuid> = result.items.iter().map(|item| item.uuid).collect();
        let mut expected = vec![lamp.uuid, light.uuid];

        found.sort_by_key(|uuid| uuid.into_uuid());
        expected.sort_by_key(|uuid| uuid.into_uuid());

        assert_eq!(result.total, 2);
        assert_eq!(found, expected);

        Ok(())
    }

    #[tokio::test]
    async fn list_items_treats_wildcards_literally() -> TestResult {
        let ctx = TestContext::new().await;

        create_item(&ctx, "Chair", 200).await?;

        let result = ctx
            .items
            .list_items(ItemQuery {
                search: Some("%".to_string()),
                ..ItemQuery::default()
            })
            .await?;

        assert_eq!(result.total, 0);
        assert!(result.items.is_empty());

        Ok(())
    }
}
