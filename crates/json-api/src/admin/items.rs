//! Create Item Handler

use std::sync::Arc;

use market_app::{
    items::{
        data::{ImageUpload, NewItem},
        records::ItemUuid,
    },
    money::parse_price,
};
use salvo::{http::header::LOCATION, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, items::errors::into_status_error, state::State};

/// Item Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemCreatedResponse {
    /// Created item UUID
    pub uuid: Uuid,
}

/// Create Item Handler
///
/// Accepts `title`, `description` and `price` form fields plus an optional
/// `image` file part. An empty file part counts as no image.
#[endpoint(
    tags("admin"),
    summary = "Create Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Item already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let title = req.form::<String>("title").await.unwrap_or_default();
    let description = req.form::<String>("description").await.unwrap_or_default();

    let price = req
        .form::<String>("price")
        .await
        .ok_or_else(|| StatusError::bad_request().brief("Missing price"))?;

    let price = parse_price(&price).or_400("Invalid price")?;

    let image = req
        .file("image")
        .await
        .filter(|part| part.size() > 0)
        .map(|part| ImageUpload {
            file_name: part.name().unwrap_or_default().to_owned(),
            path: part.path().clone(),
        });

    let item = NewItem {
        uuid: ItemUuid::new(),
        title,
        description,
        price,
    };

    let uuid = state
        .app
        .items
        .create_item(item, image)
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/items/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ItemCreatedResponse {
        uuid: uuid.into_uuid(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use market_app::{
        items::{ItemsServiceError, MockItemsService, records::ItemRecord},
        storage::StorageError,
    };
    use salvo::{
        http::header::CONTENT_TYPE,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::{
        app_service, strict_carts_mock, strict_items_mock, strict_orders_mock,
    };

    use super::*;

    const BOUNDARY: &str = "market-test-boundary";

    fn make_service(items: MockItemsService) -> Service {
        app_service(
            items,
            strict_carts_mock(),
            strict_orders_mock(),
            Router::with_path("admin/items").post(handler),
        )
    }

    fn record_for(item: NewItem, image: Option<&ImageUpload>) -> ItemRecord {
        let now = Timestamp::UNIX_EPOCH;

        ItemRecord {
            uuid: item.uuid,
            title: item.title,
            description: item.description,
            image: image.map(|upload| upload.file_name.clone()),
            price: item.price,
            created_at: now,
            updated_at: now,
        }
    }

    fn multipart(fields: &[(&str, &str)], file: Option<(&str, &str)>) -> String {
        let mut body = String::new();

        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }

        if let Some((file_name, contents)) = file {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; \
                 filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n{contents}\r\n"
            ));
        }

        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        body
    }

    #[tokio::test]
    async fn test_create_item_from_form() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_create_item()
            .once()
            .withf(|item, image| {
                item.title == "Desk Lamp"
                    && item.description == "Brass"
                    && item.price == 1250
                    && image.is_none()
            })
            .return_once(|item, image| Ok(record_for(item, image.as_ref())));

        items.expect_list_items().never();
        items.expect_get_item().never();

        let mut res = TestClient::post("http://example.com/admin/items")
            .form(&[
                ("title", "Desk Lamp"),
                ("description", "Brass"),
                ("price", "12.50"),
            ])
            .send(&make_service(items))
            .await;

        let body: ItemCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/items/{}", body.uuid).as_str()));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_with_image_upload() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_create_item()
            .once()
            .withf(|item, image| {
                item.title == "Poster"
                    && image
                        .as_ref()
                        .is_some_and(|upload| upload.file_name == "poster.png")
            })
            .return_once(|item, image| Ok(record_for(item, image.as_ref())));

        items.expect_list_items().never();
        items.expect_get_item().never();

        let res = TestClient::post("http://example.com/admin/items")
            .add_header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
                true,
            )
            .body(multipart(
                &[("title", "Poster"), ("description", ""), ("price", "3")],
                Some(("poster.png", "not really a png")),
            ))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_ignores_empty_image_part() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_create_item()
            .once()
            .withf(|_, image| image.is_none())
            .return_once(|item, image| Ok(record_for(item, image.as_ref())));

        items.expect_list_items().never();
        items.expect_get_item().never();

        let res = TestClient::post("http://example.com/admin/items")
            .add_header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
                true,
            )
            .body(multipart(
                &[("title", "Poster"), ("price", "3")],
                Some(("", "")),
            ))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_bad_price_returns_400() -> TestResult {
        for price in ["abc", "-1.00", "1.234"] {
            let res = TestClient::post("http://example.com/admin/items")
                .form(&[("title", "Lamp"), ("price", price)])
                .send(&make_service(strict_items_mock()))
                .await;

            assert_eq!(
                res.status_code,
                Some(StatusCode::BAD_REQUEST),
                "price {price:?}"
            );
        }

        let res = TestClient::post("http://example.com/admin/items")
            .form(&[("title", "Lamp")])
            .send(&make_service(strict_items_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_service_errors() -> TestResult {
        for (error, status) in [
            (ItemsServiceError::InvalidData, StatusCode::BAD_REQUEST),
            (ItemsServiceError::AlreadyExists, StatusCode::CONFLICT),
            (
                ItemsServiceError::Storage(StorageError::InvalidFileName),
                StatusCode::BAD_REQUEST,
            ),
        ] {
            let mut items = MockItemsService::new();

            items
                .expect_create_item()
                .once()
                .return_once(move |_, _| Err(error));

            items.expect_list_items().never();
            items.expect_get_item().never();

            let res = TestClient::post("http://example.com/admin/items")
                .form(&[("title", " "), ("price", "1")])
                .send(&make_service(items))
                .await;

            assert_eq!(res.status_code, Some(status));
        }

        Ok(())
    }
}
