//! Item Errors

use market_app::{items::ItemsServiceError, storage::StorageError};
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: ItemsServiceError) -> StatusError {
    match error {
        ItemsServiceError::AlreadyExists => StatusError::conflict().brief("Item already exists"),
        ItemsServiceError::InvalidReference
        | ItemsServiceError::MissingRequiredData
        | ItemsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid item payload")
        }
        ItemsServiceError::NotFound => StatusError::not_found().brief("Item not found"),
        ItemsServiceError::Storage(StorageError::InvalidFileName) => {
            StatusError::bad_request().brief("Invalid image file name")
        }
        ItemsServiceError::Storage(source @ StorageError::Io { .. }) => {
            error!("item image storage failure: {source}");

            StatusError::internal_server_error()
        }
        ItemsServiceError::Sql(source) => {
            error!("item storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn storage_errors_split_between_client_and_server() {
        let client = into_status_error(ItemsServiceError::Storage(StorageError::InvalidFileName));

        let server = into_status_error(ItemsServiceError::Storage(StorageError::Io {
            path: PathBuf::from("images/x/poster.png"),
            source: io::Error::other("disk full"),
        }));

        assert_eq!(client.code, StatusCode::BAD_REQUEST);
        assert_eq!(server.code, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            into_status_error(ItemsServiceError::NotFound).code,
            StatusCode::NOT_FOUND
        );
    }
}
