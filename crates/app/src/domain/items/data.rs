//! Item Data

use std::{fmt, path::PathBuf, str::FromStr};

use thiserror::Error;

use crate::{domain::items::records::ItemUuid, paging::PageRequest};

/// New Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub uuid: ItemUuid,
    pub title: String,
    pub description: String,
    pub price: u64,
}

/// An uploaded image waiting to be moved into storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    /// File name as sent by the client.
    pub file_name: String,
    /// Temporary location of the uploaded bytes.
    pub path: PathBuf,
}

/// Catalog ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemSort {
    /// Insertion order.
    #[default]
    None,
    /// Title, case-insensitive.
    Alpha,
    /// Cheapest first.
    Price,
    /// Most expensive first.
    PriceDesc,
}

impl ItemSort {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "no",
            Self::Alpha => "alpha",
            Self::Price => "price",
            Self::PriceDesc => "price_desc",
        }
    }
}

impl fmt::Display for ItemSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort mode {0:?}")]
pub struct UnknownSort(pub String);

impl FromStr for ItemSort {
    type Err = UnknownSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "no" | "none" => Ok(Self::None),
            "alpha" | "name" | "title" => Ok(Self::Alpha),
            "price" | "price_asc" => Ok(Self::Price),
            "price_desc" => Ok(Self::PriceDesc),
            _ => Err(UnknownSort(s.to_owned())),
        }
    }
}

/// Catalog listing parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemQuery {
    pub search: Option<String>,
    pub sort: ItemSort,
    pub page: PageRequest,
}

impl ItemQuery {
    /// `ILIKE` pattern for the search term, or `None` when every item matches.
    #[must_use]
    pub fn search_pattern(&self) -> Option<String> {
        let term = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty())?;

        let mut pattern = String::with_capacity(term.len() + 2);

        pattern.push('%');

        for c in term.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }

            pattern.push(c);
        }

        pattern.push('%');

        Some(pattern)
    }
}
