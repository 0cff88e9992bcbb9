//! Wire types for the catalog API.
//!
//! Payload shapes mirror the remote backend's JSON contract but are defined
//! independently of it; the card summary itself lives in [`crate::model`]
//! since the deck owns copies of it.

use serde::{Deserialize, Serialize};

/// Search parameters for `GET /cards`.
#[derive(Debug, Clone, Default)]
pub struct CardQuery {
    pub name: Option<String>,
    pub set_code: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl CardQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Query-string pairs, omitting unset fields. Page params are only sent
    /// when explicitly requested (the backend has its own defaults).
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(set_code) = &self.set_code {
            pairs.push(("set", set_code.clone()));
        }
        if self.page > 0 {
            pairs.push(("page", self.page.to_string()));
        }
        if self.page_size > 0 {
            pairs.push(("pageSize", self.page_size.to_string()));
        }
        pairs
    }
}

/// A page of results as returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default, rename = "totalCount")]
    pub total_count: u32,
}

/// Envelope for single-object responses (`{"data": {...}}`).
#[derive(Debug, Deserialize)]
pub struct Single<T> {
    pub data: T,
}

/// A card set as listed by `GET /sets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default, rename = "releaseDate")]
    pub release_date: Option<String>,
}

/// Response to a successful authenticated deck save.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedDeck {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_omit_unset() {
        let query = CardQuery::by_name("Flamewing");
        assert_eq!(query.to_pairs(), vec![("name", "Flamewing".to_string())]);
    }

    #[test]
    fn test_query_pairs_full() {
        let query = CardQuery {
            name: Some("Flamewing".to_string()),
            set_code: Some("BSE".to_string()),
            page: 2,
            page_size: 50,
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("name", "Flamewing".to_string()),
                ("set", "BSE".to_string()),
                ("page", "2".to_string()),
                ("pageSize", "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_paged_defaults() {
        let page: Paged<String> = serde_json::from_str(r#"{"data":["a"]}"#).unwrap();
        assert_eq!(page.data, vec!["a"]);
        assert_eq!(page.page, 0);
        assert_eq!(page.total_count, 0);
    }
}
