//! Domain DTOs for the cat fact API.
//!
//! # Design
//! Response types mirror the upstream JSON. `BreedList` flattens its
//! pagination envelope so the fields sit at the top level exactly as the
//! API sends them; only `data` is mandatory. `CatRequest` is the outbound
//! parameter set, and its field types carry the range rules: a length is
//! never negative and a limit is never zero.

use std::num::NonZeroU32;

use serde::{Deserialize, Deserializer, Serialize};

/// A single fact returned by `GET /fact`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatFact {
    pub fact: String,
    pub length: u32,
}

/// One breed entry. Not interpreted beyond its fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Breed {
    pub breed: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub coat: String,
    #[serde(default)]
    pub pattern: String,
}

/// A navigation link inside the pagination envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    #[serde(default)]
    pub active: bool,
}

/// Pagination metadata sent alongside the breed page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Pagination {
    pub current_page: u32,
    pub first_page_url: Option<String>,
    pub from: Option<u32>,
    pub last_page: u32,
    pub last_page_url: Option<String>,
    pub links: Vec<PageLink>,
    pub next_page_url: Option<String>,
    pub path: Option<String>,
    /// The upstream echoes the `limit` query value here, sometimes as a string.
    #[serde(deserialize_with = "number_or_string")]
    pub per_page: u32,
    pub prev_page_url: Option<String>,
    pub to: Option<u32>,
    pub total: u32,
}

/// A page of breeds returned by `GET /breeds`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreedList {
    pub data: Vec<Breed>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl BreedList {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Outbound query parameters. Absent fields are omitted from the request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<NonZeroU32>,
}

impl CatRequest {
    pub fn fact(length: Option<u32>) -> Self {
        Self { length, limit: None }
    }

    pub fn breeds(limit: Option<NonZeroU32>) -> Self {
        Self { length: None, limit }
    }

    /// Query-string pairs for the present fields, in a stable order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(length) = self.length {
            pairs.push(("max_length".to_string(), length.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cat_fact_deserializes() {
        let fact: CatFact =
            serde_json::from_str(r#"{"fact":"Cats sleep 70% of their lives.","length":30}"#)
                .unwrap();
        assert_eq!(fact.fact, "Cats sleep 70% of their lives.");
        assert_eq!(fact.length, 30);
    }

    #[test]
    fn cat_fact_rejects_missing_length() {
        let result: Result<CatFact, _> = serde_json::from_str(r#"{"fact":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn breed_list_reads_flattened_pagination() {
        let raw = r#"{
            "current_page": 1,
            "data": [{
                "breed": "Abyssinian",
                "country": "Ethiopia",
                "origin": "Natural/Standard",
                "coat": "Short",
                "pattern": "Ticked"
            }],
            "first_page_url": "https://catfact.ninja/breeds?page=1",
            "from": 1,
            "last_page": 98,
            "last_page_url": "https://catfact.ninja/breeds?page=98",
            "links": [{"url": null, "label": "Previous", "active": false}],
            "next_page_url": "https://catfact.ninja/breeds?page=2",
            "path": "https://catfact.ninja/breeds",
            "per_page": "1",
            "prev_page_url": null,
            "to": 1,
            "total": 98
        }"#;
        let list: BreedList = serde_json::from_str(raw).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.data[0].breed, "Abyssinian");
        assert_eq!(list.pagination.per_page, 1);
        assert_eq!(list.pagination.total, 98);
        assert_eq!(list.pagination.links[0].url, None);
        assert!(list.pagination.prev_page_url.is_none());
    }

    #[test]
    fn breed_list_accepts_numeric_per_page_and_missing_envelope() {
        let list: BreedList =
            serde_json::from_str(r#"{"data":[{"breed":"Manx"}],"per_page":25}"#).unwrap();
        assert_eq!(list.pagination.per_page, 25);
        assert_eq!(list.pagination.current_page, 0);
        assert_eq!(list.data[0].country, "");
    }

    #[test]
    fn breed_list_requires_data() {
        let result: Result<BreedList, _> = serde_json::from_str(r#"{"current_page":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn query_pairs_omit_absent_fields() {
        assert!(CatRequest::default().query_pairs().is_empty());
        assert_eq!(
            CatRequest::fact(Some(0)).query_pairs(),
            vec![("max_length".to_string(), "0".to_string())]
        );
        assert_eq!(
            CatRequest::breeds(NonZeroU32::new(3)).query_pairs(),
            vec![("limit".to_string(), "3".to_string())]
        );
    }

    #[test]
    fn cat_request_rejects_zero_limit() {
        let result: Result<CatRequest, _> = serde_json::from_str(r#"{"limit":0}"#);
        assert!(result.is_err());
    }
}
