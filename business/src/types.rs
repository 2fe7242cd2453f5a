//! Wire types of the collection endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Filter and paging parameters, rendered into the query string in key order.
///
/// Conventional keys are `page`, `search`, `status` and `category`.
pub type QueryParams = BTreeMap<String, String>;

pub const PAGE_PARAM: &str = "page";

/// Paging metadata of the last applied fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub total_count: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            total_count: 0,
            has_next: false,
            has_previous: false,
        }
    }
}

/// `GET <endpoint>` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<R> {
    pub data: Vec<R>,
    #[serde(default)]
    pub pagination: Pagination,
}
