// ── Response envelope normalization ──
//
// The admin API's list endpoints answer in one of two shapes:
//
//   { "success": true, "data": [..], "pagination": { "page", "limit", "total", "totalPages" } }
//   { "success": true, "items": [..], "total": n, "totalPages": n }
//
// Both are decoded here and normalized into a single `ListPage<T>`
// immediately after the network call, so nothing downstream ever
// branches on response shape.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::Error;

/// Pagination metadata as reported by the server.
///
/// Server-echoed values are authoritative: when a requested page is out
/// of range the server clamps it and reports the page it actually served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// 1-based page number actually served.
    pub page: u32,
    /// Page size actually applied.
    pub limit: u32,
    /// Total matching records.
    pub total: u64,
    /// Total pages; at least 1 even for an empty result set.
    pub total_pages: u32,
}

impl PageMeta {
    /// A safe default used after a failed fetch: page 1 of 1, nothing in it.
    pub fn empty() -> Self {
        Self {
            page: 1,
            limit: 0,
            total: 0,
            total_pages: 1,
        }
    }
}

/// One page of rows plus normalized pagination metadata.
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    pub meta: PageMeta,
}

// ── Wire shapes ─────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPagination {
    page: Option<u32>,
    limit: Option<u32>,
    total: Option<u64>,
    total_pages: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawListEnvelope<T> {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    // Shape A
    data: Option<Vec<T>>,
    pagination: Option<RawPagination>,
    // Shape B
    items: Option<Vec<T>>,
    total: Option<u64>,
    total_pages: Option<u32>,
}

impl<T: DeserializeOwned> RawListEnvelope<T> {
    /// Normalize into a `ListPage`, preferring server-echoed pagination
    /// values over the client-requested ones.
    pub(crate) fn normalize(self, requested_page: u32, requested_limit: u32) -> Result<ListPage<T>, Error> {
        if !self.success {
            return Err(Error::Api {
                message: self
                    .message
                    .unwrap_or_else(|| "request rejected by server".into()),
                code: self.code,
                status: 200,
            });
        }

        let rows = self.data.or(self.items).unwrap_or_default();

        let (page, limit, total, total_pages) = match self.pagination {
            Some(p) => (p.page, p.limit, p.total, p.total_pages),
            None => (None, None, self.total, self.total_pages),
        };

        let total = total.unwrap_or_else(|| u64::try_from(rows.len()).unwrap_or(u64::MAX));
        let meta = PageMeta {
            page: page.unwrap_or(requested_page).max(1),
            limit: limit.unwrap_or(requested_limit),
            total,
            total_pages: total_pages.unwrap_or(1).max(1),
        };

        Ok(ListPage { rows, meta })
    }
}

// ── Mutation envelope ───────────────────────────────────────────────

/// Outcome reported by bulk uploads (e.g. animal CSV imports).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSummary {
    #[serde(default)]
    pub created: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawMutationEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    pub(crate) data: Option<serde_json::Value>,
    #[serde(default)]
    summary: Option<UploadSummary>,
}

/// Normalized acknowledgement of a successful mutation.
#[derive(Debug, Clone, Default)]
pub struct MutationAck {
    /// Human-readable message from the server, when provided.
    pub message: Option<String>,
    /// Bulk-operation summary, when provided.
    pub summary: Option<UploadSummary>,
}

impl RawMutationEnvelope {
    pub(crate) fn normalize(self) -> Result<MutationAck, Error> {
        if self.success {
            Ok(MutationAck {
                message: self.message,
                summary: self.summary,
            })
        } else {
            Err(Error::Api {
                message: self
                    .message
                    .unwrap_or_else(|| "request rejected by server".into()),
                code: self.code,
                status: 200,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode<T: DeserializeOwned>(v: serde_json::Value) -> RawListEnvelope<T> {
        serde_json::from_value(v).expect("envelope should decode")
    }

    #[test]
    fn data_pagination_shape_normalizes() {
        let env: RawListEnvelope<String> = decode(json!({
            "success": true,
            "data": ["a", "b"],
            "pagination": { "page": 3, "limit": 2, "total": 10, "totalPages": 5 }
        }));
        let page = env.normalize(1, 25).expect("success envelope");
        assert_eq!(page.rows, vec!["a", "b"]);
        assert_eq!(page.meta.page, 3);
        assert_eq!(page.meta.total_pages, 5);
    }

    #[test]
    fn items_total_shape_normalizes() {
        let env: RawListEnvelope<String> = decode(json!({
            "success": true,
            "items": ["x"],
            "total": 1,
            "totalPages": 1
        }));
        let page = env.normalize(1, 25).expect("success envelope");
        assert_eq!(page.rows, vec!["x"]);
        assert_eq!(page.meta.total, 1);
        assert_eq!(page.meta.limit, 25);
    }

    #[test]
    fn success_false_becomes_api_error() {
        let env: RawListEnvelope<String> = decode(json!({
            "success": false,
            "message": "no such farm",
            "code": "farm.missing"
        }));
        let err = env.normalize(1, 25).expect_err("business error");
        assert!(matches!(err, Error::Api { status: 200, .. }));
        assert_eq!(err.api_error_code(), Some("farm.missing"));
    }

    #[test]
    fn empty_result_defaults_total_pages_to_one() {
        let env: RawListEnvelope<String> = decode(json!({
            "success": true,
            "items": [],
            "total": 0,
            "totalPages": 0
        }));
        let page = env.normalize(4, 25).expect("success envelope");
        assert!(page.rows.is_empty());
        assert_eq!(page.meta.total_pages, 1);
        assert_eq!(page.meta.page, 4);
    }
}
