// ── List request parameters ──

/// Query parameters for a paginated list call.
///
/// `page` and `limit` are always sent; everything else is optional.
/// Empty or whitespace-only values are dropped at insertion time so the
/// wire never carries literal empty strings.
#[derive(Debug, Clone)]
pub struct ListRequest {
    pub page: u32,
    pub limit: u32,
    params: Vec<(String, String)>,
}

impl ListRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit,
            params: Vec::new(),
        }
    }

    /// Add a query parameter, dropping empty values.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.params.push((key.into(), value));
        }
        self
    }

    /// Add an optional query parameter.
    #[must_use]
    pub fn opt_param(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Sort key and order, sent as `sortBy` / `sortOrder`.
    #[must_use]
    pub fn sort(self, key: impl Into<String>, ascending: bool) -> Self {
        self.param("sortBy", key)
            .param("sortOrder", if ascending { "asc" } else { "desc" })
    }

    /// The extra parameters added so far (`page`/`limit` excluded).
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Materialize the full parameter list, `page`/`limit` included.
    pub(crate) fn encode(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.params.len() + 2);
        out.push(("page".into(), self.page.to_string()));
        out.push(("limit".into(), self.limit.to_string()));
        out.extend(self.params.iter().cloned());
        out
    }
}

impl Default for ListRequest {
    fn default() -> Self {
        Self::new(1, 25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_dropped() {
        let req = ListRequest::new(1, 25)
            .param("search", "")
            .param("status", "   ")
            .param("role", "admin");
        let encoded = req.encode();
        assert_eq!(encoded.len(), 3); // page, limit, role
        assert!(encoded.iter().any(|(k, v)| k == "role" && v == "admin"));
        assert!(!encoded.iter().any(|(k, _)| k == "search" || k == "status"));
    }

    #[test]
    fn page_is_clamped_to_at_least_one() {
        let req = ListRequest::new(0, 10);
        assert_eq!(req.page, 1);
    }
}
