// ── List query ──

use std::collections::BTreeMap;

use paddock_api::ListRequest;

/// Sort direction for a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Everything that parameterizes one list fetch: page, page size, sort,
/// and the applied filter values.
///
/// Filters with empty values never make it onto the wire; they are
/// dropped both here (via [`FilterSet::debounced_values`]) and again at
/// encode time in the request builder.
///
/// [`FilterSet::debounced_values`]: crate::filter::FilterSet::debounced_values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub sort: Option<(String, SortOrder)>,
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub const DEFAULT_PER_PAGE: u32 = 25;

    /// Build the wire request for this query.
    pub fn to_request(&self) -> ListRequest {
        let mut req = ListRequest::new(self.page, self.per_page);
        if let Some((key, order)) = &self.sort {
            req = req.sort(key.clone(), *order == SortOrder::Asc);
        }
        for (key, value) in &self.filters {
            req = req.param(key.clone(), value.clone());
        }
        req
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: Self::DEFAULT_PER_PAGE,
            sort: None,
            filters: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_and_filters_flow_into_the_request() {
        let query = ListQuery {
            sort: Some(("name".into(), SortOrder::Desc)),
            filters: BTreeMap::from([
                ("search".into(), "golden".into()),
                ("status".into(), String::new()),
            ]),
            ..ListQuery::default()
        };

        let req = query.to_request();
        let params = req.params();

        assert!(params.contains(&("sortBy".into(), "name".into())));
        assert!(params.contains(&("sortOrder".into(), "desc".into())));
        assert!(params.contains(&("search".into(), "golden".into())));
        assert!(!params.iter().any(|(k, _)| k == "status"));
    }
}
