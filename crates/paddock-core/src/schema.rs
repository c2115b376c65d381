// ── Column schema ──
//
// Ordered column descriptions shared by the TUI table widget and the
// CLI table renderer. A column either carries a renderer closure or
// falls back to looking its key up in the row's JSON form.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Width hint for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnWidth {
    /// Share the leftover space evenly with other `Fill` columns.
    #[default]
    Fill,
    /// Exact character width.
    Fixed(u16),
    /// Percentage of the table width.
    Percent(u16),
}

/// One column of a resource table.
#[derive(Clone)]
pub struct Column<T> {
    /// Field key, camelCase as the wire types serialize it.
    pub key: String,
    pub header: String,
    pub width: ColumnWidth,
    render: Option<Arc<dyn Fn(&T) -> String + Send + Sync>>,
}

impl<T> Column<T> {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: ColumnWidth::Fill,
            render: None,
        }
    }

    #[must_use]
    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }

    /// Attach a renderer, overriding the field lookup fallback.
    #[must_use]
    pub fn render(mut self, f: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(f));
        self
    }
}

impl<T: Serialize> Column<T> {
    /// Cell text for `row`: the renderer when set, otherwise the value
    /// of `key` in the row's JSON form. Nulls and missing keys render
    /// as a dash placeholder.
    pub fn cell(&self, row: &T) -> String {
        if let Some(render) = &self.render {
            return render(row);
        }
        serde_json::to_value(row)
            .ok()
            .and_then(|v| v.get(&self.key).cloned())
            .map_or_else(|| "-".to_owned(), format_value)
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}

fn format_value(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "-".to_owned(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Bool(true) => "yes".to_owned(),
        serde_json::Value::Bool(false) => "no".to_owned(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Row {
        name_en: String,
        is_active: bool,
        delivery_fee: Option<f64>,
    }

    fn row() -> Row {
        Row {
            name_en: "North pasture".into(),
            is_active: true,
            delivery_fee: None,
        }
    }

    #[test]
    fn field_lookup_uses_camel_case_keys() {
        let col: Column<Row> = Column::new("nameEn", "Name");
        assert_eq!(col.cell(&row()), "North pasture");
    }

    #[test]
    fn booleans_and_nulls_render_readably() {
        let active: Column<Row> = Column::new("isActive", "Active");
        let fee: Column<Row> = Column::new("deliveryFee", "Fee");
        assert_eq!(active.cell(&row()), "yes");
        assert_eq!(fee.cell(&row()), "-");
    }

    #[test]
    fn renderer_overrides_lookup() {
        let col = Column::new("nameEn", "Name").render(|r: &Row| r.name_en.to_uppercase());
        assert_eq!(col.cell(&row()), "NORTH PASTURE");
    }
}
