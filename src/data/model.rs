use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// Column – one named series
// ---------------------------------------------------------------------------

/// A single named series. Cells that did not parse as numbers are `NaN`
/// and get dropped point-wise when plotting.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    /// Same length as the owning table's `timestamps`.
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The parsed dataset: one timestamp per row plus the remaining columns in
/// file order. The `Timestamp` column itself is never part of `columns`.
///
/// A table is only ever built by a fully successful load and replaced
/// wholesale by the next one.
#[derive(Debug, Clone)]
pub struct Table {
    pub timestamps: Vec<NaiveDateTime>,
    pub columns: Vec<Column>,
}

impl Table {
    /// Non-timestamp column names, in file order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
