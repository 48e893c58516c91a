//! Metric tables: a title plus named, equal-length value columns

use indexmap::IndexMap;
use thiserror::Error;

use super::cell::CellValue;

/// Default name of the column that carries a table's display title
pub const DEFAULT_TITLE_COLUMN: &str = "title";

/// Shape errors raised while assembling a table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("table has no `{0}` entry")]
    MissingTitle(String),

    #[error("column `{0}` appears more than once")]
    DuplicateColumn(String),

    #[error("table `{0}` has no value columns")]
    NoColumns(String),

    #[error("table `{title}`: column `{column}` has {found} values, expected {expected}")]
    RaggedColumn {
        title: String,
        column: String,
        expected: usize,
        found: usize,
    },
}

/// One named set of evaluation results
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTable {
    title: String,
    columns: IndexMap<String, Vec<CellValue>>,
}

impl MetricTable {
    /// Create a table from a title and its value columns
    pub fn new(
        title: impl Into<String>,
        columns: IndexMap<String, Vec<CellValue>>,
    ) -> Result<Self, TableError> {
        let title = title.into();
        let mut iter = columns.iter();
        let expected = match iter.next() {
            Some((_, values)) => values.len(),
            None => return Err(TableError::NoColumns(title)),
        };

        for (name, values) in iter {
            if values.len() != expected {
                return Err(TableError::RaggedColumn {
                    title,
                    column: name.clone(),
                    expected,
                    found: values.len(),
                });
            }
        }

        Ok(Self { title, columns })
    }

    /// Create a table from a raw column mapping where one entry holds the title.
    ///
    /// The title entry is removed from the value columns; its first non-null
    /// value becomes the title.
    pub fn from_raw(
        mut raw: IndexMap<String, Vec<CellValue>>,
        title_column: &str,
    ) -> Result<Self, TableError> {
        let title = raw
            .shift_remove(title_column)
            .and_then(|values| values.into_iter().find(|v| !v.is_null()))
            .map(|v| v.display().into_owned())
            .ok_or_else(|| TableError::MissingTitle(title_column.to_string()))?;

        Self::new(title, raw)
    }

    /// Start building a table column by column
    pub fn builder(title: impl Into<String>) -> MetricTableBuilder {
        MetricTableBuilder {
            title: title.into(),
            columns: IndexMap::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &IndexMap<String, Vec<CellValue>> {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Get a column's values by name
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Number of value columns (the title is not a column)
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.columns.values().next().map_or(0, Vec::len)
    }

    /// Iterate the data rows in column order
    pub fn rows(&self) -> impl Iterator<Item = Vec<&CellValue>> + '_ {
        (0..self.row_count()).map(move |i| self.columns.values().map(|col| &col[i]).collect())
    }
}

/// Builder returned by [`MetricTable::builder`]
#[derive(Debug)]
pub struct MetricTableBuilder {
    title: String,
    columns: IndexMap<String, Vec<CellValue>>,
}

impl MetricTableBuilder {
    /// Append a column; a repeated name replaces the earlier values in place
    pub fn column<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.columns
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Result<MetricTable, TableError> {
        MetricTable::new(self.title, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: Vec<(&str, Vec<CellValue>)>) -> IndexMap<String, Vec<CellValue>> {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_from_raw_consumes_title() {
        let table = MetricTable::from_raw(
            raw(vec![
                ("title", vec!["Fold 1".into()]),
                ("model", vec!["SVC".into(), "RandomForest".into()]),
                ("f1", vec![0.81.into(), 0.9.into()]),
            ]),
            DEFAULT_TITLE_COLUMN,
        )
        .unwrap();

        assert_eq!(table.title(), "Fold 1");
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["model", "f1"]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_missing_title() {
        let err = MetricTable::from_raw(raw(vec![("model", vec!["SVC".into()])]), "title")
            .unwrap_err();
        assert_eq!(err, TableError::MissingTitle("title".into()));
    }

    #[test]
    fn test_no_value_columns() {
        let err = MetricTable::builder("empty").build().unwrap_err();
        assert_eq!(err, TableError::NoColumns("empty".into()));
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let err = MetricTable::builder("t")
            .column("model", ["a", "b"])
            .column("recall", [0.5])
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            TableError::RaggedColumn {
                title: "t".into(),
                column: "recall".into(),
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn test_rows_follow_column_order() {
        let table = MetricTable::builder("t")
            .column("model", ["a", "b"])
            .column("precision", [0.1, 0.2])
            .build()
            .unwrap();

        let rows: Vec<Vec<String>> = table
            .rows()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        assert_eq!(rows, vec![vec!["a", "0.1"], vec!["b", "0.2"]]);
    }
}
