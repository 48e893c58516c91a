//! JSON parser: a table object or an array of table objects
//!
//! A table object either maps column names to value arrays, or carries a
//! `scores` array of `{model, precision, recall, f1}` records.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::config::ReportConfig;
use crate::model::{CellValue, MetricTable, ModelScores, TableError};

use super::Parser;

/// Parser for JSON metric files
pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, path: &Path, config: &ReportConfig) -> Result<Vec<MetricTable>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open JSON file: {}", path.display()))?;
        let reader = BufReader::new(file);

        let value: Value =
            serde_json::from_reader(reader).context("Failed to parse JSON file")?;

        parse_value(value, &config.title_column)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "json")
    }
}

/// Convert a parsed JSON document into tables
pub fn parse_value(value: Value, title_column: &str) -> Result<Vec<MetricTable>> {
    let objects = match value {
        Value::Array(arr) => arr,
        Value::Object(_) => vec![value],
        _ => bail!("JSON must be a table object or an array of table objects"),
    };

    objects
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(obj) => object_to_table(obj, title_column)
                .with_context(|| format!("Invalid metric table at index {}", i)),
            _ => bail!("Item {} is not a table object", i),
        })
        .collect()
}

/// Key of the per-model score records in a table object
const SCORES_KEY: &str = "scores";

fn object_to_table(mut obj: Map<String, Value>, title_column: &str) -> Result<MetricTable> {
    if let Some(scores) = obj.remove(SCORES_KEY) {
        return scores_to_table(scores, &obj, title_column);
    }

    let raw: IndexMap<String, Vec<CellValue>> = obj
        .into_iter()
        .map(|(name, value)| {
            let cells = match value {
                Value::Array(items) => items.iter().map(json_value_to_cell).collect(),
                scalar => vec![json_value_to_cell(&scalar)],
            };
            (name, cells)
        })
        .collect();

    Ok(MetricTable::from_raw(raw, title_column)?)
}

fn scores_to_table(
    scores: Value,
    obj: &Map<String, Value>,
    title_column: &str,
) -> Result<MetricTable> {
    let title = match obj.get(title_column) {
        Some(Value::Array(items)) => items.iter().map(json_value_to_cell).find(|c| !c.is_null()),
        Some(scalar) => Some(json_value_to_cell(scalar)).filter(|c| !c.is_null()),
        None => None,
    }
    .map(|cell| cell.display().into_owned())
    .ok_or_else(|| TableError::MissingTitle(title_column.to_string()))?;

    let ignored: Vec<&str> = obj
        .keys()
        .map(String::as_str)
        .filter(|k| *k != title_column)
        .collect();
    if !ignored.is_empty() {
        log::warn!("Table `{}`: ignoring {:?} next to `{}`", title, ignored, SCORES_KEY);
    }

    let scores: Vec<ModelScores> = serde_json::from_value(scores)
        .with_context(|| format!("Invalid `{}` records in table `{}`", SCORES_KEY, title))?;
    Ok(MetricTable::from_scores(title, &scores)?)
}

fn json_value_to_cell(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Bool(b) => CellValue::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Int(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::from(n.to_string())
            }
        }
        Value::String(s) => CellValue::from(s.as_str()),
        Value::Array(_) | Value::Object(_) => CellValue::from(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_array_of_tables() {
        let doc = json!([
            {
                "title": "Fold 1",
                "model": ["SVC", "RandomForest"],
                "precision": [0.8, 0.9],
                "support": [10, 12]
            },
            {
                "title": ["Fold 2"],
                "model": ["SVC"],
                "precision": [0.7],
                "support": [11]
            }
        ]);

        let tables = parse_value(doc, "title").unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].title(), "Fold 1");
        assert_eq!(tables[1].title(), "Fold 2");
        assert_eq!(tables[0].column("support").unwrap()[1], CellValue::Int(12));
    }

    #[test]
    fn test_single_object() {
        let doc = json!({"name": "Holdout", "model": ["SVC"], "f1": [0.5]});

        let tables = parse_value(doc, "name").unwrap();
        assert_eq!(tables[0].title(), "Holdout");
        assert_eq!(tables[0].column_names().collect::<Vec<_>>(), vec!["model", "f1"]);
    }

    #[test]
    fn test_missing_title_is_reported() {
        let doc = json!([{"model": ["SVC"]}]);
        let err = parse_value(doc, "title").unwrap_err();
        assert!(format!("{:#}", err).contains("no `title` entry"));
    }

    #[test]
    fn test_score_records() {
        let doc = json!({
            "title": "Fold 4",
            "scores": [
                {"model": "SVC", "precision": 0.8, "recall": 0.5, "f1": 0.62},
                {"model": "RandomForest", "precision": 1.0, "recall": 0.75, "f1": 0.86}
            ]
        });

        let tables = parse_value(doc, "title").unwrap();
        assert_eq!(tables[0].title(), "Fold 4");
        assert_eq!(
            tables[0].column_names().collect::<Vec<_>>(),
            vec!["model", "precision", "recall", "f1"]
        );
        assert_eq!(
            tables[0].column("model").unwrap(),
            &[CellValue::from("SVC"), CellValue::from("RandomForest")]
        );
        assert_eq!(tables[0].column("precision").unwrap()[1].display(), "1.0");
    }

    #[test]
    fn test_malformed_score_records() {
        let doc = json!({"title": "Fold 5", "scores": [{"model": "SVC", "precision": 0.8}]});
        let err = parse_value(doc, "title").unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid `scores` records in table `Fold 5`"));
    }

    #[test]
    fn test_scalar_document_rejected() {
        assert!(parse_value(json!(3), "title").is_err());
    }
}
