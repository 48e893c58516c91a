use calamine::{open_workbook, Data, Range, Reader, Xlsx};

use metricsheet::config::{ReportConfig, DEFAULT_SHEET_NAME};
use metricsheet::model::{MetricTable, ModelScores};
use metricsheet::report::{Placement, ReportExporter};

fn fold(title: &str) -> MetricTable {
    MetricTable::from_scores(
        title,
        &[
            ModelScores::new("LogisticRegression", 0.71, 0.6, 0.65),
            ModelScores::new("SVC", 0.68, 0.55, 0.61),
            ModelScores::new("RandomForest", 0.8, 0.77, 0.78),
        ],
    )
    .unwrap()
}

fn read_sheet(path: &std::path::Path) -> Range<Data> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    workbook.worksheet_range(DEFAULT_SHEET_NAME).unwrap()
}

fn string_at(range: &Range<Data>, row: u32, col: u32) -> Option<String> {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => Some(s.clone()),
        _ => None,
    }
}

#[test]
fn tables_are_written_in_a_two_column_grid() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig::new(dir.path().join("comparison")).with_open_after_export(false);
    let tables = vec![fold("Fold 1"), fold("Fold 2"), fold("Fold 3")];

    let summary = ReportExporter::new(config).export(&tables).unwrap();
    assert_eq!(summary.path, dir.path().join("comparison.xlsx"));
    assert_eq!(summary.placements[2], Placement { row: 6, col: 0 });

    let range = read_sheet(&summary.path);

    // Titles
    assert_eq!(string_at(&range, 0, 0).as_deref(), Some("Fold 1"));
    assert_eq!(string_at(&range, 0, 6).as_deref(), Some("Fold 2"));
    assert_eq!(string_at(&range, 6, 0).as_deref(), Some("Fold 3"));

    // Header row sits right below the title
    let headers: Vec<_> = (0..4).filter_map(|c| string_at(&range, 1, c)).collect();
    assert_eq!(headers, vec!["model", "precision", "recall", "f1"]);

    // Data starts two rows below the title
    assert_eq!(string_at(&range, 2, 0).as_deref(), Some("LogisticRegression"));
    assert_eq!(range.get_value((4, 1)), Some(&Data::Float(0.8)));
    assert_eq!(string_at(&range, 10, 6), None);
}

#[test]
fn repeated_exports_have_identical_cells() {
    let dir = tempfile::tempdir().unwrap();
    let tables = vec![fold("Fold 1"), fold("Fold 2"), fold("Fold 3")];

    let mut contents = Vec::new();
    for _ in 0..2 {
        let config = ReportConfig::new(dir.path().join("same")).with_open_after_export(false);
        let summary = ReportExporter::new(config).export(&tables).unwrap();
        let range = read_sheet(&summary.path);
        contents.push(range.rows().map(|r| r.to_vec()).collect::<Vec<_>>());
    }

    assert_eq!(contents[0], contents[1]);
}

#[test]
fn custom_sheet_name_and_spacing() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig::new(dir.path().join("custom"))
        .with_sheet_name("Folds")
        .with_tables_per_band(3)
        .with_table_spacing(1)
        .with_open_after_export(false);

    let summary = ReportExporter::new(config)
        .export(&[fold("A"), fold("B"), fold("C")])
        .unwrap();
    assert_eq!(
        summary.placements,
        vec![
            Placement { row: 0, col: 0 },
            Placement { row: 0, col: 5 },
            Placement { row: 0, col: 10 },
        ]
    );

    let mut workbook: Xlsx<_> = open_workbook(&summary.path).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Folds".to_string()]);
}
