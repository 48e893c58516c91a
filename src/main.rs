//! metricsheet - Excel reports for model evaluation metrics

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use termcolor::{ColorChoice, StandardStream};

use metricsheet::config::{ReportConfig, DEFAULT_SHEET_NAME};
use metricsheet::model::DEFAULT_TITLE_COLUMN;
use metricsheet::output::{render_preview, write_export_status};
use metricsheet::parser::ParserFactory;
use metricsheet::report::ReportExporter;

/// Export model evaluation metrics (JSON, CSV, Excel) to a styled Excel report
#[derive(Parser, Debug)]
#[command(name = "metricsheet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Metric table files, placed in the order given
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output path without extension; `.xlsx` is always appended
    #[arg(short, long)]
    output: PathBuf,

    /// Worksheet name
    #[arg(long, default_value = DEFAULT_SHEET_NAME)]
    sheet_name: String,

    /// Tables per band before wrapping to a new row of tables
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..))]
    per_band: u16,

    /// Empty columns between tables in a band
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(0..16_384))]
    spacing: u16,

    /// Empty rows between bands
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(0..1_048_576))]
    band_spacing: u32,

    /// Input column holding each table's title
    #[arg(long, default_value = DEFAULT_TITLE_COLUMN)]
    title_column: String,

    /// For Excel input: only read this sheet
    #[arg(long)]
    sheet: Option<String>,

    /// Draw thin borders around header and data cells
    #[arg(long)]
    borders: bool,

    /// Number format for numeric cells (e.g. "0.00")
    #[arg(long)]
    number_format: Option<String>,

    /// Do not open the report after saving it
    #[arg(long)]
    no_open: bool,

    /// Print the tables to the terminal before exporting
    #[arg(long)]
    preview: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::default()
        .filter_level(level)
        .parse_env(env_logger::Env::default().filter_or("METRICSHEET_LOG", level.as_str()))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ReportConfig::new(cli.output)
        .with_sheet_name(cli.sheet_name)
        .with_tables_per_band(usize::from(cli.per_band))
        .with_table_spacing(cli.spacing)
        .with_band_spacing(cli.band_spacing)
        .with_title_column(cli.title_column)
        .with_data_borders(cli.borders)
        .with_open_after_export(!cli.no_open);
    if let Some(sheet) = cli.sheet {
        config = config.with_input_sheet(sheet);
    }
    if let Some(format) = cli.number_format {
        config = config.with_number_format(format);
    }

    let factory = ParserFactory::new();
    let mut tables = Vec::new();
    for input in &cli.inputs {
        let parsed = factory
            .parse(input, &config)
            .with_context(|| format!("Failed to parse input file: {}", input.display()))?;
        tables.extend(parsed);
    }
    if tables.is_empty() {
        bail!("No metric tables found in the input files");
    }

    if cli.preview {
        render_preview(&tables, &mut std::io::stdout())?;
        println!();
    }

    let summary = ReportExporter::new(config).export(&tables)?;

    let color = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color);
    write_export_status(&summary, &mut stdout)?;

    Ok(())
}
