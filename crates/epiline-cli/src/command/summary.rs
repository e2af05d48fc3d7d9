use std::path::PathBuf;

use epiline_summary::{OutputShape, SummaryOptions, summarize_frame};

use crate::{command::Format, input, render};

#[derive(Debug, Clone, clap::Args)]
pub struct SummaryArg {
    /// Path to a JSON line list (an array of flat objects)
    #[arg(long)]
    input: PathBuf,
    /// Grouping columns, comma-separated
    #[arg(long, value_delimiter = ',')]
    by: Vec<String>,
    /// Columns summarized as dates, comma-separated
    #[arg(long, value_delimiter = ',')]
    date_cols: Vec<String>,
    /// Columns summarized as numbers, comma-separated
    #[arg(long, value_delimiter = ',')]
    numeric_cols: Vec<String>,
    /// Columns summarized categorically, comma-separated
    #[arg(long, value_delimiter = ',')]
    categorical_cols: Vec<String>,
    /// Number of categorical ranks to report
    #[arg(long, default_value_t = 3)]
    top_k: usize,
    /// Tabular shape: long or wide
    #[arg(long, default_value = "long")]
    output: OutputShape,
    /// Output format: markdown or json
    #[arg(long, default_value = "markdown")]
    format: Format,
    /// Maximum rows printed in markdown output
    #[arg(long, default_value_t = 40)]
    max_rows: usize,
}

pub fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let frame = input::load_frame(&arg.input)?;
    let options = SummaryOptions {
        by: arg.by.clone(),
        date_cols: arg.date_cols.clone(),
        numeric_cols: arg.numeric_cols.clone(),
        categorical_cols: arg.categorical_cols.clone(),
        top_k: arg.top_k,
        output: arg.output,
    };
    let table = summarize_frame(&frame, &options)?;

    match arg.format {
        Format::Markdown => println!("{}", render::frame_to_markdown(&table, Some(arg.max_rows))),
        Format::Json => println!("{}", render::frame_to_json_string(&table)?),
    }
    Ok(())
}
