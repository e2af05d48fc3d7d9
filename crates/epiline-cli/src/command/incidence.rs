use std::path::PathBuf;

use epiline_incidence::{
    Frequency, IncidenceOptions, RollingKind, TransformOptions, aggregate, records_to_frame,
    transform, transformed_to_frame,
};

use crate::{command::Format, input, render};

#[derive(Debug, Clone, clap::Args)]
pub struct IncidenceArg {
    /// Path to a JSON line list (an array of flat objects)
    #[arg(long)]
    input: PathBuf,
    /// Column containing event dates (strict YYYY-MM-DD)
    #[arg(long, default_value = "date")]
    date_col: String,
    /// Time bucketing: daily or weekly (CDC/MMWR epiweeks)
    #[arg(long, default_value = "weekly")]
    freq: Frequency,
    /// Stratification columns, comma-separated
    #[arg(long, value_delimiter = ',')]
    by: Vec<String>,
    /// Keep only observed periods instead of filling gaps with zeros
    #[arg(long)]
    no_fill_gaps: bool,
    /// Trailing rolling window size in periods
    #[arg(long)]
    rolling: Option<usize>,
    /// Aggregation inside the rolling window: sum or mean
    #[arg(long, default_value = "sum")]
    rolling_kind: RollingKind,
    /// Accumulate a running total per stratum (applied after rolling)
    #[arg(long)]
    cumulative: bool,
    /// Output format: markdown or json
    #[arg(long, default_value = "markdown")]
    format: Format,
}

pub fn run(arg: &IncidenceArg) -> anyhow::Result<()> {
    let frame = input::load_frame(&arg.input)?;
    let options = IncidenceOptions {
        date_col: arg.date_col.clone(),
        freq: arg.freq,
        by: arg.by.clone(),
        fill_gaps: !arg.no_fill_gaps,
    };
    let records = aggregate(&frame, &options)?;

    let table = if arg.rolling.is_some() || arg.cumulative {
        let transformed = transform(
            &records,
            &TransformOptions {
                rolling: arg.rolling,
                rolling_kind: arg.rolling_kind,
                cumulative: arg.cumulative,
            },
        )?;
        transformed_to_frame(&transformed, &options.by, options.freq)
    } else {
        records_to_frame(&records, &options.by, options.freq)
    };

    match arg.format {
        Format::Markdown => println!("{}", render::frame_to_markdown(&table, None)),
        Format::Json => println!("{}", render::frame_to_json_string(&table)?),
    }
    Ok(())
}
