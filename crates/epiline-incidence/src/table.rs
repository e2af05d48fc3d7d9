//! Tabular output shaping for incidence records.
//!
//! Output schema: stratification columns (if any), then the period columns
//! (`date` for daily mode; `epi_year`, `epi_week` for weekly mode), then
//! `cases`.

use epiline_frame::{Frame, Value};

use crate::{Frequency, IncidenceRecord, Period, TransformedRecord};

fn period_columns(by: &[String], freq: Frequency) -> Vec<String> {
    let mut columns: Vec<String> = by.to_vec();
    match freq {
        Frequency::Daily => columns.push("date".into()),
        Frequency::Weekly => {
            columns.push("epi_year".into());
            columns.push("epi_week".into());
        }
    }
    columns.push("cases".into());
    columns
}

fn push_period(row: &mut Vec<Value>, period: Period) {
    match period {
        Period::Day(date) => row.push(Value::Date(date)),
        Period::Week(week) => {
            row.push(Value::Int(week.year.into()));
            row.push(Value::Int(week.week.into()));
        }
    }
}

/// Reshapes aggregated records into the incidence output schema.
#[must_use]
pub fn records_to_frame(records: &[IncidenceRecord], by: &[String], freq: Frequency) -> Frame {
    let mut frame = Frame::new(period_columns(by, freq));
    for record in records {
        let mut row = record.stratum.values().to_vec();
        push_period(&mut row, record.period);
        row.push(Value::Int(
            i64::try_from(record.cases).expect("case counts fit in i64"),
        ));
        frame.push_row(row);
    }
    frame
}

/// Reshapes transformed records into the incidence output schema; the
/// `cases` column holds the transformed (real-valued) series.
#[must_use]
pub fn transformed_to_frame(records: &[TransformedRecord], by: &[String], freq: Frequency) -> Frame {
    let mut frame = Frame::new(period_columns(by, freq));
    for record in records {
        let mut row = record.stratum.values().to_vec();
        push_period(&mut row, record.period);
        row.push(Value::Float(record.value));
        frame.push_row(row);
    }
    frame
}
