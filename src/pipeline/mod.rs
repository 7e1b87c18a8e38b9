//! Sequential processing pipeline over the two snapshots:
//! clean → diff → date formatting.

pub(crate) mod clean;
pub(crate) mod dates;
pub(crate) mod diff;

use chrono::NaiveDate;

use crate::error::ParseError;
use crate::table::Table;

pub(crate) use clean::CleanCounts;

/// Caller-owned result of one processing run.
#[derive(Debug)]
pub(crate) struct ProcessOutcome {
    pub(crate) cleaned: Table,
    pub(crate) new_records: Table,
    pub(crate) counts: CleanCounts,
    pub(crate) previous_keys: usize,
    /// Processing date used for the output filename stamps.
    pub(crate) stamp: NaiveDate,
}

/// Run the full pipeline. Pure with respect to its inputs: both result
/// tables are freshly built and owned by the caller.
pub(crate) fn process(
    latest: &Table,
    previous: &Table,
    stamp: NaiveDate,
) -> Result<ProcessOutcome, ParseError> {
    let (mut cleaned, counts) = clean::clean_latest(latest)?;
    let previous_keys = diff::previous_key_set(previous)?;
    let mut new_records = diff::new_records(&cleaned, &previous_keys)?;

    dates::reformat_date_columns(&mut cleaned);
    dates::reformat_date_columns(&mut new_records);

    Ok(ProcessOutcome {
        cleaned,
        new_records,
        counts,
        previous_keys: previous_keys.len(),
        stamp,
    })
}
