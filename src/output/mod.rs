mod summary;

pub(crate) use summary::{RunSummary, print_summary, summary_json};
