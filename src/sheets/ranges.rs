// The publish target is hardcoded: the spreadsheet must already exist and be
// shared with the service account before a run.
pub const SPREADSHEET_NAME: &str = "benchmark";

/// Timings always land in the first row of the first sheet, replacing the
/// previous run.
pub const RW_TIMES_ROW: u32 = 1;
