/// Voice DNA system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of style dimensions in a voice DNA profile.
pub const DIMENSION_COUNT: usize = 9;

/// Timeline deltas with a rounded magnitude at or below this are
/// suppressed as rounding noise.
pub const DELTA_SIGNIFICANCE_POINTS: i32 = 5;

/// Point difference at which two scores stop being "Similar".
pub const DIFFERENT_THRESHOLD_POINTS: f64 = 15.0;

/// Point difference at which two scores become "Very Different".
pub const VERY_DIFFERENT_THRESHOLD_POINTS: f64 = 40.0;

/// Minimum number of source clones in a merge.
pub const MIN_MERGE_SOURCES: usize = 2;

/// Maximum number of source clones in a merge.
pub const MAX_MERGE_SOURCES: usize = 5;

/// Weight assigned to every dimension cell when a source is added.
pub const DEFAULT_MERGE_WEIGHT: f64 = 50.0;

/// Upper bound of a raw merge weight.
pub const MAX_MERGE_WEIGHT: f64 = 100.0;

/// Tolerance for normalized shares summing to 1.0 per dimension.
pub const SHARE_SUM_TOLERANCE: f64 = 1e-9;
