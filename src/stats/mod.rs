/// Aggregation engine: pure functions from records to derived artifacts.
///
/// Every function here is UI-free and recomputed on demand; nothing is
/// cached or persisted. Views that honour the brand filter pass the filtered
/// subset, the remaining views pass the full dataset.

pub mod central;
pub mod frequency;
pub mod trend;

use thiserror::Error;

/// Failure modes of the aggregation functions. These are signalled, never
/// silently mapped to 0 or NaN.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatError {
    /// The (possibly filtered) input holds no records.
    #[error("no data to aggregate")]
    EmptyInput,
    /// A least-squares fit over fewer than two points or zero-variance input.
    #[error("trend fit is undefined for this input")]
    DegenerateFit,
}
