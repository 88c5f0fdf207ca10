/// Controls how batch operations react to a bad record.
///
/// Both the decoder and the row-level feature facade process records
/// independently, so a failure is always attributable to a single record
/// or input index and never corrupts the rest of the batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the batch with the first per-record error.
    #[default]
    FailFast,
    /// Skip the offending record, log it, and report it alongside the
    /// surviving output.
    BestEffort,
}

/// Top-level preparation configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrepConfig {
    /// Per-record failure handling for batch operations.
    pub error_policy: ErrorPolicy,
}
