/// Unified error type for secret reconstruction.
///
/// Every failure mode is a distinct variant so callers can tell which
/// share or subset was implicated; nothing is collapsed into a generic
/// error. All variants are terminal: inputs are static, so there is no
/// retry path.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecoverError {
    #[error("malformed value: {value:?} is not a valid base-{base} numeral")]
    MalformedValue { value: String, base: u32 },

    #[error("duplicate share index {index}")]
    DuplicateIndex { index: u64 },

    #[error("insufficient shares: need {threshold}, got {got}")]
    InsufficientShares { threshold: usize, got: usize },

    #[error("degenerate interpolation: subset contains two points with the same x")]
    DegenerateInterpolation,

    #[error("subset does not interpolate to an integer secret")]
    InexactDivision,

    #[error("no candidate secrets to tally")]
    EmptyInput,
}
