/// Precondition violations detected by [`AutoDiff`](crate::AutoDiff).
///
/// Domain errors of the scalar math (`ln` of a negative value, `acos` outside
/// `[-1, 1]`, ...) are not represented here: they surface as NaN/inf in the
/// result exactly as the scalar type produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AutoDiffError {
    #[error("seed index {index} out of range for {total} parameters")]
    SeedOutOfRange { index: usize, total: usize },

    #[error("derivative dimension mismatch: {lhs} vs {rhs}")]
    DimensionMismatch { lhs: usize, rhs: usize },
}

pub type Result<T> = std::result::Result<T, AutoDiffError>;
