use super::Interval;

// -----------------------------------------------------------------------------
// Error
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(
        "Approximant must be built from a function or a non-empty sequence of numbers, but got {}",
        .found
    )]
    InvalidArgumentType { found: String },
    #[error("x must be in the interval {}, but got {}", .interval, .x)]
    Domain { x: f64, interval: Interval },
    #[error(
        "Incompatible approximants. lhs: degree {} on {}, rhs: degree {} on {}",
        .lhs_degree, .lhs_interval, .rhs_degree, .rhs_interval
    )]
    IncompatibleApproximants {
        lhs_interval: Interval,
        lhs_degree: usize,
        rhs_interval: Interval,
        rhs_degree: usize,
    },
}
