mod approx;
mod basis;
mod config;
mod error;
mod interval;
mod source;

pub use approx::ChebApprox;
pub use basis::ChebBasis;
pub use config::ChebApproxConfig;
pub use error::Error;
pub use interval::Interval;
pub use source::Source;
