mod elementary_fn;
mod func1d;

pub use elementary_fn::ElementaryFn;
pub use func1d::{DerX1d, DerXX1d, Func1d};
