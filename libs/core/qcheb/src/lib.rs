//! Chebyshev series approximation of functions of one real variable.
pub mod cheb;
pub mod num;
