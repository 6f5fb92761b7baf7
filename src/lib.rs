//! A tiny feed-forward neural network fitted by finite-difference gradient descent,
//! built on a small dense matrix type.
pub mod matrix;
pub mod neural;
pub mod prelude;
#[cfg(feature = "gui")]
pub mod viz;
