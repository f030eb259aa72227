//! Token value expressions, parsed once when the token table is built.

mod color;
mod dimension;

pub use color::{AlphaMode, ColorExpr, ALPHA_PLACEHOLDER};
pub use dimension::DimensionExpr;
