pub mod expr;
pub mod fmt;

pub use expr::Expr;
pub use fmt::{ExprFormatter, FormatOptions, FormatOptionsBuilder, Glyphs};
