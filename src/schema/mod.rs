//! Schema layer: the column set shared by the extractor and the locator,
//! and the in-memory interval table built from it.
//!
//! Both sides resolve headers through [`Column`], so the snake_case names we
//! write and the "Date Begin" style names of the published CSV map to the
//! same fields.

pub mod column;
pub mod row;

pub use column::{COLUMNS, Column, ColumnKind};
pub use row::{Cell, ConfigRow, ConfigTable};
