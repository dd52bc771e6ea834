//! Span-aware grid layout engine
//!
//! Computes a fully-expanded rectangular grid from a sparse,
//! span-annotated table specification, handling column spans, row spans,
//! and auto-merged holes.
//!
//! # Architecture
//!
//! ```text
//! raw specs  -> generate_cells -> expand_cells -> materialized Grid
//! holed grid -> fill_in_table  ------------------^
//! ```
//!
//! The two pipelines are independent passes over the same grid
//! representation: `generate_cells`/`expand_cells` materializes declared
//! spans, `fill_in_table` infers blank spanning cells from unspecified
//! positions. The integrating layer chooses which to run.

mod cell;
mod expand;
mod fill;


// Re-export public API
pub use cell::{Cell, CellSpec, Grid, TableSlot};
pub use expand::{expand_cells, generate_cells, make_table_layout};
pub use fill::{fill_in_table, max_width};
