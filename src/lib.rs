//! # spangrid
//!
//! Span-aware table grid layout engine for text-table rendering.
//!
//! ## Features
//!
//! - **Span Expansion**: materializes declared `colSpan`/`rowSpan` intent
//!   into a rectangular grid of explicit slot variants
//! - **Hole Inference**: auto-merges unspecified positions into maximal
//!   blank spanning cells
//! - **Traversal Without Geometry**: downstream code walks the grid by
//!   variant, never re-deriving span footprints
//! - **Pure and Deterministic**: synchronous in-place mutation with
//!   bit-identical output for identical input
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Declared spans
//!
//! ```rust
//! use spangrid::{make_table_layout, CellSpec, TableSlot};
//!
//! let grid = make_table_layout(vec![
//!     vec![CellSpec::spanning("hello", 1, 2)],
//!     vec!["hola".into(), "adios".into()],
//! ])
//! .unwrap();
//!
//! // the column span is materialized as a no-op placeholder
//! assert!(matches!(grid[0][1], TableSlot::NoOp));
//! assert_eq!(grid[0].len(), grid[1].len());
//! ```
//!
//! ### Hole inference
//!
//! ```rust
//! use spangrid::{fill_in_table, Cell, TableSlot};
//!
//! let mut grid = vec![
//!     vec![TableSlot::Empty, TableSlot::cell(Cell::new("a"))],
//!     vec![TableSlot::Empty, TableSlot::Empty],
//! ];
//! fill_in_table(&mut grid);
//!
//! // the left column merged into one blank cell spanning both rows
//! match &grid[0][0] {
//!     TableSlot::Cell(blank) => assert_eq!(blank.row_span, 2),
//!     other => panic!("expected a blank spanning cell, got {:?}", other),
//! }
//! assert!(matches!(grid[1][0], TableSlot::Spanned(_)));
//! ```

/// Core layout modules
pub mod core;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the layout engine
pub use crate::core::layout::{
    expand_cells, fill_in_table, generate_cells, make_table_layout, max_width, Cell, CellSpec,
    Grid, TableSlot,
};

// Re-export utilities
pub use crate::utils::error::{LayoutError, LayoutResult};
