//! Core layout modules
//!
//! This module contains the layout engine:
//! - `layout`: span expansion and hole inference over table grids

pub mod layout;

// Re-export main types and functions from layout
pub use layout::{
    expand_cells, fill_in_table, generate_cells, make_table_layout, max_width, Cell, CellSpec,
    Grid, TableSlot,
};
