//! Span materialization
//!
//! Converts declared span intent into a fully materialized grid: after
//! expansion every position consumed by a span holds an explicit
//! placeholder slot, and all rows of a well-formed table have equal
//! length.

use std::rc::Rc;

use super::cell::{CellSpec, Grid, TableSlot};
use crate::utils::error::{LayoutError, LayoutResult};

/// Build a fully expanded layout from raw cell specs
///
/// Composition of [`generate_cells`] and [`expand_cells`]. Expects specs
/// without holes; grids with unspecified positions go through
/// [`fill_in_table`](super::fill_in_table) instead.
pub fn make_table_layout(rows: Vec<Vec<CellSpec>>) -> LayoutResult<Grid> {
    let mut grid = generate_cells(rows);
    expand_cells(&mut grid)?;
    Ok(grid)
}

/// Lift raw cell specs into normal cells, one per input position
///
/// Holes are not treated specially here: an absent spec still yields a
/// valid empty-content cell with a 1x1 footprint.
pub fn generate_cells(rows: Vec<Vec<CellSpec>>) -> Grid {
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|spec| TableSlot::cell(spec.into()))
                .collect()
        })
        .collect()
}

/// Materialize declared spans as placeholder slots, in place
///
/// For a cell with a column span of `c`, inserts `c - 1` no-op slots
/// immediately after it in its own row. For a cell with a row span of
/// `r`, inserts into each of the `r - 1` rows below, at the same column
/// index, a [`TableSlot::Spanned`] handle to the cell followed by `c - 1`
/// no-op slots, keeping the spanned rows column-aligned with the origin
/// row.
///
/// Rows are processed bottom-up: a row's own column-span insertions
/// settle its column indices before any row above inserts into it, so
/// placeholder blocks land at final positions. Within a row, the scan
/// bound is re-read as the row grows; freshly inserted placeholders are
/// visited and skipped.
///
/// Spans of 1 (or 0, normalized at construction) insert nothing. A row
/// span that reaches past the last row fails with
/// [`LayoutError::RowSpanOutOfBounds`].
pub fn expand_cells(grid: &mut Grid) -> LayoutResult<()> {
    for row_index in (0..grid.len()).rev() {
        let mut column_index = 0;
        while column_index < grid[row_index].len() {
            let origin = match &grid[row_index][column_index] {
                TableSlot::Cell(cell) => Rc::clone(cell),
                _ => {
                    column_index += 1;
                    continue;
                }
            };
            for _ in 1..origin.col_span {
                grid[row_index].insert(column_index + 1, TableSlot::NoOp);
            }
            for offset in 1..origin.row_span {
                let target = row_index + offset;
                if target >= grid.len() {
                    return Err(LayoutError::row_span_out_of_bounds(
                        row_index,
                        origin.row_span,
                        grid.len(),
                    ));
                }
                let row = &mut grid[target];
                // past-the-end insertion appends, as with splicing
                let insert_at = column_index.min(row.len());
                row.insert(insert_at, TableSlot::Spanned(Rc::clone(&origin)));
                for k in 1..origin.col_span {
                    row.insert(insert_at + k, TableSlot::NoOp);
                }
            }
            column_index += 1;
        }
    }
    Ok(())
}
