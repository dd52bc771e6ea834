//! Hole inference
//!
//! Replaces every unspecified grid position with part of a synthesized
//! blank spanning cell, so downstream traversal never meets a hole.

use std::rc::Rc;

use super::cell::{Cell, Grid, TableSlot};

/// Widest row in a ragged grid; 0 when there are no rows
pub fn max_width<T>(rows: &[Vec<T>]) -> usize {
    rows.iter().map(Vec::len).max().unwrap_or(0)
}

/// Merge holes into blank spanning cells, in place
///
/// Expects a grid of cell-or-hole slots, not raw specs. Ragged rows are
/// first padded to the grid's widest row with [`TableSlot::Empty`], then
/// each hole is resolved greedily in top-to-bottom, left-to-right order:
/// the run of holes to the right bounds the block's width, and the block
/// extends downward while every covered column of the next row is still a
/// hole. The block becomes one blank cell carrying the block's spans,
/// with [`TableSlot::Spanned`] and [`TableSlot::NoOp`] placeholders over
/// the rest of its footprint.
///
/// Each hole belongs to exactly one maximal rectangular block anchored at
/// its top-left-most hole, so a second run finds no holes and performs no
/// mutation. The synthesized blocks are fully materialized; no expansion
/// pass is needed (or wanted) afterwards.
pub fn fill_in_table(grid: &mut Grid) {
    let height = grid.len();
    let width = max_width(grid);
    for row in grid.iter_mut() {
        row.resize(width, TableSlot::Empty);
    }
    for row_index in 0..height {
        for col_index in 0..width {
            if grid[row_index][col_index].is_occupied() {
                continue;
            }
            // run of holes to the right
            let mut right = col_index + 1;
            while right < width && !grid[row_index][right].is_occupied() {
                grid[row_index][right] = TableSlot::NoOp;
                right += 1;
            }
            // extend downward while the covered columns stay blank
            let mut bottom = row_index + 1;
            while bottom < height && all_blank(&grid[bottom], col_index, right) {
                for col in col_index + 1..right {
                    grid[bottom][col] = TableSlot::NoOp;
                }
                bottom += 1;
            }
            let blank = Rc::new(Cell::with_spans("", bottom - row_index, right - col_index));
            grid[row_index][col_index] = TableSlot::Cell(Rc::clone(&blank));
            for below in row_index + 1..bottom {
                grid[below][col_index] = TableSlot::Spanned(Rc::clone(&blank));
            }
        }
    }
}

fn all_blank(row: &[TableSlot], from: usize, to: usize) -> bool {
    row[from..to].iter().all(|slot| !slot.is_occupied())
}
