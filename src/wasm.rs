//! WASM bindings for spangrid
//!
//! This module provides JavaScript-accessible functions for table grid
//! layout. Rows come in as plain JS values in the shapes a JS caller
//! would write: a string or number (content), `null` (a hole or an
//! empty cell, depending on the entry point), or an object with
//! `content`, `colSpan` and `rowSpan` fields.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{Cell, CellSpec, Grid, TableSlot};

/// One raw cell as a JS caller writes it
#[cfg(feature = "wasm")]
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCell {
    Text(String),
    Number(f64),
    Spec(CellSpec),
}

#[cfg(feature = "wasm")]
impl From<RawCell> for CellSpec {
    fn from(raw: RawCell) -> Self {
        match raw {
            RawCell::Text(content) => CellSpec::new(content),
            RawCell::Number(value) => CellSpec::new(value.to_string()),
            RawCell::Spec(spec) => spec,
        }
    }
}

/// One grid position in the returned layout
#[cfg(feature = "wasm")]
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SlotView {
    /// A normal cell
    Cell {
        content: String,
        row_span: usize,
        col_span: usize,
    },
    /// Covered vertically; carries a copy of the origin cell's fields
    Spanned {
        content: String,
        row_span: usize,
        col_span: usize,
    },
    /// Covered horizontally by a column span
    NoOp,
    /// A hole (only possible when a pass has not run)
    Empty,
}

#[cfg(feature = "wasm")]
impl From<&TableSlot> for SlotView {
    fn from(slot: &TableSlot) -> Self {
        match slot {
            TableSlot::Cell(cell) => SlotView::Cell {
                content: cell.content.clone(),
                row_span: cell.row_span,
                col_span: cell.col_span,
            },
            TableSlot::Spanned(origin) => SlotView::Spanned {
                content: origin.content.clone(),
                row_span: origin.row_span,
                col_span: origin.col_span,
            },
            TableSlot::NoOp => SlotView::NoOp,
            TableSlot::Empty => SlotView::Empty,
        }
    }
}

/// Layout result with error metadata
#[cfg(feature = "wasm")]
#[derive(Serialize)]
pub struct LayoutOutcome {
    /// The laid-out grid, row by row; empty when the layout failed
    pub grid: Vec<Vec<SlotView>>,
    /// Whether the layout succeeded
    pub success: bool,
    /// Error message if the layout failed
    pub error: Option<String>,
}

#[cfg(feature = "wasm")]
fn grid_views(grid: &Grid) -> Vec<Vec<SlotView>> {
    grid.iter()
        .map(|row| row.iter().map(SlotView::from).collect())
        .collect()
}

#[cfg(feature = "wasm")]
fn failure(error: String) -> JsValue {
    let outcome = LayoutOutcome {
        grid: Vec::new(),
        success: false,
        error: Some(error),
    };
    serde_wasm_bindgen::to_value(&outcome).unwrap()
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Build a fully expanded layout from raw rows
///
/// # Arguments
/// * `rows` - rows of raw cells (string | number | null | object); `null`
///   entries become empty cells
///
/// # Returns
/// A `{grid, success, error}` object
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "makeTableLayout")]
pub fn make_table_layout_wasm(rows: JsValue) -> JsValue {
    let raw: Vec<Vec<Option<RawCell>>> = match serde_wasm_bindgen::from_value(rows) {
        Ok(raw) => raw,
        Err(e) => return failure(format!("Invalid rows: {}", e)),
    };
    let specs: Vec<Vec<CellSpec>> = raw
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.map(CellSpec::from).unwrap_or_default())
                .collect()
        })
        .collect();

    let outcome = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        crate::make_table_layout(specs)
    })) {
        Ok(Ok(grid)) => LayoutOutcome {
            grid: grid_views(&grid),
            success: true,
            error: None,
        },
        Ok(Err(e)) => LayoutOutcome {
            grid: Vec::new(),
            success: false,
            error: Some(e.to_string()),
        },
        Err(e) => {
            // Try to extract panic message for better error reporting
            let error_msg = if let Some(s) = e.downcast_ref::<&str>() {
                format!("Layout failed: {}", s)
            } else if let Some(s) = e.downcast_ref::<String>() {
                format!("Layout failed: {}", s)
            } else {
                "Layout failed: unknown error (check browser console for details)".to_string()
            };
            LayoutOutcome {
                grid: Vec::new(),
                success: false,
                error: Some(error_msg),
            }
        }
    };

    serde_wasm_bindgen::to_value(&outcome).unwrap()
}

/// Merge holes in a grid of raw cells into blank spanning cells
///
/// # Arguments
/// * `rows` - rows of raw cells (string | number | null | object); `null`
///   entries are holes
///
/// # Returns
/// A `{grid, success, error}` object
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "fillInTable")]
pub fn fill_in_table_wasm(rows: JsValue) -> JsValue {
    let raw: Vec<Vec<Option<RawCell>>> = match serde_wasm_bindgen::from_value(rows) {
        Ok(raw) => raw,
        Err(e) => return failure(format!("Invalid rows: {}", e)),
    };
    let mut grid: Grid = raw
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    Some(raw) => TableSlot::cell(Cell::from(CellSpec::from(raw))),
                    None => TableSlot::Empty,
                })
                .collect()
        })
        .collect();

    crate::fill_in_table(&mut grid);

    let outcome = LayoutOutcome {
        grid: grid_views(&grid),
        success: true,
        error: None,
    };
    serde_wasm_bindgen::to_value(&outcome).unwrap()
}

/// Widest row of the given rows
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "maxWidth")]
pub fn max_width_wasm(rows: JsValue) -> Result<usize, JsValue> {
    let rows: Vec<Vec<serde::de::IgnoredAny>> =
        serde_wasm_bindgen::from_value(rows).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(crate::max_width(&rows))
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
