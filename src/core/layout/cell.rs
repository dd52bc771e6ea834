//! Cell variants and raw cell specifications for grid layout

use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A normal table cell with its declared span footprint
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Cell {
    /// Cell content
    pub content: String,
    /// Number of rows this cell occupies
    pub row_span: usize,
    /// Number of columns this cell occupies
    pub col_span: usize,
}

impl Cell {
    /// Create a cell with content and a 1x1 footprint
    pub fn new(content: impl Into<String>) -> Self {
        Cell {
            content: content.into(),
            row_span: 1,
            col_span: 1,
        }
    }

    /// Create an empty-content cell with a 1x1 footprint
    pub fn blank() -> Self {
        Cell::new("")
    }

    /// Create a cell with explicit spans; a span of zero is normalized to 1
    pub fn with_spans(content: impl Into<String>, row_span: usize, col_span: usize) -> Self {
        Cell {
            content: content.into(),
            row_span: row_span.max(1),
            col_span: col_span.max(1),
        }
    }
}

/// Raw cell specification consumed by [`generate_cells`]
///
/// Mirrors the shapes a caller may hand in: a bare value (content only,
/// via the `From` conversions), an absent value (empty content), or a
/// structured spec with explicit content and spans. Absent or zero spans
/// default to 1.
///
/// [`generate_cells`]: super::generate_cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CellSpec {
    /// Text payload; `None` becomes an empty string
    pub content: Option<String>,
    /// Declared column span
    pub col_span: Option<usize>,
    /// Declared row span
    pub row_span: Option<usize>,
}

impl CellSpec {
    /// Spec carrying content only
    pub fn new(content: impl Into<String>) -> Self {
        CellSpec {
            content: Some(content.into()),
            ..CellSpec::default()
        }
    }

    /// Spec with nothing declared; lifts into an empty-content cell
    pub fn empty() -> Self {
        CellSpec::default()
    }

    /// Spec with content and explicit spans
    pub fn spanning(content: impl Into<String>, row_span: usize, col_span: usize) -> Self {
        CellSpec {
            content: Some(content.into()),
            col_span: Some(col_span),
            row_span: Some(row_span),
        }
    }
}

impl From<&str> for CellSpec {
    fn from(content: &str) -> Self {
        CellSpec::new(content)
    }
}

impl From<String> for CellSpec {
    fn from(content: String) -> Self {
        CellSpec::new(content)
    }
}

impl From<CellSpec> for Cell {
    fn from(spec: CellSpec) -> Self {
        Cell {
            content: spec.content.unwrap_or_default(),
            row_span: spec.row_span.filter(|&span| span > 0).unwrap_or(1),
            col_span: spec.col_span.filter(|&span| span > 0).unwrap_or(1),
        }
    }
}

/// A single grid position
///
/// The layout passes produce grids where every occupied position holds
/// exactly one of the cell variants; rendering code traverses the grid by
/// matching on them:
///
/// - [`Cell`](TableSlot::Cell): render the content across the declared
///   span footprint.
/// - [`Spanned`](TableSlot::Spanned): skip rendering; the handle resolves
///   to the normal cell one or more rows above whose row span covers this
///   position. It never points at another placeholder.
/// - [`NoOp`](TableSlot::NoOp): skip entirely; the position is consumed
///   by a column span declared to the left.
/// - [`Empty`](TableSlot::Empty): a hole. Only present before
///   [`fill_in_table`](super::fill_in_table) runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSlot {
    /// A normal cell
    Cell(Rc<Cell>),
    /// Covered vertically by a cell in an earlier row
    Spanned(Rc<Cell>),
    /// Covered horizontally by a column span declared to the left
    NoOp,
    /// A hole: nothing declared at this position
    Empty,
}

impl TableSlot {
    /// Wrap a cell in a grid-owned handle
    pub fn cell(cell: Cell) -> Self {
        TableSlot::Cell(Rc::new(cell))
    }

    /// Whether this position holds any cell variant; a hole does not
    pub fn is_occupied(&self) -> bool {
        !matches!(self, TableSlot::Empty)
    }

    /// The normal cell backing this position: the cell itself for
    /// [`Cell`](TableSlot::Cell), the origin for
    /// [`Spanned`](TableSlot::Spanned)
    pub fn origin(&self) -> Option<&Rc<Cell>> {
        match self {
            TableSlot::Cell(cell) | TableSlot::Spanned(cell) => Some(cell),
            TableSlot::NoOp | TableSlot::Empty => None,
        }
    }
}

/// A table grid: rows of slots
///
/// Rows may be ragged and holed before the layout passes run. After
/// [`expand_cells`](super::expand_cells) every row has identical length.
pub type Grid = Vec<Vec<TableSlot>>;
