use crate::cell::Cell;
use thiserror::Error;

/// Errors that can occur when advancing a board.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// A step reached a cell whose neighbors cannot be represented without
    /// overflowing the coordinate type. The board is left unchanged.
    #[error("Cell at {0:?} is out of the representable coordinate range.")]
    CellOutOfRange(Cell),
}
