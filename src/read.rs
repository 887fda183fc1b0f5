use crate::board::Board;
use ca_formats::{
    rle::{Error as RleError, Rle},
    Input,
};

impl Board {
    /// Reads a board from a pattern in RLE format, taking the rule from the
    /// header when present. RLE positions are `(x, y)`, i.e. `(col, row)`.
    pub fn from_rle<I: Input>(rle: Rle<I>) -> Result<Self, RleError> {
        let rule = rle
            .header_data()
            .and_then(|header| header.rule.as_deref())
            .and_then(|rulestring| rulestring.parse().ok())
            .unwrap_or_default();
        let mut board = Self::new(rule);
        for cell in rle {
            let (x, y) = cell?.position;
            board.set_cell(y, x, true);
        }
        Ok(board)
    }
}
