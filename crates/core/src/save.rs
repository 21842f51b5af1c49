//! Save file codec
//!
//! Big-endian, fixed-width layout:
//!
//! | Offset | Field | Type | Constraint |
//! |--------|-------|------|------------|
//! | 0 | variant tag | i32 | 0, 1 or 2; anything else sizes the grid as Classic |
//! | 4 | cells | rows*columns x i32, row-major | each in `0..=max_rank` |
//! | next | score | i64 | `>= 0` |
//! | next | won flag | i32 | 0 or 1 |
//!
//! Bytes after the won flag are ignored.

use std::io;

use crate::grid::Grid;
use crate::types::VariantKind;
use crate::variant::Variant;

/// Structural or range violation found while parsing a save blob.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CorruptSaveError {
    #[error("save data truncated: needed {needed} bytes, found {found}")]
    Truncated { needed: usize, found: usize },
    #[error("cell ({row}, {col}) holds {value}, outside 0..={max}")]
    CellOutOfRange {
        row: usize,
        col: usize,
        value: i64,
        max: u8,
    },
    #[error("negative score {0}")]
    NegativeScore(i64),
    #[error("won flag must be 0 or 1, found {0}")]
    InvalidWonFlag(i32),
    #[error("grid is {rows}x{columns}, variant expects {expected_rows}x{expected_columns}")]
    Shape {
        rows: usize,
        columns: usize,
        expected_rows: usize,
        expected_columns: usize,
    },
}

/// Failure to restore a game from a file.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("corrupt save: {0}")]
    Corrupt(#[from] CorruptSaveError),
}

/// Validated contents of a save blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSave {
    pub kind: VariantKind,
    /// Tag as written, kept to report unknown tags
    pub raw_tag: i32,
    pub grid: Grid,
    pub score: u64,
    pub has_won: bool,
}

/// Total blob size for a variant: tag + cells + score + flag.
pub fn encoded_len(variant: &Variant) -> usize {
    4 + 4 * variant.cell_count() + 8 + 4
}

pub fn encode(kind: VariantKind, grid: &Grid, score: u64, has_won: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + 4 * grid.cells().len() + 12);
    out.extend_from_slice(&kind.tag().to_be_bytes());
    for &rank in grid.cells() {
        out.extend_from_slice(&(rank as i32).to_be_bytes());
    }
    let score = i64::try_from(score).unwrap_or(i64::MAX);
    out.extend_from_slice(&score.to_be_bytes());
    out.extend_from_slice(&(has_won as i32).to_be_bytes());
    out
}

pub fn decode(bytes: &[u8]) -> Result<DecodedSave, CorruptSaveError> {
    let mut reader = Reader::new(bytes);

    let raw_tag = reader.i32()?;
    let kind = VariantKind::from_tag(raw_tag);
    let variant = Variant::of(kind);
    reader.require(encoded_len(&variant))?;

    let max = variant.max_rank();
    let mut grid = Grid::new(variant.rows, variant.columns);
    for row in 0..variant.rows {
        for col in 0..variant.columns {
            let value = reader.i32()?;
            let rank = check_cell(row, col, value as i64, max)?;
            grid.set(row, col, rank);
        }
    }

    let score = reader.i64()?;
    if score < 0 {
        return Err(CorruptSaveError::NegativeScore(score));
    }

    let has_won = match reader.i32()? {
        0 => false,
        1 => true,
        other => return Err(CorruptSaveError::InvalidWonFlag(other)),
    };

    Ok(DecodedSave {
        kind,
        raw_tag,
        grid,
        score: score as u64,
        has_won,
    })
}

/// Range-check one cell value against the variant's max rank.
pub(crate) fn check_cell(
    row: usize,
    col: usize,
    value: i64,
    max: u8,
) -> Result<u8, CorruptSaveError> {
    if value < 0 || value > max as i64 {
        return Err(CorruptSaveError::CellOutOfRange {
            row,
            col,
            value,
            max,
        });
    }
    Ok(value as u8)
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn require(&self, needed: usize) -> Result<(), CorruptSaveError> {
        if self.bytes.len() < needed {
            return Err(CorruptSaveError::Truncated {
                needed,
                found: self.bytes.len(),
            });
        }
        Ok(())
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], CorruptSaveError> {
        self.require(self.pos + N)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.bytes[self.pos..self.pos + N]);
        self.pos += N;
        Ok(buf)
    }

    fn i32(&mut self) -> Result<i32, CorruptSaveError> {
        self.take::<4>().map(i32::from_be_bytes)
    }

    fn i64(&mut self) -> Result<i64, CorruptSaveError> {
        self.take::<8>().map(i64::from_be_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(tag: i32, cells: &[i32], score: i64, won: i32) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&tag.to_be_bytes());
        for c in cells {
            out.extend_from_slice(&c.to_be_bytes());
        }
        out.extend_from_slice(&score.to_be_bytes());
        out.extend_from_slice(&won.to_be_bytes());
        out
    }

    #[test]
    fn test_layout_is_big_endian_fixed_width() {
        let mut grid = Grid::new(4, 4);
        grid.set(0, 0, 1);
        grid.set(3, 3, 11);
        let bytes = encode(VariantKind::Themed, &grid, 260, true);

        assert_eq!(bytes.len(), 4 + 4 * 16 + 8 + 4);
        assert_eq!(&bytes[0..4], &[0, 0, 0, 1]);
        assert_eq!(&bytes[4..8], &[0, 0, 0, 1]);
        assert_eq!(&bytes[64..68], &[0, 0, 0, 11]);
        assert_eq!(&bytes[68..76], &[0, 0, 0, 0, 0, 0, 1, 4]);
        assert_eq!(&bytes[76..80], &[0, 0, 0, 1]);
    }

    #[test]
    fn test_decode_extended_blob() {
        let mut cells = vec![0; 25];
        cells[24] = 26;
        let decoded = decode(&blob(2, &cells, 12, 0)).unwrap();
        assert_eq!(decoded.kind, VariantKind::Extended);
        assert_eq!(decoded.grid.rows(), 5);
        assert_eq!(decoded.grid.get(4, 4), Some(26));
        assert_eq!(decoded.score, 12);
        assert!(!decoded.has_won);
    }

    #[test]
    fn test_negative_cell_rejected() {
        let mut cells = vec![0; 16];
        cells[5] = -1;
        let err = decode(&blob(0, &cells, 0, 0)).unwrap_err();
        assert_eq!(
            err,
            CorruptSaveError::CellOutOfRange {
                row: 1,
                col: 1,
                value: -1,
                max: 17
            }
        );
    }

    #[test]
    fn test_cell_bound_follows_variant() {
        let mut cells = vec![0; 16];
        cells[0] = 17;
        assert!(decode(&blob(0, &cells, 0, 0)).is_ok());
        cells[0] = 18;
        assert!(matches!(
            decode(&blob(0, &cells, 0, 0)),
            Err(CorruptSaveError::CellOutOfRange { value: 18, .. })
        ));

        let mut cells = vec![0; 25];
        cells[0] = 26;
        assert!(decode(&blob(2, &cells, 0, 0)).is_ok());
        cells[0] = 27;
        assert!(decode(&blob(2, &cells, 0, 0)).is_err());
    }

    #[test]
    fn test_negative_score_rejected() {
        let err = decode(&blob(0, &[0; 16], -5, 0)).unwrap_err();
        assert_eq!(err, CorruptSaveError::NegativeScore(-5));
    }

    #[test]
    fn test_won_flag_must_be_boolean() {
        let err = decode(&blob(0, &[0; 16], 0, 2)).unwrap_err();
        assert_eq!(err, CorruptSaveError::InvalidWonFlag(2));
        assert!(decode(&blob(0, &[0; 16], 0, 1)).unwrap().has_won);
    }

    #[test]
    fn test_unknown_tag_sizes_as_classic() {
        let decoded = decode(&blob(9, &[1; 16], 0, 0)).unwrap();
        assert_eq!(decoded.kind, VariantKind::Classic);
        assert_eq!(decoded.raw_tag, 9);
        assert_eq!(decoded.grid.tile_count(), 16);
    }

    #[test]
    fn test_truncated_blob_rejected() {
        let bytes = blob(2, &[0; 16], 0, 0);
        assert_eq!(
            decode(&bytes).unwrap_err(),
            CorruptSaveError::Truncated {
                needed: 4 + 100 + 12,
                found: bytes.len()
            }
        );
        assert!(matches!(
            decode(&[0, 0]),
            Err(CorruptSaveError::Truncated { needed: 4, found: 2 })
        ));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut bytes = blob(0, &[0; 16], 8, 0);
        bytes.extend_from_slice(&[0xde, 0xad]);
        assert_eq!(decode(&bytes).unwrap().score, 8);
    }
}
