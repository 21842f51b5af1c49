//! Line merge - compaction and pairwise merging of a single row or column
//!
//! A line is given in scan order: index 0 is the edge tiles slide toward. The pass
//! walks a read cursor over the non-empty cells and a write cursor over the output.
//! Cells below `merge_floor` in the output are the product of a merge made during this
//! pass and never take part in a second one, so `[1, 1, 1, 1]` becomes `[2, 2, 0, 0]`.

use crate::style::TileStyleTable;
use crate::types::MAX_SIDE;

/// What happened to one line during a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineOutcome {
    /// The line differs from its input
    pub moved: bool,
    /// Number of pairwise merges
    pub merges: u32,
    /// Score gained from this line's merges
    pub gained: u64,
}

/// Slide and merge `line` in place toward index 0.
///
/// Merging two tiles of rank `r` yields rank `r + 1` and scores `styles.score(r + 1)`.
/// Pairs already at the table's max rank are left as they are.
pub fn slide_line(line: &mut [u8], styles: &TileStyleTable) -> LineOutcome {
    debug_assert!(line.len() <= MAX_SIDE);

    let max_rank = styles.max_rank();
    let mut out = [0u8; MAX_SIDE];
    let mut outcome = LineOutcome::default();

    let mut write = 0usize;
    let mut merge_floor = 0usize;

    for read in 0..line.len() {
        let rank = line[read];
        if rank == 0 {
            continue;
        }

        // The previous written cell is a partner only if it is past the boundary.
        if write > merge_floor && out[write - 1] == rank && rank < max_rank {
            let merged = rank + 1;
            out[write - 1] = merged;
            outcome.merges += 1;
            outcome.gained += styles.score(merged);
            merge_floor = write;
        } else {
            out[write] = rank;
            write += 1;
        }
    }

    let out = &out[..line.len()];
    if out != line {
        line.copy_from_slice(out);
        outcome.moved = true;
    }
    outcome
}
