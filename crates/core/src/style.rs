//! Tile style tables - per-variant display metadata for every rank
//!
//! Each table is indexed by rank. Entry 0 describes the empty cell, entry `r` the
//! tile displayed as `2^r`. The `score` column is what a merge producing that rank
//! adds to the running score.

use crate::types::Rgb;

/// Display label, colors and merge score for one rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileStyle {
    pub label: &'static str,
    pub fg: Rgb,
    pub bg: Rgb,
    pub score: u64,
}

const fn tile(label: &'static str, fg: Rgb, bg: u32, score: u64) -> TileStyle {
    TileStyle {
        label,
        fg,
        bg: Rgb::hex(bg),
        score,
    }
}

const BLACK: Rgb = Rgb::BLACK;
const WHITE: Rgb = Rgb::WHITE;

/// Ordered rank -> style lookup for one variant.
#[derive(Debug, PartialEq, Eq)]
pub struct TileStyleTable {
    entries: &'static [TileStyle],
}

impl TileStyleTable {
    /// Highest rank this table defines.
    ///
    /// This is also the largest cell value a save file may carry for the variant.
    pub fn max_rank(&self) -> u8 {
        (self.entries.len() - 1) as u8
    }

    /// Style for `rank`. Ranks past the end render as the last entry.
    pub fn get(&self, rank: u8) -> &TileStyle {
        let idx = (rank as usize).min(self.entries.len() - 1);
        &self.entries[idx]
    }

    /// Score awarded for creating a tile of `rank`.
    pub fn score(&self, rank: u8) -> u64 {
        self.get(rank).score
    }

    /// Widest label in the table, in chars.
    pub fn max_label_width(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0)
    }
}

static CLASSIC_ENTRIES: [TileStyle; 18] = [
    tile("", BLACK, 0xffffff, 0),
    tile("2", BLACK, 0xffffe0, 2),
    tile("4", BLACK, 0xfffacd, 4),
    tile("8", BLACK, 0xfff68f, 8),
    tile("16", BLACK, 0xffec8b, 16),
    tile("32", BLACK, 0xffd700, 32),
    tile("64", BLACK, 0xffc125, 64),
    tile("128", BLACK, 0xffa500, 128),
    tile("256", BLACK, 0xff8c00, 256),
    tile("512", BLACK, 0xff7f24, 512),
    tile("1024", BLACK, 0xff7f00, 1024),
    tile("2048", WHITE, 0xff0000, 2048),
    tile("4096", WHITE, 0xff0000, 4096),
    tile("8192", WHITE, 0x000000, 8192),
    tile("16384", WHITE, 0x000000, 16384),
    tile("32768", WHITE, 0x000000, 32768),
    tile("65536", WHITE, 0x000000, 65536),
    tile("131072", WHITE, 0x000000, 131072),
];

// Labels are romanized so every glyph occupies one terminal column.
static THEMED_ENTRIES: [TileStyle; 18] = [
    tile("", BLACK, 0xffffff, 0),
    tile("Xia", BLACK, 0xffffe0, 2),
    tile("Shang", BLACK, 0xfffacd, 4),
    tile("Zhou", BLACK, 0xfff68f, 8),
    tile("Han", BLACK, 0xffec8b, 16),
    tile("Tang", BLACK, 0xffd700, 32),
    tile("Song", BLACK, 0xffc125, 64),
    tile("Yuan", BLACK, 0xffa500, 128),
    tile("Ming", BLACK, 0xff8c00, 256),
    tile("Qing", BLACK, 0xff7f24, 512),
    tile("Minguo", WHITE, 0x0000ff, 1024),
    tile("Tianchao", WHITE, 0xff0000, 2048),
    tile("Chuji", WHITE, 0xff0000, 4096),
    tile("Zhongji", WHITE, 0xff0000, 8192),
    tile("Gaoji", WHITE, 0xff0000, 16384),
    tile("Gongchan", WHITE, 0xff0000, 32768),
    tile("Minzhu", WHITE, 0x0000ff, 65536),
    tile("Lixiang", WHITE, 0x000000, 131072),
];

static EXTENDED_ENTRIES: [TileStyle; 27] = [
    tile("", BLACK, 0xffffff, 0),
    tile("2", BLACK, 0xffffe0, 2),
    tile("4", BLACK, 0xfffacd, 4),
    tile("8", BLACK, 0xfff68f, 8),
    tile("16", BLACK, 0xffec8b, 16),
    tile("32", BLACK, 0xffd700, 32),
    tile("64", BLACK, 0xffc125, 64),
    tile("128", BLACK, 0xffa500, 128),
    tile("256", BLACK, 0xff8c00, 256),
    tile("512", BLACK, 0xff7f24, 512),
    tile("1024", BLACK, 0xff7f00, 1024),
    tile("2048", BLACK, 0xff4500, 2048),
    tile("4096", BLACK, 0xff4040, 4096),
    tile("8192", BLACK, 0xff3030, 8192),
    tile("16384", WHITE, 0xff0000, 16384),
    tile("32768", WHITE, 0xff0000, 32768),
    tile("65536", WHITE, 0x000000, 65536),
    tile("131072", WHITE, 0x000000, 131072),
    tile("262144", WHITE, 0x000000, 262144),
    tile("524288", WHITE, 0x000000, 524288),
    tile("1.05M", WHITE, 0x000000, 1048576),
    tile("2.10M", WHITE, 0x000000, 2097152),
    tile("4.19M", WHITE, 0x000000, 4194304),
    tile("8.39M", WHITE, 0x000000, 8388608),
    tile("16.8M", WHITE, 0x000000, 16777216),
    tile("33.6M", WHITE, 0x000000, 33554432),
    tile("67.1M", WHITE, 0x000000, 67108864),
];

pub static CLASSIC_STYLES: TileStyleTable = TileStyleTable {
    entries: &CLASSIC_ENTRIES,
};

pub static THEMED_STYLES: TileStyleTable = TileStyleTable {
    entries: &THEMED_ENTRIES,
};

pub static EXTENDED_STYLES: TileStyleTable = TileStyleTable {
    entries: &EXTENDED_ENTRIES,
};
