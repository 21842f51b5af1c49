//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, TileStyleTable};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Modal message drawn over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Won,
    GameOver,
    ConfirmExit,
}

impl Overlay {
    fn lines(&self) -> (&'static str, &'static str) {
        match self {
            Overlay::Won => ("YOU HAVE WON!", "c: keep going  q: menu"),
            Overlay::GameOver => ("GAME OVER!", "r: new game  q: menu"),
            Overlay::ConfirmExit => ("Save your game?", "y: save  n: discard  esc: stay"),
        }
    }
}

/// Everything besides the grid that the view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud<'a> {
    pub styles: &'a TileStyleTable,
    pub hint: &'a str,
    pub status: Option<&'a str>,
    pub overlay: Option<Overlay>,
    pub unsaved: bool,
}

impl<'a> Hud<'a> {
    pub fn new(styles: &'a TileStyleTable, hint: &'a str) -> Self {
        Self {
            styles,
            hint,
            status: None,
            overlay: None,
            unsaved: false,
        }
    }
}

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const BORDER: Rgb = Rgb::new(120, 110, 100);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the tile grid.
pub struct GameView {
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Minimum tile width in terminal columns.
    min_tile_w: u16,
    /// Gap between tiles (columns horizontally, rows vertically).
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            tile_h: 3,
            min_tile_w: 6,
            gap: 1,
        }
    }
}

/// Pixel geometry of one rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub tile_w: u16,
    pub tile_h: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

impl BoardLayout {
    /// Top-left terminal cell of tile (row, col).
    pub fn tile_origin(&self, row: usize, col: usize, gap: u16) -> (u16, u16) {
        let x = self.origin_x + 1 + gap + (col as u16) * (self.tile_w + gap);
        let y = self.origin_y + 1 + gap + (row as u16) * (self.tile_h + gap);
        (x, y)
    }
}

impl GameView {
    pub fn new(tile_h: u16, min_tile_w: u16) -> Self {
        Self {
            tile_h,
            min_tile_w,
            gap: 1,
        }
    }

    pub fn gap(&self) -> u16 {
        self.gap
    }

    /// Board geometry for a snapshot in a viewport.
    pub fn layout(&self, snap: &GameSnapshot, styles: &TileStyleTable, viewport: Viewport) -> BoardLayout {
        let tile_w = (styles.max_label_width() as u16 + 2).max(self.min_tile_w);
        let cols = snap.columns as u16;
        let rows = snap.rows as u16;
        let inner_w = cols * tile_w + (cols + 1) * self.gap;
        let inner_h = rows * self.tile_h + (rows + 1) * self.gap;
        let frame_w = inner_w + 2;
        let frame_h = inner_h + 2;

        // Leave room for the side panel when the terminal is wide enough.
        let total_w = frame_w + 2 + PANEL_W;
        let origin_x = if viewport.width >= total_w {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(frame_w) / 2
        };
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        BoardLayout {
            origin_x,
            origin_y,
            tile_w,
            tile_h: self.tile_h,
            frame_w,
            frame_h,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let layout = self.layout(snap, hud.styles, viewport);
        let bg = CellStyle::new(BOARD_BG, BOARD_BG);
        let border = CellStyle::new(BORDER, PANEL_BG);

        fb.fill_rect(
            layout.origin_x + 1,
            layout.origin_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            bg,
        );
        draw_border(fb, layout.origin_x, layout.origin_y, layout.frame_w, layout.frame_h, border);

        for row in 0..snap.rows {
            for col in 0..snap.columns {
                self.draw_tile(fb, &layout, hud.styles, row, col, snap.tile(row, col));
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, &layout);

        if let Some(overlay) = hud.overlay {
            draw_overlay(fb, &layout, overlay);
        }

        if let Some(status) = hud.status {
            let y = (layout.origin_y + layout.frame_h).min(viewport.height.saturating_sub(1));
            let style = CellStyle::new(Rgb::new(255, 215, 0), PANEL_BG);
            fb.put_str_centered(0, y, viewport.width, status, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        styles: &TileStyleTable,
        row: usize,
        col: usize,
        rank: u8,
    ) {
        let tile = styles.get(rank);
        let (x, y) = layout.tile_origin(row, col, self.gap);
        let style = if rank == 0 {
            CellStyle::new(BOARD_BG, EMPTY_BG)
        } else {
            CellStyle::new(tile.fg, tile.bg).bold()
        };
        fb.fill_rect(x, y, layout.tile_w, layout.tile_h, ' ', style);
        if !tile.label.is_empty() {
            fb.put_str_centered(x, y + layout.tile_h / 2, layout.tile_w, tile.label, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &Hud<'_>,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout.origin_x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let record = CellStyle::new(Rgb::new(255, 80, 80), PANEL_BG).bold();
        let dim = value.dim();

        let mut y = layout.origin_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        let end = fb.put_u64(panel_x, y, snap.score, value);
        if let Some(report) = snap.last_move {
            if report.gained > 0 {
                let x = fb.put_str(end + 1, y, "+", dim);
                fb.put_u64(x, y, report.gained, dim);
            }
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        let best_style = if snap.score > 0 && snap.score >= snap.best { record } else { value };
        fb.put_u64(panel_x, y, snap.best.max(snap.score), best_style);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, hud.hint, value);
        y = y.saturating_add(1);
        if hud.unsaved {
            fb.put_str(panel_x, y, "(unsaved)", dim);
        }
        y = y.saturating_add(2);

        for help in ["arrows/wasd  move", "S  save", "r  new game", "q  menu"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, dim);
            y = y.saturating_add(1);
        }
    }
}

/// Width reserved for the side panel.
const PANEL_W: u16 = 22;

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, layout: &BoardLayout, overlay: Overlay) {
    let (title, help) = overlay.lines();
    let box_w = (help.chars().count().max(title.chars().count()) as u16 + 4).min(layout.frame_w);
    let box_h = 4;
    let x = layout.origin_x + (layout.frame_w - box_w) / 2;
    let y = layout.origin_y + layout.frame_h.saturating_sub(box_h) / 2;

    let panel = CellStyle::new(Rgb::WHITE, Rgb::new(40, 40, 50));
    fb.fill_rect(x, y, box_w, box_h, ' ', panel);
    fb.put_str_centered(x, y + 1, box_w, title, panel.bold());
    fb.put_str_centered(x, y + 2, box_w, help, panel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::{CLASSIC_STYLES, EXTENDED_STYLES, THEMED_STYLES};

    #[test]
    fn tile_width_tracks_widest_label() {
        let view = GameView::default();
        let snap = GameSnapshot::default();
        let vp = Viewport::new(80, 24);
        assert_eq!(view.layout(&snap, &CLASSIC_STYLES, vp).tile_w, 8);
        assert_eq!(view.layout(&snap, &THEMED_STYLES, vp).tile_w, 10);
        assert_eq!(view.layout(&snap, &EXTENDED_STYLES, vp).tile_w, 8);
    }

    #[test]
    fn classic_frame_fits_default_terminal() {
        let view = GameView::default();
        let snap = GameSnapshot::default();
        let layout = view.layout(&snap, &CLASSIC_STYLES, Viewport::new(80, 24));
        // 4 tiles of 8 plus 5 gaps, plus the border
        assert_eq!(layout.frame_w, 39);
        assert_eq!(layout.frame_h, 19);
    }
}
