//! Start menu: pick a variant or load the default save.

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::types::{VariantKind, VARIANT_COUNT};

/// What the start menu shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuModel<'a> {
    /// Best score per variant, indexed by [`VariantKind::index`]
    pub best: [u64; VARIANT_COUNT],
    /// Whether a default save file exists
    pub can_load: bool,
    pub status: Option<&'a str>,
}

#[derive(Debug, Default)]
pub struct MenuView;

const TITLE: &str = "2048";
const MENU_W: u16 = 34;
const KEYS: [&str; VARIANT_COUNT] = ["1", "2", "3"];

impl MenuView {
    pub fn render_into(&self, model: &MenuModel<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let heading = CellStyle::new(Rgb::hex(0xEDC22E), Rgb::BLACK).bold();
        let item = CellStyle::default();
        let key = CellStyle::new(Rgb::hex(0xF67C5F), Rgb::BLACK).bold();
        let dim = item.dim();

        let rows = 3 + VARIANT_COUNT as u16 + 4;
        let x = viewport.width.saturating_sub(MENU_W) / 2;
        let mut y = viewport.height.saturating_sub(rows) / 2;

        fb.put_str_centered(x, y, MENU_W, TITLE, heading);
        y += 2;

        for (n, kind) in VariantKind::ALL.iter().enumerate() {
            let cx = fb.put_str(x, y, KEYS[n], key);
            let cx = fb.put_str(cx + 2, y, kind.title(), item);
            let best = model.best[kind.index()];
            if best > 0 {
                let cx = fb.put_str(cx.max(x + 16), y, "best ", dim);
                fb.put_u64(cx, y, best, dim);
            }
            y += 1;
        }
        y += 1;

        let load_style = if model.can_load { item } else { dim };
        let cx = fb.put_str(x, y, "L", key);
        fb.put_str(cx + 2, y, "Load saved game", load_style);
        y += 1;
        let cx = fb.put_str(x, y, "q", key);
        fb.put_str(cx + 2, y, "Quit", item);
        y += 2;

        if let Some(status) = model.status {
            let style = CellStyle::new(Rgb::new(255, 215, 0), Rgb::BLACK);
            fb.put_str_centered(0, y, viewport.width, status, style);
        }
    }

    pub fn render(&self, model: &MenuModel<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(model, viewport, &mut fb);
        fb
    }
}
