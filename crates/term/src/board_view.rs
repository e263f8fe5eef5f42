//! BoardView: paints a [`BoardSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::BoardSnapshot;
use crate::fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
use crate::types::{GameStatus, Shape, BOARD_HEIGHT, BOARD_WIDTH};

/// Well background.
const WELL_BG: Rgb = Rgb::new(0, 0, 0);

/// Block colors indexed by [`Shape::color_index`].
const PALETTE: [Rgb; 8] = [
    Rgb::new(0, 0, 0),
    Rgb::new(204, 102, 102),
    Rgb::new(102, 204, 102),
    Rgb::new(102, 102, 204),
    Rgb::new(204, 204, 102),
    Rgb::new(204, 102, 204),
    Rgb::new(102, 204, 204),
    Rgb::new(218, 170, 0),
];

pub fn shape_color(shape: Shape) -> Rgb {
    PALETTE[shape.color_index() as usize]
}

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

pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // Two columns per cell makes blocks roughly square in most fonts.
        Self { cell_w: 2 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Width and height of the bordered well in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        status_text: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size();
        let left = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, left, top, frame_w, frame_h);

        // Screen row 0 of the well is board row 21.
        for row in 0..BOARD_HEIGHT as i8 {
            let y = BOARD_HEIGHT as i8 - 1 - row;
            for x in 0..BOARD_WIDTH as i8 {
                let shape = snap.visible_at(x, y);
                let px = left + 1 + x as u16 * self.cell_w;
                let py = top + 1 + row as u16;
                if shape.is_empty() {
                    let dot = GlyphStyle::new(Rgb::new(70, 70, 80), WELL_BG);
                    fb.fill_rect(px, py, self.cell_w, 1, ' ', dot);
                    fb.put(px, py, '·', dot);
                } else {
                    let style = GlyphStyle::new(shape_color(shape), WELL_BG).bold();
                    fb.fill_rect(px, py, self.cell_w, 1, '█', style);
                }
            }
        }

        self.draw_side_panel(fb, snap, status_text, viewport, left + frame_w + 2, top);

        let overlay = match snap.status {
            GameStatus::Paused => Some("PAUSED"),
            GameStatus::GameOver => Some("GAME OVER"),
            GameStatus::Idle => Some("PRESS R"),
            GameStatus::Running => None,
        };
        if let Some(text) = overlay {
            let text_w = text.chars().count() as u16;
            let x = left + frame_w.saturating_sub(text_w) / 2;
            let style = GlyphStyle::new(Rgb::new(255, 255, 255), WELL_BG).bold();
            fb.put_str(x, top + frame_h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, status_text: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status_text, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = GlyphStyle::new(Rgb::new(200, 200, 200), WELL_BG);
        let (right, bottom) = (x + w - 1, y + h - 1);

        fb.put(x, y, '┌', style);
        fb.put(right, y, '┐', style);
        fb.put(x, bottom, '└', style);
        fb.put(right, bottom, '┘', style);
        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(right, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        status_text: &str,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = GlyphStyle::default().bold();
        let value = GlyphStyle::new(Rgb::new(200, 200, 200), WELL_BG);

        fb.put_str(panel_x, top, "LINES", label);
        fb.put_u32(panel_x, top + 1, snap.lines_cleared, value);

        fb.put_str(panel_x, top + 3, "STATUS", label);
        fb.put_str(panel_x, top + 4, status_text.trim(), value);

        let help = [
            "←/→  move",
            "↑/↓  rotate",
            "spc  drop",
            "d    down",
            "p    pause",
            "r    restart",
            "q    quit",
        ];
        for (i, line) in help.iter().enumerate() {
            fb.put_str(panel_x, top + 6 + i as u16, line, value);
        }
    }
}
