//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). World `y` grows upward, so row 0 of the
//! world is the bottom row of the playfield on screen.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, GridPosition, WORLD_HEIGHT, WORLD_WIDTH};

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

const FIELD_BG: Rgb = Rgb::new(20, 40, 20);
const GRID: CellStyle = CellStyle::new(Rgb::new(60, 110, 60), FIELD_BG);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const BODY: CellStyle = CellStyle::new(Rgb::new(90, 200, 90), FIELD_BG);
const HEAD: CellStyle = CellStyle::new(Rgb::new(230, 250, 120), FIELD_BG).bold();
const APPLE: CellStyle = CellStyle::new(Rgb::new(230, 50, 50), FIELD_BG).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// World cell width in terminal columns.
    cell_w: u16,
    /// World cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered playfield.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            WORLD_WIDTH * self.cell_w + 2,
            WORLD_HEIGHT * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Reusing one framebuffer across frames keeps this allocation-free.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for y in 0..WORLD_HEIGHT {
            for x in 0..WORLD_WIDTH {
                self.fill_cell(fb, origin_x, origin_y, GridPosition::new(x, y), '·', GRID);
            }
        }

        if let Some(apple) = snap.apple {
            self.fill_cell(fb, origin_x, origin_y, apple, '●', APPLE);
        }

        // Tail first so segments closer to the head win on shared cells.
        for &seg in snap.segments.iter().rev() {
            self.fill_cell(fb, origin_x, origin_y, seg, '█', BODY);
        }

        self.fill_cell(
            fb,
            origin_x,
            origin_y,
            snap.head,
            head_glyph(snap.direction),
            HEAD,
        );

        self.draw_side_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);

        if snap.game_over() {
            self.draw_game_over(fb, snap, origin_x, origin_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of a world cell.
    pub fn cell_origin(&self, origin_x: u16, origin_y: u16, pos: GridPosition) -> (u16, u16) {
        let row = WORLD_HEIGHT.saturating_sub(1).saturating_sub(pos.y);
        (
            origin_x + 1 + pos.x * self.cell_w,
            origin_y + 1 + row * self.cell_h,
        )
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        pos: GridPosition,
        ch: char,
        style: CellStyle,
    ) {
        if !pos.in_bounds(WORLD_WIDTH, WORLD_HEIGHT) {
            return;
        }
        let (px, py) = self.cell_origin(origin_x, origin_y, pos);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(right, y, '┐', BORDER);
        fb.put_char(x, bottom, '└', BORDER);
        fb.put_char(right, bottom, '┘', BORDER);
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', BORDER);
            fb.put_char(cx, bottom, '─', BORDER);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', BORDER);
            fb.put_char(right, cy, '│', BORDER);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let mut y = top;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        fb.put_u32(panel_x, y + 1, snap.score, VALUE);
        y += 3;

        fb.put_str(panel_x, y, "LENGTH", LABEL);
        fb.put_u32(panel_x, y + 1, snap.snake_len() as u32, VALUE);
        y += 3;

        fb.put_str(panel_x, y, "MOVE", LABEL);
        fb.put_str(panel_x, y + 1, "arrows/wasd", VALUE);
        fb.put_str(panel_x, y + 2, "tab: turn cw", VALUE);
        fb.put_str(panel_x, y + 3, "q: quit", VALUE);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        origin_x: u16,
        origin_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        const TITLE: &str = "GAME OVER!";
        const SCORE_LABEL: &str = "YOUR FINAL SCORE: ";
        const HINT: &str = "SPACE TO TRY AGAIN";

        let mid_y = origin_y + frame_h / 2;
        let centered = |len: usize| origin_x + frame_w.saturating_sub(len as u16) / 2;

        fb.put_str(centered(TITLE.len()), mid_y.saturating_sub(1), TITLE, OVERLAY);

        let score_len = SCORE_LABEL.len() + decimal_len(snap.score);
        let end = fb.put_str(centered(score_len), mid_y, SCORE_LABEL, OVERLAY);
        fb.put_u32(end, mid_y, snap.score, OVERLAY);

        fb.put_str(centered(HINT.len()), mid_y + 1, HINT, OVERLAY);
    }
}

fn head_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '▲',
        Direction::Down => '▼',
        Direction::Left => '◀',
        Direction::Right => '▶',
    }
}

fn decimal_len(mut n: u32) -> usize {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}
