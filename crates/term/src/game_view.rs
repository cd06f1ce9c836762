//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_cells, GameSnapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const TITLE: &str = "T E T R I S";

const CONTROLS: [&str; 7] = [
    "←/→  move",
    "↓    soft drop",
    "↑/Z  rotate",
    "SPC  hard drop",
    "P    pause",
    "R    restart",
    "Q    quit",
];

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the playfield frame landed for the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Draws the board, the falling piece, the side panel and overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    show_controls: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
            show_controls: true,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Reusing one framebuffer across frames keeps this allocation-free once
    /// the terminal size is stable.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::new(' ', Style::new(SCREEN_BG, SCREEN_BG)));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let w = board_px_w + 2;
        let h = board_px_h + 2;

        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 1,
        };
        let frame = Frame { x, y, w, h };

        let title_x = x.saturating_add(w.saturating_sub(TITLE.chars().count() as u16) / 2);
        if y > 0 {
            fb.put_str(title_x, y - 1, TITLE, Style::default().bold());
        }

        fb.fill_rect(x + 1, y + 1, board_px_w, board_px_h, ' ', Style::new(PLAYFIELD_BG, PLAYFIELD_BG));
        self.draw_border(fb, frame, Style::new(Rgb::new(200, 200, 200), SCREEN_BG));

        for (row, line) in snap.board.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                match PieceKind::from_color(value) {
                    Some(kind) => self.draw_block(fb, frame, col as u16, row as u16, kind),
                    None => self.draw_empty(fb, frame, col as u16, row as u16),
                }
            }
        }

        if let Some(active) = snap.active {
            for (dx, dy) in get_cells(active.kind, active.rotation) {
                let bx = active.x + dx;
                let by = active.y + dy;
                if (0..i32::from(BOARD_WIDTH)).contains(&bx) && (0..i32::from(BOARD_HEIGHT)).contains(&by) {
                    self.draw_block(fb, frame, bx as u16, by as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if !snap.running {
            self.draw_game_over(fb, frame, snap.score);
        } else if snap.paused {
            self.draw_overlay(fb, frame, &["P A U S E D"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame, style: Style) {
        if f.w < 2 || f.h < 2 {
            return;
        }
        let right = f.x + f.w - 1;
        let bottom = f.y + f.h - 1;

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for dx in 1..f.w - 1 {
            fb.put_char(f.x + dx, f.y, '─', style);
            fb.put_char(f.x + dx, bottom, '─', style);
        }
        for dy in 1..f.h - 1 {
            fb.put_char(f.x, f.y + dy, '│', style);
            fb.put_char(right, f.y + dy, '│', style);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, f: Frame, col: u16, row: u16) {
        let style = Style::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        self.fill_cell(fb, f, col, row, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, f: Frame, col: u16, row: u16, kind: PieceKind) {
        let style = Style::new(piece_rgb(kind), PLAYFIELD_BG).bold();
        self.fill_cell(fb, f, col, row, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, col: u16, row: u16, ch: char, style: Style) {
        let px = f.x + 1 + col * self.cell_w;
        let py = f.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = f.y;
        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let preview = Style::new(piece_rgb(snap.next), SCREEN_BG).bold();
        for (dx, dy) in get_cells(snap.next, Rotation::North) {
            let px = panel_x + (dx as u16) * 2;
            let py = y + dy as u16;
            fb.put_str(px, py, "██", preview);
        }
        y = y.saturating_add(4);

        if !self.show_controls {
            return;
        }
        y = y.saturating_add(1);
        let dim = value.dim();
        fb.put_str(panel_x, y, "CONTROLS", label);
        for line in CONTROLS {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, f: Frame, score: u32) {
        self.draw_overlay(fb, f, &["G A M E  O V E R", "", "", "R restart  Q quit"]);

        let style = Style::default().bold();
        let label = "SCORE ";
        let digits = count_digits(score);
        let text_w = label.len() as u16 + digits;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        // Second blank line of the overlay band.
        let y = f.y.saturating_add(f.h / 2);
        fb.put_str(x, y, label, style);
        fb.put_u32(x + label.len() as u16, y, score, style);
    }

    /// Centered block of lines on a blank band across the playfield.
    fn draw_overlay(&self, fb: &mut FrameBuffer, f: Frame, lines: &[&str]) {
        let style = Style::default().bold();
        let n = lines.len() as u16;
        let top = f.y.saturating_add(f.h / 2).saturating_sub(n / 2 + 1);
        let inner_w = f.w.saturating_sub(2);

        fb.fill_rect(f.x + 1, top, inner_w, n + 2, ' ', style);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
            fb.put_str(x, top + 1 + i as u16, text, style);
        }
    }
}

/// Display color per piece: I cyan, O yellow, T magenta, S green, Z red, J blue, L white.
pub fn piece_rgb(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 100, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(235, 235, 235),
    }
}

fn count_digits(mut n: u32) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActiveSnapshot;

    fn viewport() -> Viewport {
        Viewport::new(60, 26)
    }

    #[test]
    fn test_count_digits() {
        assert_eq!(count_digits(0), 1);
        assert_eq!(count_digits(9), 1);
        assert_eq!(count_digits(10), 2);
        assert_eq!(count_digits(u32::MAX), 10);
    }

    #[test]
    fn test_locked_cells_use_piece_color() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = PieceKind::Z.color();

        let view = GameView::default();
        let fb = view.render(&snap, viewport());

        // Frame is 22 wide and 22 tall, centered in 60x26.
        let glyph = fb.get(19 + 1, 2 + 1 + 19);
        assert_eq!(glyph.map(|g| g.ch), Some('█'));
        assert_eq!(glyph.map(|g| g.style.fg), Some(piece_rgb(PieceKind::Z)));
    }

    #[test]
    fn test_active_piece_is_drawn() {
        let snap = GameSnapshot {
            active: Some(ActiveSnapshot {
                kind: PieceKind::O,
                rotation: Rotation::North,
                x: 3,
                y: 0,
            }),
            ..GameSnapshot::default()
        };

        let fb = GameView::default().render(&snap, viewport());
        // O occupies board column 4, row 0.
        let glyph = fb.get(19 + 1 + 4 * 2, 2 + 1);
        assert_eq!(glyph.map(|g| g.style.fg), Some(piece_rgb(PieceKind::O)));
    }

    #[test]
    fn test_game_over_shows_final_score() {
        let snap = GameSnapshot {
            running: false,
            score: 1600,
            ..GameSnapshot::default()
        };
        let fb = GameView::default().render(&snap, viewport());
        assert!(fb.contains_text("G A M E  O V E R"));
        assert!(fb.contains_text("SCORE 1600"));
        assert!(!fb.contains_text("P A U S E D"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
    }
}
