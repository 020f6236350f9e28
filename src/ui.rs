/// UI overlay logic — touch-button regions and world↔cell projection.
///
/// Everything here is stateless math; the rendering half of the overlay
/// (HUD text, button badges, game-over box) lives in the display layer and
/// draws from these same regions.

use crate::entities::{GameStatus, Rect};

/// Side of the square touch buttons, world units.
const BUTTON_SIZE: f32 = 80.0;
/// Inset of each button from its screen corner.
const BUTTON_MARGIN: f32 = 20.0;

/// Action produced by a tap; `None` from `touch_action` means the tap
/// landed outside every live region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchAction {
    Jump,
    Restart,
}

/// Jump button — bottom-right corner.
pub fn jump_button(world_w: f32, world_h: f32) -> Rect {
    Rect {
        x: world_w - BUTTON_SIZE - BUTTON_MARGIN,
        y: world_h - BUTTON_SIZE - BUTTON_MARGIN,
        w: BUTTON_SIZE,
        h: BUTTON_SIZE,
    }
}

/// Restart button — bottom-left corner, live only in GameOver.
pub fn restart_button(world_h: f32) -> Rect {
    Rect {
        x: BUTTON_MARGIN,
        y: world_h - BUTTON_SIZE - BUTTON_MARGIN,
        w: BUTTON_SIZE,
        h: BUTTON_SIZE,
    }
}

/// Map a tap at world coordinates to a game action.
///
/// The jump region is live only while Playing, the restart region only in
/// GameOver; everything else is ignored.
pub fn touch_action(
    x: f32,
    y: f32,
    status: &GameStatus,
    world_w: f32,
    world_h: f32,
) -> Option<TouchAction> {
    match status {
        GameStatus::Playing if jump_button(world_w, world_h).contains(x, y) => {
            Some(TouchAction::Jump)
        }
        GameStatus::GameOver if restart_button(world_h).contains(x, y) => {
            Some(TouchAction::Restart)
        }
        _ => None,
    }
}

// ── Projection ───────────────────────────────────────────────────────────────

/// Maps the fixed logical world onto the terminal's cell grid.
///
/// The renderer uses `to_cell` for drawing; the orchestrator uses
/// `to_world` to translate mouse clicks back into world space before
/// calling `touch_action`.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub world_w: f32,
    pub world_h: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, world_w: f32, world_h: f32) -> Viewport {
        Viewport {
            cols: cols.max(1),
            rows: rows.max(1),
            world_w,
            world_h,
        }
    }

    /// World position → terminal cell, clamped to the grid.
    pub fn to_cell(&self, x: f32, y: f32) -> (u16, u16) {
        let col = (x / self.world_w * self.cols as f32) as i32;
        let row = (y / self.world_h * self.rows as f32) as i32;
        (
            col.clamp(0, self.cols as i32 - 1) as u16,
            row.clamp(0, self.rows as i32 - 1) as u16,
        )
    }

    /// Terminal cell → the world position at that cell's centre.
    pub fn to_world(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (col as f32 + 0.5) / self.cols as f32 * self.world_w,
            (row as f32 + 0.5) / self.rows as f32 * self.world_h,
        )
    }

    /// Horizontal cell span covered by a world-space box, inclusive.
    pub fn col_span(&self, x0: f32, x1: f32) -> (u16, u16) {
        let (a, _) = self.to_cell(x0, 0.0);
        let (b, _) = self.to_cell(x1, 0.0);
        (a, b.max(a))
    }

    /// Vertical cell span covered by a world-space box, inclusive.
    pub fn row_span(&self, y0: f32, y1: f32) -> (u16, u16) {
        let (_, a) = self.to_cell(0.0, y0);
        let (_, b) = self.to_cell(0.0, y1);
        (a, b.max(a))
    }
}
