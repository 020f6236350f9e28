/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands, projecting the fixed logical world onto
/// the terminal's cell grid through a `Viewport`.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use cube_dash::config::{OBSTACLE_WIDTH, PLAYER_SIZE};
use cube_dash::entities::{Coin, GameState, GameStatus, Obstacle, PowerKind, PowerUp};
use cube_dash::ui::{jump_button, restart_button, Viewport};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_SPEED: Color = Color::Green;
const C_HUD_GHOST: Color = Color::Magenta;
const C_SNOW: Color = Color::White;
const C_GROUND: Color = Color::Rgb { r: 100, g: 70, b: 20 };
const C_GROUND_TICK: Color = Color::Rgb { r: 120, g: 90, b: 40 };
const C_PLAYER: Color = Color::Blue;
const C_COIN: Color = Color::Yellow;
const C_PARTICLE: Color = Color::Red;
const C_BUTTON: Color = Color::Grey;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    vp: &Viewport,
    touch_controls: bool,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_snow(out, state, vp)?;
    draw_ground(out, state, vp)?;

    for obstacle in &state.obstacles {
        draw_obstacle(out, obstacle, vp)?;
    }
    for coin in &state.coins {
        draw_coin(out, coin, vp)?;
    }
    for power_up in &state.power_ups {
        draw_power_up(out, power_up, state.frame, vp)?;
    }

    draw_player(out, state, vp)?;
    draw_hud(out, state)?;

    if touch_controls {
        draw_touch_controls(out, state, vp)?;
    }
    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, vp)?;
    }
    draw_controls_hint(out, vp)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Snow (behind everything) ──────────────────────────────────────────────────

fn draw_snow<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_SNOW))?;
    for flake in &state.snowflakes {
        // Flakes recycle from above the world; don't draw until they enter it.
        if flake.y < 0.0 {
            continue;
        }
        let (col, row) = vp.to_cell(flake.x, flake.y);
        let glyph = match flake.size {
            1 => "·",
            2 => "•",
            _ => "❄",
        };
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Ground strip ──────────────────────────────────────────────────────────────

fn draw_ground<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    let (top, bottom) = vp.row_span(state.ground_y(), state.height - 1.0);
    for row in top..=bottom {
        for col in 0..vp.cols {
            let (wx, _) = vp.to_world(col, row);
            // Lighter tick columns every 30 world units, like mile markers.
            let tick = wx.rem_euclid(30.0) < 6.0;
            out.queue(style::SetForegroundColor(if tick { C_GROUND_TICK } else { C_GROUND }))?;
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("█"))?;
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_obstacle<W: Write>(
    out: &mut W,
    obstacle: &Obstacle,
    vp: &Viewport,
) -> std::io::Result<()> {
    let (c0, c1) = vp.col_span(obstacle.x, obstacle.x + OBSTACLE_WIDTH - 1.0);
    let (r0, r1) = vp.row_span(obstacle.y, obstacle.y + obstacle.height - 1.0);

    for row in r0..=r1 {
        // Red fades with depth below the obstacle's top edge.
        let (_, wy) = vp.to_world(0, row);
        let depth = (wy - obstacle.y).max(0.0) as i32;
        let val = (255 - depth).max(100) as u8;
        out.queue(style::SetForegroundColor(Color::Rgb { r: val, g: 0, b: 0 }))?;
        for col in c0..=c1 {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("█"))?;
        }
    }

    out.queue(style::SetForegroundColor(C_PARTICLE))?;
    for p in &obstacle.particles {
        let (col, row) = vp.to_cell(p.x, p.y);
        let glyph = if p.alpha > 0.66 {
            "●"
        } else if p.alpha > 0.33 {
            "•"
        } else {
            "·"
        };
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_coin<W: Write>(out: &mut W, coin: &Coin, vp: &Viewport) -> std::io::Result<()> {
    let (col, row) = vp.to_cell(coin.x, coin.y);
    // Quarter-turn glyphs give the spin without sub-cell drawing.
    let glyph = match (coin.angle as u32 / 90) % 4 {
        0 => "◐",
        1 => "◓",
        2 => "◑",
        _ => "◒",
    };
    out.queue(style::SetForegroundColor(C_COIN))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_power_up<W: Write>(
    out: &mut W,
    power_up: &PowerUp,
    frame: u64,
    vp: &Viewport,
) -> std::io::Result<()> {
    let (col, row) = vp.to_cell(power_up.x, power_up.y);
    // Two-phase pulse stands in for the original's glow.
    let bright = (frame / 10) % 2 == 0;
    let (color, label) = match power_up.kind {
        PowerKind::Speed => (if bright { Color::Green } else { Color::DarkGreen }, "[x2]"),
        PowerKind::Ghost => (if bright { Color::Magenta } else { Color::DarkMagenta }, "[G]"),
    };
    out.queue(style::SetForegroundColor(color))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(label))?;
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    let p = &state.player;
    let (c0, c1) = vp.col_span(p.x, p.x + PLAYER_SIZE - 1.0);
    let (r0, r1) = vp.row_span(p.y, p.y + PLAYER_SIZE - 1.0);

    let color = if p.ghost_active() {
        // Pulsating ghost tint
        if (state.frame / 5) % 2 == 0 {
            Color::Magenta
        } else {
            Color::DarkMagenta
        }
    } else {
        C_PLAYER
    };

    out.queue(style::SetForegroundColor(color))?;
    for row in r0..=r1 {
        for col in c0..=c1 {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("█"))?;
        }
    }

    // Eye near the top-right of the square, when there's room for one.
    if c1 > c0 && r1 > r0 {
        let eye_col = c0 + ((c1 - c0) as f32 * 0.7) as u16;
        out.queue(cursor::MoveTo(eye_col, r0))?;
        out.queue(style::SetForegroundColor(Color::White))?;
        out.queue(Print("◦"))?;
    }
    Ok(())
}

// ── HUD (top-left stack) ──────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", state.player.score)))?;

    if state.player.speed_timer > 0 {
        out.queue(cursor::MoveTo(1, 1))?;
        out.queue(style::SetForegroundColor(C_HUD_SPEED))?;
        out.queue(Print("Speed: x2"))?;
    }
    if state.player.ghost_active() {
        out.queue(cursor::MoveTo(1, 2))?;
        out.queue(style::SetForegroundColor(C_HUD_GHOST))?;
        out.queue(Print("Ghost Mode!"))?;
    }
    Ok(())
}

// ── Touch-control badges ──────────────────────────────────────────────────────

fn draw_touch_controls<W: Write>(
    out: &mut W,
    state: &GameState,
    vp: &Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BUTTON))?;

    let jump = jump_button(state.width, state.height);
    let label = "( JUMP )";
    let (col, row) = vp.to_cell(jump.x + jump.w / 2.0, jump.y + jump.h / 2.0);
    out.queue(cursor::MoveTo(col.saturating_sub(label.chars().count() as u16 / 2), row))?;
    out.queue(Print(label))?;

    if state.status == GameStatus::GameOver {
        let restart = restart_button(state.height);
        let label = "( R )";
        let (col, row) = vp.to_cell(restart.x + restart.w / 2.0, restart.y + restart.h / 2.0);
        out.queue(cursor::MoveTo(col.saturating_sub(label.chars().count() as u16 / 2), row))?;
        out.queue(Print(label))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, vp.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE / ↑ : Jump   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.player.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        ("R - Restart  Q - Quit", Color::White),
    ];

    let cx = vp.cols / 2;
    let start_row = (vp.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
