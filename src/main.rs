mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use cube_dash::compute::{init_state, jump, restart, tick};
use cube_dash::config::{Options, WORLD_HEIGHT, WORLD_WIDTH};
use cube_dash::ui::{self, TouchAction, Viewport};

const FRAME: Duration = Duration::from_micros(16_667); // ≈60 FPS

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  One pass per frame: drain pending input,
/// advance the simulation a single step, render, sleep off the remainder.
///
/// Jump and restart are routed through `compute`, which ignores them in the
/// wrong state (jump while airborne or after game over, restart mid-run),
/// so the loop never has to inspect the state machine itself.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    opts: &Options,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut state = init_state(WORLD_WIDTH, WORLD_HEIGHT, &mut rng);

    loop {
        let frame_start = Instant::now();

        // Re-query the grid every frame so resizes just work.
        let (cols, rows) = terminal::size()?;
        let vp = Viewport::new(cols, rows, state.width, state.height);

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) => {
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char(' ') | KeyCode::Up => {
                            state = jump(&state);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            state = restart(&state);
                        }
                        _ => {}
                    }
                }
                // Taps arrive only when --touch enabled mouse capture.
                Event::Mouse(mouse) if opts.touch_controls => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        let (wx, wy) = vp.to_world(mouse.column, mouse.row);
                        match ui::touch_action(wx, wy, &state.status, state.width, state.height) {
                            Some(TouchAction::Jump) => state = jump(&state),
                            Some(TouchAction::Restart) => state = restart(&state),
                            None => {}
                        }
                    }
                }
                _ => {}
            }
        }

        state = tick(&state, &mut rng);
        display::render(out, &state, &vp, opts.touch_controls)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let opts = Options::from_args(std::env::args().skip(1));

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    if opts.touch_controls {
        out.execute(EnableMouseCapture)?;
    }

    // Blocking event reads live on their own thread, feeding a channel, so
    // the game loop never stalls on input I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = game_loop(&mut out, &rx, &opts);

    // Always restore the terminal
    if opts.touch_controls {
        let _ = out.execute(DisableMouseCapture);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
