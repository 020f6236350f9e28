/// World tuning constants and runtime options.
///
/// The simulation runs in a fixed logical coordinate space; the display
/// layer projects it onto whatever cell grid the terminal provides, so
/// none of these values depend on terminal size.

// ── World geometry ───────────────────────────────────────────────────────────

pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 400.0;
pub const GROUND_HEIGHT: f32 = 50.0;

// ── Physics ──────────────────────────────────────────────────────────────────

/// Downward acceleration added to vertical velocity each frame.
pub const GRAVITY: f32 = 1.0;
/// Upward impulse applied on jump (negative = up).
pub const JUMP_FORCE: f32 = -15.0;
/// Baseline leftward scroll applied to all world entities, per frame.
pub const SCROLL_SPEED: f32 = 5.0;
/// Scroll factor while the speed buff is running.
pub const SPEED_MULTIPLIER: f32 = 2.0;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: f32 = 30.0;
pub const PLAYER_START_X: f32 = 100.0;

/// Frames a speed or ghost buff lasts (5 s at 60 FPS).  Re-collecting a
/// buff resets the countdown to this value; it never stacks.
pub const BUFF_FRAMES: u32 = 300;

// ── Obstacles ────────────────────────────────────────────────────────────────

pub const OBSTACLE_WIDTH: f32 = 30.0;
pub const OBSTACLE_MIN_HEIGHT: i32 = 30;
pub const OBSTACLE_MAX_HEIGHT: i32 = 100;

/// Particles emitted when an obstacle is struck.
pub const BURST_PARTICLES: usize = 10;
/// Linear alpha decay per frame; a particle is pruned at alpha ≤ 0.
pub const PARTICLE_FADE: f32 = 0.1;

// ── Coins & power-ups ────────────────────────────────────────────────────────

pub const COIN_RADIUS: f32 = 10.0;
pub const COIN_SCORE: u32 = 5;
/// Degrees of cosmetic rotation per frame.
pub const COIN_SPIN: f32 = 5.0;

pub const POWERUP_SIZE: f32 = 20.0;

/// Pickups spawn with their y this far above the ground line, so every one
/// is reachable from a single jump.
pub const PICKUP_BAND_MIN: f32 = 20.0;
pub const PICKUP_BAND_MAX: f32 = 100.0;

// ── Spawn deadlines (frames between spawns, redrawn after each spawn) ────────

pub const OBSTACLE_SPAWN_MIN: u64 = 60;
pub const OBSTACLE_SPAWN_MAX: u64 = 120;
pub const COIN_SPAWN_MIN: u64 = 60;
pub const COIN_SPAWN_MAX: u64 = 180;
pub const POWERUP_SPAWN_MIN: u64 = 300;
pub const POWERUP_SPAWN_MAX: u64 = 600;

// ── Snow ─────────────────────────────────────────────────────────────────────

pub const MAX_SNOWFLAKES: usize = 100;

// ── Runtime options ──────────────────────────────────────────────────────────

/// Options parsed from the command line.
///
/// Touch controls are an explicit opt-in rather than a guess about the host:
/// `--touch` draws the on-screen jump/restart buttons and enables mouse
/// capture so taps (clicks) on them are routed into the game.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    pub touch_controls: bool,
}

impl Options {
    /// Parse from an argument iterator (skip `argv[0]` before calling).
    /// Unknown arguments are ignored.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Options {
        let mut opts = Options::default();
        for arg in args {
            if arg == "--touch" {
                opts.touch_controls = true;
            }
        }
        opts
    }
}
