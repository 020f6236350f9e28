/// All game entity types — plain data plus their bounding boxes.

use crate::config::{
    COIN_RADIUS, GROUND_HEIGHT, OBSTACLE_WIDTH, PLAYER_SIZE, POWERUP_SIZE, SPEED_MULTIPLIER,
};

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PowerKind {
    /// Doubles the world scroll speed for BUFF_FRAMES frames.
    Speed,
    /// Obstacle-collision immunity for BUFF_FRAMES frames.
    Ghost,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in world units.  The one collision primitive every
/// entity shares.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub velocity_y: f32,
    /// Exactly one of grounded / airborne; jump is a no-op while airborne.
    pub airborne: bool,
    pub score: u32,
    /// Frames of speed buff remaining; 0 = inactive.
    pub speed_timer: u32,
    /// Frames of ghost mode remaining; 0 = inactive.
    pub ghost_timer: u32,
}

impl Player {
    pub fn ghost_active(&self) -> bool {
        self.ghost_timer > 0
    }

    /// Current scroll factor — ×2 while the speed buff runs.  Deriving the
    /// multiplier from the timer makes stacking impossible.
    pub fn speed_multiplier(&self) -> f32 {
        if self.speed_timer > 0 {
            SPEED_MULTIPLIER
        } else {
            1.0
        }
    }

    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: PLAYER_SIZE, h: PLAYER_SIZE }
    }
}

// ── Obstacles & their burst particles ────────────────────────────────────────

/// Short-lived decorative fleck emitted when an obstacle is struck.
#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Fades linearly each frame; pruned at 0.
    pub alpha: f32,
}

#[derive(Clone, Debug)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub height: f32,
    /// One-shot marker: set when the right edge clears the player's x and
    /// the pass has been scored.
    pub passed: bool,
    pub particles: Vec<Particle>,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: OBSTACLE_WIDTH, h: self.height }
    }
}

// ── Pickups ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Coin {
    /// Centre position; the collision box is the circumscribed square.
    pub x: f32,
    pub y: f32,
    /// Cosmetic spin, degrees.
    pub angle: f32,
    pub collected: bool,
}

impl Coin {
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x - COIN_RADIUS,
            y: self.y - COIN_RADIUS,
            w: COIN_RADIUS * 2.0,
            h: COIN_RADIUS * 2.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub kind: PowerKind,
    pub collected: bool,
}

impl PowerUp {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: POWERUP_SIZE, h: POWERUP_SIZE }
    }
}

// ── Snow ──────────────────────────────────────────────────────────────────────

/// Decorative only — never interacts with gameplay.  Pool members are
/// recycled to the top of the world instead of being dropped.
#[derive(Clone, Debug)]
pub struct Snowflake {
    pub x: f32,
    pub y: f32,
    pub size: u8,
    pub speed: f32,
    pub drift: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can return a
/// new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub power_ups: Vec<PowerUp>,
    /// Fixed-size decorative pool; survives restarts.
    pub snowflakes: Vec<Snowflake>,
    pub status: GameStatus,
    pub frame: u64,
    /// Frame deadlines for the three independent spawn timers; each is
    /// redrawn from its own randomized interval after every spawn.
    pub next_obstacle_frame: u64,
    pub next_coin_frame: u64,
    pub next_power_up_frame: u64,
    /// Logical world dimensions (not terminal cells).
    pub width: f32,
    pub height: f32,
}

impl GameState {
    /// Top of the ground strip — the line the player can never sink below.
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_HEIGHT
    }
}
