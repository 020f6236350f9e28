/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::config::{
    BUFF_FRAMES, BURST_PARTICLES, COIN_RADIUS, COIN_SCORE, COIN_SPAWN_MAX, COIN_SPAWN_MIN,
    COIN_SPIN, GRAVITY, GROUND_HEIGHT, JUMP_FORCE, MAX_SNOWFLAKES, OBSTACLE_MAX_HEIGHT,
    OBSTACLE_MIN_HEIGHT, OBSTACLE_SPAWN_MAX, OBSTACLE_SPAWN_MIN, OBSTACLE_WIDTH, PARTICLE_FADE,
    PICKUP_BAND_MAX, PICKUP_BAND_MIN, PLAYER_SIZE, PLAYER_START_X, POWERUP_SIZE,
    POWERUP_SPAWN_MAX, POWERUP_SPAWN_MIN, SCROLL_SPEED,
};
use crate::entities::{
    Coin, GameState, GameStatus, Obstacle, Particle, Player, PowerKind, PowerUp, Snowflake,
};

// ── Constructors ─────────────────────────────────────────────────────────────

fn new_player(ground_y: f32) -> Player {
    Player {
        x: PLAYER_START_X,
        y: ground_y - PLAYER_SIZE,
        velocity_y: 0.0,
        airborne: false,
        score: 0,
        speed_timer: 0,
        ghost_timer: 0,
    }
}

fn new_snowflake(width: f32, rng: &mut impl Rng) -> Snowflake {
    Snowflake {
        x: rng.gen_range(0..width as i32) as f32,
        y: rng.gen_range(-50..=0) as f32,
        size: rng.gen_range(1..=4),
        speed: rng.gen_range(1.0..3.0),
        drift: rng.gen_range(-0.5..0.5),
    }
}

/// Build the initial game state for a given logical world size.
///
/// All three spawn deadlines start at 0, so the first tick spawns one
/// obstacle, one coin, and one power-up at the right edge.
pub fn init_state(width: f32, height: f32, rng: &mut impl Rng) -> GameState {
    let ground_y = height - GROUND_HEIGHT;
    GameState {
        player: new_player(ground_y),
        obstacles: Vec::new(),
        coins: Vec::new(),
        power_ups: Vec::new(),
        snowflakes: (0..MAX_SNOWFLAKES).map(|_| new_snowflake(width, rng)).collect(),
        status: GameStatus::Playing,
        frame: 0,
        next_obstacle_frame: 0,
        next_coin_frame: 0,
        next_power_up_frame: 0,
        width,
        height,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Launch the player upward.  No-op while airborne (no double jump) and
/// outside the Playing state.
pub fn jump(state: &GameState) -> GameState {
    if state.status != GameStatus::Playing || state.player.airborne {
        return state.clone();
    }
    GameState {
        player: Player {
            velocity_y: JUMP_FORCE,
            airborne: true,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Discard the run and start fresh.  Only honored in GameOver.
///
/// Everything mutable is replaced — player, entity collections, spawn
/// deadlines, frame counter — except the decorative snow pool, which keeps
/// falling across the boundary.
pub fn restart(state: &GameState) -> GameState {
    if state.status != GameStatus::GameOver {
        return state.clone();
    }
    GameState {
        player: new_player(state.ground_y()),
        obstacles: Vec::new(),
        coins: Vec::new(),
        power_ups: Vec::new(),
        status: GameStatus::Playing,
        frame: 0,
        next_obstacle_frame: 0,
        next_coin_frame: 0,
        next_power_up_frame: 0,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one 60 Hz step.  All randomness comes through
/// `rng` so callers control determinism (tests use a seeded RNG).
///
/// Snow and the frame counter advance in every state; gameplay (physics,
/// spawning, scrolling, collisions) is frozen once the status is GameOver.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    let frame = state.frame + 1;

    // ── 1. Snow falls regardless of game state ───────────────────────────────
    let mut snowflakes = state.snowflakes.clone();
    for flake in snowflakes.iter_mut() {
        drift_snowflake(flake, state.width, state.height, rng);
    }

    if state.status == GameStatus::GameOver {
        return GameState { frame, snowflakes, ..state.clone() };
    }

    // ── 2. Player physics & buff countdowns ──────────────────────────────────
    let mut player = state.player.clone();
    player.velocity_y += GRAVITY;
    player.y += player.velocity_y;

    let ground_top = state.ground_y() - PLAYER_SIZE;
    if player.y >= ground_top {
        player.y = ground_top;
        player.velocity_y = 0.0;
        player.airborne = false;
    }

    // Both timers run down every frame, grounded or not.
    player.speed_timer = player.speed_timer.saturating_sub(1);
    player.ghost_timer = player.ghost_timer.saturating_sub(1);

    let speed = SCROLL_SPEED * player.speed_multiplier();

    // ── 3. Spawn timers — each redraws its own next deadline ─────────────────
    let mut obstacles = state.obstacles.clone();
    let mut next_obstacle_frame = state.next_obstacle_frame;
    if frame >= next_obstacle_frame {
        let height = rng.gen_range(OBSTACLE_MIN_HEIGHT..=OBSTACLE_MAX_HEIGHT) as f32;
        obstacles.push(Obstacle {
            x: state.width,
            y: state.ground_y() - height,
            height,
            passed: false,
            particles: Vec::new(),
        });
        next_obstacle_frame = frame + rng.gen_range(OBSTACLE_SPAWN_MIN..=OBSTACLE_SPAWN_MAX);
    }

    let mut coins = state.coins.clone();
    let mut next_coin_frame = state.next_coin_frame;
    if frame >= next_coin_frame {
        coins.push(Coin {
            x: state.width,
            y: pickup_y(state.ground_y(), rng),
            angle: 0.0,
            collected: false,
        });
        next_coin_frame = frame + rng.gen_range(COIN_SPAWN_MIN..=COIN_SPAWN_MAX);
    }

    let mut power_ups = state.power_ups.clone();
    let mut next_power_up_frame = state.next_power_up_frame;
    if frame >= next_power_up_frame {
        let kind = if rng.gen_bool(0.5) { PowerKind::Speed } else { PowerKind::Ghost };
        power_ups.push(PowerUp {
            x: state.width,
            y: pickup_y(state.ground_y(), rng),
            kind,
            collected: false,
        });
        next_power_up_frame = frame + rng.gen_range(POWERUP_SPAWN_MIN..=POWERUP_SPAWN_MAX);
    }

    // ── 4. Obstacles: scroll, particles, collision, pass scoring ─────────────
    let mut status = GameStatus::Playing;
    let player_rect = player.rect();

    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;

        for p in obstacle.particles.iter_mut() {
            p.x += p.vx;
            p.y += p.vy;
            p.alpha -= PARTICLE_FADE;
        }
        obstacle.particles.retain(|p| p.alpha > 0.0);

        // Ghost mode suppresses the obstacle check entirely.
        if !player.ghost_active() && obstacle.rect().intersects(&player_rect) {
            status = GameStatus::GameOver;
            burst(obstacle, rng);
        }

        // Score exactly once, the first time the right edge clears the player.
        if !obstacle.passed && obstacle.x + OBSTACLE_WIDTH < player.x {
            obstacle.passed = true;
            player.score += 1;
        }
    }
    obstacles.retain(|o| o.x + OBSTACLE_WIDTH > 0.0);

    // ── 5. Coins: scroll, spin, collect (+removal same frame) ────────────────
    for coin in coins.iter_mut() {
        coin.x -= speed;
        coin.angle = (coin.angle + COIN_SPIN) % 360.0;
        if !coin.collected && coin.rect().intersects(&player_rect) {
            coin.collected = true;
            player.score += COIN_SCORE;
        }
    }
    coins.retain(|c| !c.collected && c.x + COIN_RADIUS > 0.0);

    // ── 6. Power-ups: scroll, collect — re-collecting resets, never stacks ───
    for power_up in power_ups.iter_mut() {
        power_up.x -= speed;
        if !power_up.collected && power_up.rect().intersects(&player_rect) {
            power_up.collected = true;
            match power_up.kind {
                PowerKind::Speed => player.speed_timer = BUFF_FRAMES,
                PowerKind::Ghost => player.ghost_timer = BUFF_FRAMES,
            }
        }
    }
    power_ups.retain(|p| !p.collected && p.x + POWERUP_SIZE > 0.0);

    GameState {
        player,
        obstacles,
        coins,
        power_ups,
        snowflakes,
        status,
        frame,
        next_obstacle_frame,
        next_coin_frame,
        next_power_up_frame,
        ..state.clone()
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Random spawn height within the reachable band above the ground line.
fn pickup_y(ground_y: f32, rng: &mut impl Rng) -> f32 {
    let lo = (ground_y - PICKUP_BAND_MAX) as i32;
    let hi = (ground_y - PICKUP_BAND_MIN) as i32;
    rng.gen_range(lo..=hi) as f32
}

/// One-shot decorative burst when an obstacle is struck.
fn burst(obstacle: &mut Obstacle, rng: &mut impl Rng) {
    for _ in 0..BURST_PARTICLES {
        obstacle.particles.push(Particle {
            x: obstacle.x + rng.gen_range(0.0..OBSTACLE_WIDTH),
            y: obstacle.y + rng.gen_range(0.0..obstacle.height),
            vx: rng.gen_range(-1.0..1.0),
            vy: rng.gen_range(-2.0..0.0),
            alpha: rng.gen_range(0.5..1.0),
        });
    }
}

/// Fall, drift, and recycle to the top once the flake leaves the world.
fn drift_snowflake(flake: &mut Snowflake, width: f32, height: f32, rng: &mut impl Rng) {
    flake.y += flake.speed;
    flake.x += flake.drift;

    if flake.y > height || flake.x < 0.0 || flake.x > width {
        flake.x = rng.gen_range(0..width as i32) as f32;
        flake.y = rng.gen_range(-50..=-10) as f32;
        flake.drift = rng.gen_range(-0.5..0.5);
    }
}
