use std::time::Duration;

// --- Window / field layout (bottom-left origin, y grows upward) ---
pub const WINDOW_WIDTH: f64 = 800.0;
pub const WINDOW_HEIGHT: f64 = 600.0;
pub const FIELD_WIDTH: f64 = 700.0; // Left side: play field
pub const FIELD_HEIGHT: f64 = WINDOW_HEIGHT;

// --- Sidebar buttons ---
pub const BUTTON_X: f64 = FIELD_WIDTH + 10.0;
pub const BUTTON_WIDTH: f64 = 90.0;
pub const BUTTON_HEIGHT: f64 = 50.0;
pub const PAUSE_BUTTON_Y: f64 = 500.0;
pub const RESTART_BUTTON_Y: f64 = 430.0;
pub const END_BUTTON_Y: f64 = 360.0;

// --- Session ---
pub const MAX_LIVES: u32 = 3;
pub const SCORE_PER_ASTEROID: u32 = 10;
pub const TICK_INTERVAL: Duration = Duration::from_millis(16); // ~60 Hz

// --- Craft ---
pub const CRAFT_Y: f64 = 50.0;
pub const CRAFT_NOSE_HEIGHT: f64 = 25.0;
pub const CRAFT_HALF_SPAN: f64 = 35.0; // Wing tip to center
pub const CRAFT_MOVE_STEP: f64 = 10.0;

// --- Projectiles ---
pub const BULLET_SPEED: f64 = 300.0; // Units per second

// --- Asteroids ---
pub const BASE_ASTEROID_SPEED: f64 = 50.0; // Units per second in round 1
pub const ASTEROID_MIN_RADIUS: f64 = 10.0;
pub const ASTEROID_MAX_RADIUS: f64 = 24.0;
pub const SPAWN_MARGIN: f64 = 10.0;
pub const SPAWN_HEIGHT_OFFSET: f64 = 20.0; // Spawned just above the visible top

// --- Rounds ---
pub const ROUND1_DURATION: Duration = Duration::from_millis(15_000);
pub const ROUND2_DURATION: Duration = Duration::from_millis(20_000);
pub const ROUND1_SPAWN_INTERVAL: Duration = Duration::from_millis(1_000);
pub const ROUND2_SPAWN_INTERVAL: Duration = Duration::from_millis(500);
pub const ROUND3_SPAWN_INTERVAL: Duration = Duration::from_millis(300);
pub const ROUND2_SPEED_FACTOR: f64 = 2.0;
pub const ROUND3_SPEED_FACTOR: f64 = 6.0;
pub const ROUND3_SPEED_STEP: Duration = Duration::from_millis(5_000);
pub const ROUND3_SPEED_INCREMENT: f64 = 50.0;
pub const ROUND_BANNER_DURATION: Duration = Duration::from_millis(3_000);
