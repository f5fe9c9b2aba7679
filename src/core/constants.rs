// Play field
pub const FIELD_WIDTH: f64 = 400.0;
pub const FIELD_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 40.0;

// Player physics (units per second)
pub const GRAVITY: f64 = 650.0;
pub const FLAP_IMPULSE: f64 = 280.0;
pub const SCROLL_SPEED: f64 = 90.0; // 1.5 units per 60 Hz frame

// Player placement
pub const PLAYER_X: f64 = 100.0;
pub const PLAYER_START_Y: f64 = 300.0;
pub const PLAYER_HITBOX: f64 = 28.0;

// Obstacle spawning
pub const SPAWN_INTERVAL_MS: u64 = 2200;
pub const SPAWN_X: f64 = 450.0;
pub const OFFSCREEN_X: f64 = -50.0;
pub const SEGMENT_SIZE: f64 = 50.0;
pub const SEGMENT_HITBOX: f64 = 35.0;
pub const MIN_CLEARANCE: f64 = 100.0;

// First obstacle of a session is always a short bottom column
pub const FIRST_HEIGHT_MIN: f64 = 120.0;
pub const FIRST_HEIGHT_MAX: f64 = 180.0;

// Gap-center range used by tiers that don't override it
pub const GAP_CENTER_MIN: f64 = 150.0;
pub const GAP_CENTER_MAX: f64 = 400.0;

// Timing
pub const GAME_OVER_DELAY_MS: u64 = 500;
pub const FRAME_MS: u64 = 16; // ~60 FPS

// Persistence
pub const SAVE_DIR_NAME: &str = ".treehop";
pub const HIGH_SCORE_FILE: &str = "high_score.json";
pub const CONFIG_FILE: &str = "config.json";
