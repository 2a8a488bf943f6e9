//! Portal Rooms - a top-down room-crawling arcade game core
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (movement, combat, collisions, rooms)
//! - `settings`: Validated, JSON-loadable configuration

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 684.0;

    /// Hero defaults
    pub const HERO_MAX_HEALTH: i32 = 100;
    pub const HERO_SPEED: f32 = 5.0;
    /// Ticks between hero shots
    pub const HERO_SHOOT_DELAY: u32 = 10;
    /// Hero box used for walls and enemy bullets
    pub const HERO_SIZE: f32 = 50.0;
    /// Hero box used for portal triggers (the sprite is larger than the body)
    pub const HERO_PORTAL_SIZE: f32 = 64.0;

    /// Enemy defaults
    pub const ENEMY_MAX_HEALTH: i32 = 50;
    pub const ENEMY_SPEED: f32 = 2.0;
    pub const ENEMY_SIZE: f32 = 50.0;
    /// Pursuit dead zone per axis (prevents jitter at close range)
    pub const ENEMY_DEAD_ZONE: f32 = 5.0;
    /// Melee reach, checked independently on each axis
    pub const MELEE_REACH: f32 = 50.0;
    pub const MELEE_DAMAGE: i32 = 10;
    pub const MELEE_COOLDOWN: u32 = 60;
    /// Ranged engagement radius (Euclidean)
    pub const RANGED_RADIUS: f32 = 300.0;
    pub const RANGED_COOLDOWN: u32 = 90;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_SIZE: f32 = 10.0;
    /// Damage a hero bullet deals to an enemy
    pub const HERO_BULLET_DAMAGE: i32 = 25;
    /// Damage an enemy bullet deals to the hero
    pub const ENEMY_BULLET_DAMAGE: i32 = 20;

    /// Room layout
    pub const WALL_THICKNESS: f32 = 50.0;
    pub const PORTAL_SIZE: f32 = 50.0;
    /// Distinct walls that receive a portal each room
    pub const PORTALS_PER_ROOM: usize = 2;
    /// Portal placement keeps this margin from a wall's start
    pub const PORTAL_START_MARGIN: f32 = 50.0;
    /// ...and this margin from a wall's end
    pub const PORTAL_END_MARGIN: f32 = 100.0;
    pub const HERO_SPAWN: (f32, f32) = (100.0, 100.0);
    pub const MELEE_SPAWN: (f32, f32) = (300.0, 300.0);
    pub const RANGED_SPAWN: (f32, f32) = (500.0, 300.0);
}
