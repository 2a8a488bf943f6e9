//! Game state and core simulation types
//!
//! The orchestrator (`GameState`) exclusively owns every entity of the
//! current room. Entities are passive data plus their per-kind update rules.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::room::{RoomGenerator, RoomLayout};
use crate::consts::*;
use crate::settings::{Settings, SettingsError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Hero alive, ticks advance the world
    Active,
    /// Hero dead, ticks are no-ops until `reset`
    Dead,
}

/// Facing / travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in screen coordinates (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Integer tick countdown. Ready at zero, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cooldown(u32);

impl Cooldown {
    pub fn new(ticks: u32) -> Self {
        Self(ticks)
    }

    #[inline]
    pub fn ready(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.0
    }

    /// Advance one tick
    #[inline]
    pub fn tick(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    pub fn reset(&mut self, ticks: u32) {
        self.0 = ticks;
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub pos: Vec2,
    pub health: i32,
    pub alive: bool,
    pub direction: Direction,
    pub speed: f32,
    pub shoot_cooldown: Cooldown,
    pub shoot_delay: u32,
    /// Presentation hint: any movement flag was set this tick
    pub moving: bool,
}

impl Hero {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            health: HERO_MAX_HEALTH,
            alive: true,
            direction: Direction::default(),
            speed: HERO_SPEED,
            shoot_cooldown: Cooldown::default(),
            shoot_delay: HERO_SHOOT_DELAY,
            moving: false,
        }
    }

    /// Body box (walls, enemy bullets)
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, HERO_SIZE)
    }

    /// Larger box used for portal triggers
    #[inline]
    pub fn portal_rect(&self) -> Rect {
        Rect::square(self.pos, HERO_PORTAL_SIZE)
    }

    /// Apply damage with a floor of zero
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
        if self.health <= 0 {
            self.alive = false;
        }
    }

    /// Room transition: back to the spawn point with full health
    pub fn respawn(&mut self, pos: Vec2) {
        self.pos = pos;
        self.health = HERO_MAX_HEALTH;
        self.alive = true;
    }
}

/// Enemy behaviour variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyKind {
    /// Closes in and strikes when within reach on both axes
    Melee,
    /// Fires axis-aligned bullets within its engagement radius
    Ranged,
}

impl EnemyKind {
    pub fn engagement_radius(self) -> f32 {
        match self {
            EnemyKind::Melee => 0.0,
            EnemyKind::Ranged => RANGED_RADIUS,
        }
    }
}

/// A hostile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub speed: f32,
    pub health: i32,
    pub alive: bool,
    pub attack_cooldown: Cooldown,
    pub kind: EnemyKind,
    /// Euclidean firing radius (0 for melee)
    pub shoot_range: f32,
    /// Cooldown applied after a ranged shot
    pub shoot_delay: u32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, kind: EnemyKind) -> Self {
        Self {
            id,
            pos,
            speed: ENEMY_SPEED,
            health: ENEMY_MAX_HEALTH,
            alive: true,
            attack_cooldown: Cooldown::default(),
            kind,
            shoot_range: kind.engagement_radius(),
            shoot_delay: RANGED_COOLDOWN,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, ENEMY_SIZE)
    }

    /// Step toward `target` on each axis outside the dead zone, then tick
    /// the attack cooldown.
    pub fn pursue(&mut self, target: Vec2) {
        if !self.alive {
            return;
        }
        if (target.x - self.pos.x).abs() > ENEMY_DEAD_ZONE {
            self.pos.x += if target.x > self.pos.x { self.speed } else { -self.speed };
        }
        if (target.y - self.pos.y).abs() > ENEMY_DEAD_ZONE {
            self.pos.y += if target.y > self.pos.y { self.speed } else { -self.speed };
        }
        self.attack_cooldown.tick();
    }

    /// Apply damage with a floor of zero
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
        if self.health <= 0 {
            self.alive = false;
        }
    }
}

/// Which side fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletOwner {
    Hero,
    Enemy,
}

/// A projectile travelling along one axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub direction: Direction,
    pub speed: f32,
    owner: BulletOwner,
}

impl Bullet {
    pub fn new(pos: Vec2, direction: Direction, owner: BulletOwner) -> Self {
        Self {
            pos,
            direction,
            speed: BULLET_SPEED,
            owner,
        }
    }

    /// Fixed at creation
    #[inline]
    pub fn owner(&self) -> BulletOwner {
        self.owner
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, BULLET_SIZE)
    }

    pub fn advance(&mut self) {
        self.pos += self.direction.unit() * self.speed;
    }

    /// Closed-interval playfield check
    pub fn in_bounds(&self, width: f32, height: f32) -> bool {
        (0.0..=width).contains(&self.pos.x) && (0.0..=height).contains(&self.pos.y)
    }
}

/// Static room geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub rect: Rect,
}

impl Wall {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }
}

/// Room exit placed on a wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Portal {
    pub rect: Rect,
}

impl Portal {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, PORTAL_SIZE, PORTAL_SIZE),
        }
    }
}

/// Complete simulation state for one instance
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed of this instance's room generator
    pub seed: u64,
    pub screen_width: f32,
    pub screen_height: f32,
    /// Simulation tick counter (active ticks only)
    pub time_ticks: u64,
    /// Number of rooms generated so far (the first room is 1)
    pub room_index: u32,
    pub hero: Hero,
    /// Active enemies (creation order)
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub walls: Vec<Wall>,
    pub portals: Vec<Portal>,
    rooms: RoomGenerator,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a simulation from validated settings, seeding room generation
    /// from `settings.seed` (or a fresh random seed).
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);
        let mut state = Self::with_rng(settings, Pcg32::seed_from_u64(seed))?;
        state.seed = seed;
        Ok(state)
    }

    /// Create a simulation drawing portal placement from `rng`
    pub fn with_rng(settings: &Settings, rng: Pcg32) -> Result<Self, SettingsError> {
        settings.validate()?;
        let layout = RoomLayout::from_settings(settings);
        let mut state = Self {
            seed: settings.seed.unwrap_or_default(),
            screen_width: settings.screen_width,
            screen_height: settings.screen_height,
            time_ticks: 0,
            room_index: 0,
            hero: Hero::new(layout.hero_spawn),
            enemies: Vec::new(),
            bullets: Vec::new(),
            walls: Vec::new(),
            portals: Vec::new(),
            rooms: RoomGenerator::new(layout, rng),
            next_id: 1,
        };
        state.generate_room();
        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn phase(&self) -> GamePhase {
        if self.hero.alive {
            GamePhase::Active
        } else {
            GamePhase::Dead
        }
    }

    /// Replace the whole room; only the hero survives (reset to spawn)
    pub fn generate_room(&mut self) {
        let room = self.rooms.generate();
        let enemies: Vec<Enemy> = room
            .enemy_spawns
            .iter()
            .map(|spawn| Enemy::new(self.next_entity_id(), spawn.pos, spawn.kind))
            .collect();

        self.enemies = enemies;
        self.bullets = Vec::new();
        self.walls = room.walls;
        self.portals = room.portals;
        self.hero.respawn(self.rooms.layout().hero_spawn);
        self.room_index += 1;

        log::info!(
            "Room {}: {} walls, {} enemies, {} portals",
            self.room_index,
            self.walls.len(),
            self.enemies.len(),
            self.portals.len()
        );
    }

    /// Leave the Dead phase by starting a fresh room
    pub fn reset(&mut self) {
        log::info!("Reset requested at tick {}", self.time_ticks);
        self.generate_room();
    }
}
