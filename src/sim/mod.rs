//! Fixed-tick simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per `tick` call, no wall-clock time
//! - Seeded RNG only, owned by each instance
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod combat;
pub mod geometry;
pub mod room;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use geometry::{Rect, overlap};
pub use room::{RoomGenerator, RoomLayout, spawn_random_portals};
pub use snapshot::{BulletView, EnemyView, GameSnapshot, HeroView};
pub use state::{
    Bullet, BulletOwner, Cooldown, Direction, Enemy, EnemyKind, GamePhase, GameState, Hero, Portal,
    Wall,
};
pub use tick::{TickInput, tick};
