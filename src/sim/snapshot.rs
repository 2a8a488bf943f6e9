//! Read-only view of the world for the presentation layer
//!
//! A snapshot is an owned copy; nothing in it can reach back into the
//! simulation.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{Direction, EnemyKind, GameState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroView {
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    pub health: i32,
    pub alive: bool,
    pub moving: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub x: f32,
    pub y: f32,
    pub health: i32,
    pub kind: EnemyKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub x: f32,
    pub y: f32,
}

/// Everything a renderer may draw after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub hero: HeroView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub walls: Vec<Rect>,
    pub portals: Vec<Rect>,
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            hero: HeroView {
                x: self.hero.pos.x,
                y: self.hero.pos.y,
                direction: self.hero.direction,
                health: self.hero.health,
                alive: self.hero.alive,
                moving: self.hero.moving,
            },
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    x: e.pos.x,
                    y: e.pos.y,
                    health: e.health,
                    kind: e.kind,
                })
                .collect(),
            bullets: self
                .bullets
                .iter()
                .map(|b| BulletView {
                    x: b.pos.x,
                    y: b.pos.y,
                })
                .collect(),
            walls: self.walls.iter().map(|w| w.rect).collect(),
            portals: self.portals.iter().map(|p| p.rect).collect(),
        }
    }
}
