//! Room generation
//!
//! A room is four boundary walls, a fixed enemy roster and two portals placed
//! on randomly chosen walls. Placement draws only from the generator's own
//! RNG so each simulation instance is reproducible from its seed.

use glam::Vec2;
use rand::Rng;
use rand::seq::index;
use rand_pcg::Pcg32;

use super::state::{EnemyKind, Portal, Wall};
use crate::consts::*;
use crate::settings::Settings;

/// Where an enemy of a given kind appears when a room is generated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub pos: Vec2,
    pub kind: EnemyKind,
}

/// Fixed part of every room
#[derive(Debug, Clone, PartialEq)]
pub struct RoomLayout {
    pub width: f32,
    pub height: f32,
    pub hero_spawn: Vec2,
    pub enemy_spawns: Vec<EnemySpawn>,
}

impl RoomLayout {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            width: settings.screen_width,
            height: settings.screen_height,
            hero_spawn: Vec2::from(HERO_SPAWN),
            enemy_spawns: vec![
                EnemySpawn {
                    pos: Vec2::from(MELEE_SPAWN),
                    kind: EnemyKind::Melee,
                },
                EnemySpawn {
                    pos: Vec2::from(RANGED_SPAWN),
                    kind: EnemyKind::Ranged,
                },
            ],
        }
    }

    /// Closed rectangle of walls around the playfield: top, left, right, bottom
    pub fn boundary_walls(&self) -> Vec<Wall> {
        let (w, h, t) = (self.width, self.height, WALL_THICKNESS);
        vec![
            Wall::new(0.0, 0.0, w, t),
            Wall::new(0.0, 0.0, t, h),
            Wall::new(w - t, 0.0, t, h),
            Wall::new(0.0, h - t, w, t),
        ]
    }
}

/// Freshly generated room contents
#[derive(Debug, Clone)]
pub struct Room {
    pub walls: Vec<Wall>,
    pub enemy_spawns: Vec<EnemySpawn>,
    pub portals: Vec<Portal>,
}

/// Builds rooms from a layout and an owned random source
#[derive(Debug, Clone)]
pub struct RoomGenerator<R = Pcg32> {
    layout: RoomLayout,
    rng: R,
}

impl<R: Rng> RoomGenerator<R> {
    pub fn new(layout: RoomLayout, rng: R) -> Self {
        Self { layout, rng }
    }

    pub fn layout(&self) -> &RoomLayout {
        &self.layout
    }

    pub fn generate(&mut self) -> Room {
        let walls = self.layout.boundary_walls();
        let portals = spawn_random_portals(&walls, &mut self.rng);
        Room {
            walls,
            enemy_spawns: self.layout.enemy_spawns.clone(),
            portals,
        }
    }
}

/// Place one portal on each of `PORTALS_PER_ROOM` distinct walls, chosen
/// uniformly without replacement. Needs at least four walls.
pub fn spawn_random_portals<R: Rng + ?Sized>(walls: &[Wall], rng: &mut R) -> Vec<Portal> {
    if walls.len() < 4 {
        log::warn!("Skipping portals: room has only {} walls", walls.len());
        return Vec::new();
    }
    index::sample(&mut *rng, walls.len(), PORTALS_PER_ROOM)
        .iter()
        .map(|i| portal_on_wall(&walls[i], &mut *rng))
        .collect()
}

/// Portal on `wall`: uniform along the wall's long axis, centred across its
/// short axis.
pub fn portal_on_wall<R: Rng + ?Sized>(wall: &Wall, rng: &mut R) -> Portal {
    let r = wall.rect;
    let half = PORTAL_SIZE / 2.0;
    if r.is_horizontal() {
        let x = sample_along(r.x, r.width, rng);
        let y = r.y + (r.height / 2.0).floor() - half;
        Portal::new(x, y)
    } else {
        let x = r.x + (r.width / 2.0).floor() - half;
        let y = sample_along(r.y, r.height, rng);
        Portal::new(x, y)
    }
}

/// Integer offset in `[start + 50, start + len - 100]`. A wall too short for
/// that range collapses to the range's low end, clamped to the wall.
fn sample_along<R: Rng + ?Sized>(start: f32, len: f32, rng: &mut R) -> f32 {
    let lo = (start + PORTAL_START_MARGIN).ceil() as i64;
    let hi = (start + len - PORTAL_END_MARGIN).floor() as i64;
    if lo > hi {
        log::warn!("Wall at {start} (length {len}) too short for portal range, clamping");
        return (start + PORTAL_START_MARGIN).min(start + (len - PORTAL_SIZE).max(0.0));
    }
    rng.random_range(lo..=hi) as f32
}
