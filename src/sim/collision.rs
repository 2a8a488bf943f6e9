//! Collision detection and response
//!
//! Hero-vs-wall movement correction, bullet culling, bullet-vs-entity hits and
//! the hero-vs-portal trigger. Bullet passes return the next tick's bullet
//! list instead of editing the current one in place.

use super::geometry::Rect;
use super::state::{Bullet, BulletOwner, Direction, Enemy, Hero, Portal, Wall};
use super::tick::TickInput;
use crate::consts::*;

/// True if `rect` overlaps any wall
pub fn hits_any_wall(rect: &Rect, walls: &[Wall]) -> bool {
    walls.iter().any(|w| rect.overlaps(&w.rect))
}

/// Apply movement intent, reverting the whole step if it ends inside a wall.
///
/// Facing follows the last set flag in left, right, up, down order.
pub fn move_hero(hero: &mut Hero, input: &TickInput, walls: &[Wall]) {
    hero.moving = false;
    let start = hero.pos;

    let steps = [
        (input.left, Direction::Left),
        (input.right, Direction::Right),
        (input.up, Direction::Up),
        (input.down, Direction::Down),
    ];
    for (pressed, direction) in steps {
        if pressed {
            hero.pos += direction.unit() * hero.speed;
            hero.direction = direction;
            hero.moving = true;
        }
    }

    if hits_any_wall(&hero.rect(), walls) {
        hero.pos = start;
    }
}

/// Advance every bullet and keep those still inside the playfield
pub fn advance_bullets(bullets: Vec<Bullet>, width: f32, height: f32) -> Vec<Bullet> {
    bullets
        .into_iter()
        .map(|mut b| {
            b.advance();
            b
        })
        .filter(|b| b.in_bounds(width, height))
        .collect()
}

/// Resolve bullet hits against the opposing side and return the surviving
/// bullets. A hero bullet damages at most one alive enemy (the first in
/// order); an enemy bullet can only hit the hero. Misses carry over.
pub fn resolve_bullet_hits(bullets: Vec<Bullet>, hero: &mut Hero, enemies: &mut [Enemy]) -> Vec<Bullet> {
    bullets
        .into_iter()
        .filter(|bullet| {
            let hit_box = bullet.rect();
            match bullet.owner() {
                BulletOwner::Hero => {
                    let target = enemies.iter_mut().find(|e| e.alive && hit_box.overlaps(&e.rect()));
                    match target {
                        Some(enemy) => {
                            enemy.take_damage(HERO_BULLET_DAMAGE);
                            log::debug!("Enemy {} hit, health {}", enemy.id, enemy.health);
                            false
                        }
                        None => true,
                    }
                }
                BulletOwner::Enemy => {
                    if hit_box.overlaps(&hero.rect()) {
                        hero.take_damage(ENEMY_BULLET_DAMAGE);
                        log::debug!("Hero hit, health {}", hero.health);
                        false
                    } else {
                        true
                    }
                }
            }
        })
        .collect()
}

/// Index of the first portal the hero's trigger box overlaps
pub fn touched_portal(hero: &Hero, portals: &[Portal]) -> Option<usize> {
    let trigger = hero.portal_rect();
    portals.iter().position(|p| trigger.overlaps(&p.rect))
}
