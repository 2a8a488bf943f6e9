//! Combat resolution: hero shots, melee strikes and ranged fire
//!
//! Melee reach is checked per axis, not as a rectangle overlap. Bullet hits
//! use rectangle overlap (see `collision`). The two predicates are kept
//! separate on purpose: they tune differently.

use glam::Vec2;

use super::state::{Bullet, BulletOwner, Direction, Enemy, EnemyKind, Hero};
use crate::consts::*;

/// Fire along the hero's facing if the shot cooldown has elapsed
pub fn hero_shoot(hero: &mut Hero) -> Option<Bullet> {
    if !hero.shoot_cooldown.ready() {
        return None;
    }
    hero.shoot_cooldown.reset(hero.shoot_delay);
    log::debug!("Hero fires {:?} from {}", hero.direction, hero.pos);
    Some(Bullet::new(hero.pos, hero.direction, BulletOwner::Hero))
}

/// Within striking distance on both axes
#[inline]
pub fn in_melee_reach(enemy: &Enemy, hero: &Hero) -> bool {
    (enemy.pos.x - hero.pos.x).abs() < MELEE_REACH && (enemy.pos.y - hero.pos.y).abs() < MELEE_REACH
}

/// Within the enemy's Euclidean engagement radius
#[inline]
pub fn in_firing_range(enemy: &Enemy, hero: &Hero) -> bool {
    enemy.pos.distance(hero.pos) < enemy.shoot_range
}

/// Dominant axis from `from` toward `to`; horizontal wins ties
pub fn aim(from: Vec2, to: Vec2) -> Direction {
    let d = to - from;
    if d.x.abs() >= d.y.abs() {
        if d.x > 0.0 { Direction::Right } else { Direction::Left }
    } else if d.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Melee strike: fixed damage and a cooldown. Returns true if it landed.
pub fn melee_attack(enemy: &mut Enemy, hero: &mut Hero) -> bool {
    if !enemy.attack_cooldown.ready() {
        return false;
    }
    hero.take_damage(MELEE_DAMAGE);
    enemy.attack_cooldown.reset(MELEE_COOLDOWN);
    log::debug!("Enemy {} strikes hero, health {}", enemy.id, hero.health);
    true
}

/// Ranged shot toward the hero along the dominant axis
pub fn ranged_attack(enemy: &mut Enemy, hero: &Hero) -> Option<Bullet> {
    if !enemy.attack_cooldown.ready() {
        return None;
    }
    let direction = aim(enemy.pos, hero.pos);
    enemy.attack_cooldown.reset(enemy.shoot_delay);
    log::debug!("Enemy {} fires {:?}", enemy.id, direction);
    Some(Bullet::new(enemy.pos, direction, BulletOwner::Enemy))
}

/// Evaluate an enemy's attack trigger for this tick. Ranged enemies may
/// return a bullet for the caller to add to the room.
pub fn engage(enemy: &mut Enemy, hero: &mut Hero) -> Option<Bullet> {
    if !enemy.alive {
        return None;
    }
    match enemy.kind {
        EnemyKind::Melee => {
            if in_melee_reach(enemy, hero) {
                melee_attack(enemy, hero);
            }
            None
        }
        EnemyKind::Ranged => {
            if in_firing_range(enemy, hero) {
                ranged_attack(enemy, hero)
            } else {
                None
            }
        }
    }
}
