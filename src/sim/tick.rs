//! Fixed timestep simulation tick
//!
//! Core game loop that advances the room by exactly one step per call.

use serde::{Deserialize, Serialize};

use super::collision::{advance_bullets, move_hero, resolve_bullet_hits, touched_portal};
use super::combat::{engage, hero_shoot};
use super::state::{GamePhase, GameState};

/// Input intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
}

/// Advance the game state by one tick.
///
/// Order: hero movement, hero cooldown and shot, bullet flight and culling,
/// enemy pursuit and attacks, bullet hits, dead-enemy removal, portal check.
/// A dead hero freezes the world until [`GameState::reset`].
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase() == GamePhase::Dead {
        return;
    }
    state.time_ticks += 1;

    move_hero(&mut state.hero, input, &state.walls);
    state.hero.shoot_cooldown.tick();
    if input.shoot {
        if let Some(bullet) = hero_shoot(&mut state.hero) {
            state.bullets.push(bullet);
        }
    }

    state.bullets = advance_bullets(
        std::mem::take(&mut state.bullets),
        state.screen_width,
        state.screen_height,
    );

    let target = state.hero.pos;
    for enemy in state.enemies.iter_mut() {
        enemy.pursue(target);
        if let Some(bullet) = engage(enemy, &mut state.hero) {
            state.bullets.push(bullet);
        }
    }

    state.bullets = resolve_bullet_hits(
        std::mem::take(&mut state.bullets),
        &mut state.hero,
        &mut state.enemies,
    );
    state.enemies = std::mem::take(&mut state.enemies)
        .into_iter()
        .filter(|e| e.alive)
        .collect();

    if !state.hero.alive {
        log::info!("Hero died at tick {} in room {}", state.time_ticks, state.room_index);
    }

    if touched_portal(&state.hero, &state.portals).is_some() {
        log::info!("Portal reached at tick {}", state.time_ticks);
        state.generate_room();
    }
}

impl GameState {
    /// Per-tick entry point, see [`tick`]
    pub fn update(&mut self, input: &TickInput) {
        tick(self, input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::geometry::Rect;
    use crate::sim::state::{Bullet, BulletOwner, Direction, Enemy, EnemyKind, Portal};
    use glam::Vec2;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn new_state(seed: u64) -> GameState {
        GameState::new(&Settings::with_seed(seed)).unwrap()
    }

    /// Room with no enemies and no portals, for isolated scenarios
    fn quiet_state() -> GameState {
        let mut state = new_state(1);
        state.enemies.clear();
        state.portals.clear();
        state
    }

    #[test]
    fn test_melee_scenario() {
        let mut state = quiet_state();
        state.hero.pos = Vec2::new(100.0, 100.0);
        state.enemies.push(Enemy::new(99, Vec2::new(120.0, 120.0), EnemyKind::Melee));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.hero.health, 90);
        assert_eq!(state.enemies[0].attack_cooldown.remaining(), MELEE_COOLDOWN);
        // Pursuit ran first
        assert_eq!(state.enemies[0].pos, Vec2::new(118.0, 118.0));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.hero.health, 90);
        assert_eq!(state.enemies[0].attack_cooldown.remaining(), MELEE_COOLDOWN - 1);
    }

    #[test]
    fn test_hero_bullet_kills_in_two_hits() {
        let mut state = quiet_state();
        let enemy_pos = Vec2::new(600.0, 400.0);
        state.enemies.push(Enemy::new(99, enemy_pos, EnemyKind::Melee));

        // Flies left into the enemy box after advancing 10px
        state.bullets.push(Bullet::new(Vec2::new(630.0, 420.0), Direction::Left, BulletOwner::Hero));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].health, 25);
        assert!(state.enemies[0].alive);
        assert!(state.bullets.is_empty());

        let pos = state.enemies[0].pos;
        state.bullets.push(Bullet::new(pos + Vec2::new(30.0, 20.0), Direction::Left, BulletOwner::Hero));
        tick(&mut state, &TickInput::default());
        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_enemy_bullet_hits_hero() {
        let mut state = quiet_state();
        state.hero.pos = Vec2::new(300.0, 300.0);
        state.bullets.push(Bullet::new(Vec2::new(290.0, 320.0), Direction::Right, BulletOwner::Enemy));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.hero.health, 80);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_ranged_enemy_shoots_in_tick() {
        let mut state = quiet_state();
        state.hero.pos = Vec2::new(100.0, 300.0);
        state.enemies.push(Enemy::new(99, Vec2::new(352.0, 300.0), EnemyKind::Ranged));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].owner(), BulletOwner::Enemy);
        assert_eq!(state.bullets[0].direction, Direction::Left);
        assert_eq!(state.bullets[0].pos, Vec2::new(350.0, 300.0));
        assert_eq!(state.enemies[0].attack_cooldown.remaining(), RANGED_COOLDOWN);
    }

    #[test]
    fn test_hero_shoot_rate() {
        let mut state = quiet_state();
        let input = TickInput {
            shoot: true,
            ..Default::default()
        };
        let mut shots = 0;
        for _ in 0..30 {
            let before = state.bullets.len();
            tick(&mut state, &input);
            if state.bullets.len() > before {
                shots += 1;
            }
        }
        // Fires on ticks 1, 11 and 21
        assert_eq!(shots, 3);
        assert!(state.bullets.iter().all(|b| b.owner() == BulletOwner::Hero));
        assert!(state.bullets.iter().all(|b| b.direction == Direction::Down));
    }

    #[test]
    fn test_bullets_leave_playfield() {
        let mut state = quiet_state();
        state.bullets.push(Bullet::new(Vec2::new(600.0, 675.0), Direction::Down, BulletOwner::Hero));
        tick(&mut state, &TickInput::default());
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_portal_regenerates_room() {
        let mut state = new_state(5);
        let before_portals = state.portals.clone();
        let before_room = state.room_index;
        let portal = state.portals[0].rect;
        state.hero.pos = Vec2::new(portal.x, portal.y);
        state.hero.health = 40;
        state.bullets.push(Bullet::new(Vec2::new(600.0, 300.0), Direction::Up, BulletOwner::Enemy));
        for enemy in state.enemies.iter_mut() {
            enemy.pos += Vec2::new(10.0, 10.0);
        }

        tick(&mut state, &TickInput::default());
        assert_eq!(state.room_index, before_room + 1);
        assert_eq!(state.hero.pos, Vec2::from(HERO_SPAWN));
        assert_eq!(state.hero.health, HERO_MAX_HEALTH);
        assert!(state.hero.alive);
        assert_eq!(state.walls.len(), 4);
        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.portals.len(), 2);
        assert!(state.bullets.is_empty());
        assert_eq!(state.enemies[0].pos, Vec2::from(MELEE_SPAWN));
        assert_eq!(state.enemies[1].pos, Vec2::from(RANGED_SPAWN));
        assert!(state.enemies.iter().all(|e| e.health == ENEMY_MAX_HEALTH));
        assert_ne!(state.portals, before_portals);
    }

    #[test]
    fn test_overlapping_portals_regenerate_once() {
        let mut state = quiet_state();
        state.portals = vec![Portal::new(400.0, 400.0), Portal::new(410.0, 410.0)];
        state.hero.pos = Vec2::new(400.0, 400.0);
        let before = state.room_index;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.room_index, before + 1);
    }

    #[test]
    fn test_dead_hero_freezes_world() {
        let mut state = new_state(11);
        state.hero.take_damage(HERO_MAX_HEALTH);
        state.bullets.push(Bullet::new(Vec2::new(600.0, 300.0), Direction::Up, BulletOwner::Hero));
        let hero_pos = state.hero.pos;
        let enemies: Vec<Vec2> = state.enemies.iter().map(|e| e.pos).collect();
        let ticks = state.time_ticks;

        let input = TickInput {
            up: true,
            right: true,
            shoot: true,
            ..Default::default()
        };
        for _ in 0..10 {
            state.update(&input);
        }
        assert_eq!(state.phase(), GamePhase::Dead);
        assert_eq!(state.hero.pos, hero_pos);
        assert_eq!(state.enemies.iter().map(|e| e.pos).collect::<Vec<_>>(), enemies);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].pos, Vec2::new(600.0, 300.0));
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_reset_leaves_dead_phase() {
        let mut state = new_state(11);
        state.hero.take_damage(HERO_MAX_HEALTH);
        assert_eq!(state.phase(), GamePhase::Dead);
        state.reset();
        assert_eq!(state.phase(), GamePhase::Active);
        assert_eq!(state.hero.health, HERO_MAX_HEALTH);
        assert_eq!(state.hero.pos, Vec2::from(HERO_SPAWN));
    }

    #[test]
    fn test_hero_dies_to_melee() {
        let mut state = quiet_state();
        state.hero.pos = Vec2::new(300.0, 300.0);
        state.hero.health = 10;
        state.enemies.push(Enemy::new(99, Vec2::new(310.0, 310.0), EnemyKind::Melee));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.hero.health, 0);
        assert_eq!(state.phase(), GamePhase::Dead);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = new_state(99999);
        let mut state2 = new_state(99999);

        let inputs = [
            TickInput { right: true, shoot: true, ..Default::default() },
            TickInput { down: true, ..Default::default() },
            TickInput { right: true, down: true, ..Default::default() },
            TickInput::default(),
        ];

        for i in 0..400 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.snapshot(), state2.snapshot());
        assert_eq!(state1.room_index, state2.room_index);
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        any::<[bool; 5]>().prop_map(|[up, down, left, right, shoot]| TickInput {
            up,
            down,
            left,
            right,
            shoot,
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn hero_never_ends_tick_in_wall(
            seed in any::<u64>(),
            inputs in prop::collection::vec(arb_input(), 1..300),
        ) {
            let mut state = new_state(seed);
            for input in &inputs {
                tick(&mut state, input);
                let body = state.hero.rect();
                prop_assert!(!state.walls.iter().any(|w| body.overlaps(&w.rect)));
            }
        }

        #[test]
        fn enemy_health_only_falls(
            seed in any::<u64>(),
            inputs in prop::collection::vec(arb_input(), 1..300),
        ) {
            let mut state = new_state(seed);
            let mut seen: HashMap<u32, i32> = HashMap::new();
            for input in &inputs {
                tick(&mut state, input);
                for enemy in &state.enemies {
                    prop_assert!(enemy.alive && enemy.health > 0);
                    prop_assert!(enemy.health <= ENEMY_MAX_HEALTH);
                    if let Some(prev) = seen.insert(enemy.id, enemy.health) {
                        prop_assert!(enemy.health <= prev);
                    }
                }
                prop_assert!((0..=HERO_MAX_HEALTH).contains(&state.hero.health));
                prop_assert_eq!(state.hero.alive, state.hero.health > 0);
            }
        }

        #[test]
        fn bullets_stay_in_bounds(
            seed in any::<u64>(),
            inputs in prop::collection::vec(arb_input(), 1..200),
        ) {
            let mut state = new_state(seed);
            let field = Rect::new(0.0, 0.0, state.screen_width, state.screen_height);
            for input in &inputs {
                tick(&mut state, input);
                for bullet in &state.bullets {
                    prop_assert!(bullet.pos.x >= field.x && bullet.pos.x <= field.right());
                    prop_assert!(bullet.pos.y >= field.y && bullet.pos.y <= field.bottom());
                }
            }
        }
    }
}
