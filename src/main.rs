//! Portal Rooms headless runner
//!
//! Drives the simulation with a scripted autopilot instead of a keyboard and
//! prints the final snapshot as JSON. Usage:
//!
//! ```text
//! portal-rooms [settings.json] [ticks]
//! ```

use glam::Vec2;

use portal_rooms::Settings;
use portal_rooms::consts::*;
use portal_rooms::sim::{GamePhase, GameState, Portal, Rect, TickInput};

/// Default run length (one minute at 60 ticks per second)
const DEFAULT_TICKS: u64 = 60 * 60;

/// Alignment slack for shooting along an axis
const AIM_SLACK: f32 = ENEMY_SIZE / 2.0;

fn main() {
    env_logger::init();
    log::info!("Portal Rooms (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let ticks = match args.next() {
        Some(n) => n.parse::<u64>()?,
        None => DEFAULT_TICKS,
    };

    let mut state = GameState::new(&settings)?;
    let mut rooms_seen = state.room_index;

    for _ in 0..ticks {
        let input = autopilot(&state);
        state.update(&input);

        if state.room_index != rooms_seen {
            rooms_seen = state.room_index;
            log::info!("Entered room {} at tick {}", rooms_seen, state.time_ticks);
        }
        if state.phase() == GamePhase::Dead {
            log::warn!("Hero fell in room {} after {} ticks", state.room_index, state.time_ticks);
            break;
        }
    }

    println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    Ok(())
}

/// Stand-in for the keyboard: chase the nearest enemy and fire once lined up,
/// or walk to the nearest portal when the room is clear.
fn autopilot(state: &GameState) -> TickInput {
    let hero = state.hero.pos;

    let nearest_enemy = state
        .enemies
        .iter()
        .map(|e| e.pos)
        .min_by(|a, b| a.distance(hero).total_cmp(&b.distance(hero)));

    let Some(target) = nearest_enemy.or_else(|| {
        state
            .portals
            .iter()
            .filter_map(|p| portal_spot(state, p))
            .min_by(|a, b| a.distance(hero).total_cmp(&b.distance(hero)))
    }) else {
        return TickInput::default();
    };

    let d = target - hero;
    let mut input = TickInput::default();

    match nearest_enemy {
        Some(_) => {
            // Line up on the shorter axis, then face along the longer one
            if d.x.abs() >= d.y.abs() {
                input.up = d.y < -AIM_SLACK;
                input.down = d.y > AIM_SLACK;
                if !input.up && !input.down {
                    input.left = d.x < 0.0;
                    input.right = d.x > 0.0;
                    input.shoot = true;
                }
            } else {
                input.left = d.x < -AIM_SLACK;
                input.right = d.x > AIM_SLACK;
                if !input.left && !input.right {
                    input.up = d.y < 0.0;
                    input.down = d.y > 0.0;
                    input.shoot = true;
                }
            }
        }
        None => {
            input.left = d.x < -HERO_SPEED;
            input.right = d.x > HERO_SPEED;
            input.up = d.y < -HERO_SPEED;
            input.down = d.y > HERO_SPEED;
        }
    }
    input
}

/// Closest walkable spot from which the hero's trigger box touches `portal`.
/// The trigger box only extends right and down past the body, so portals on
/// the top and left walls cannot be reached.
fn portal_spot(state: &GameState, portal: &Portal) -> Option<Vec2> {
    let min = WALL_THICKNESS + HERO_SPEED;
    let max_x = state.screen_width - WALL_THICKNESS - HERO_SIZE - HERO_SPEED;
    let max_y = state.screen_height - WALL_THICKNESS - HERO_SIZE - HERO_SPEED;
    let spot = Vec2::new(portal.rect.x.clamp(min, max_x), portal.rect.y.clamp(min, max_y));
    Rect::square(spot, HERO_PORTAL_SIZE)
        .overlaps(&portal.rect)
        .then_some(spot)
}
