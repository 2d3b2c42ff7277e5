//! Per-tick simulation advance
//!
//! One call per display frame from the external driver. The phase machine
//! gates the frame: only `Playing` runs physics, lifecycle and camera; the
//! other phases are inert apart from their transition inputs.

use glam::Vec2;

use super::collision::{Side, resolve};
use super::state::{DeathCause, GameEvent, GamePhase, SimState, Snapshot};
use crate::consts::VIEWPORT_HEIGHT;

/// Input flags for a single tick, read-only to the core.
///
/// `left`/`right`/`jump`/`sprint` are level-triggered (held keys). `confirm`
/// and `pause` are edge-triggered: the input collector sets them for one tick
/// and clears them after the frame, the same way the driver clears its
/// one-shot commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub sprint: bool,
    pub confirm: bool,
    pub pause: bool,
}

/// Advance one tick and hand back what the renderer should draw
pub fn advance(state: &mut SimState, input: &TickInput) -> Snapshot {
    let events = tick(state, input);
    state.snapshot(events)
}

/// Advance the simulation by one tick, returning the events it raised
pub fn tick(state: &mut SimState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Start => {
            if input.confirm {
                // Fresh campaign run from the first level
                state.load_level(0);
                state.phase = GamePhase::Playing;
            }
            return events;
        }
        GamePhase::GameOver => {
            if input.confirm {
                // Retry the level the player died on
                let index = state.level_index;
                state.load_level(index);
                state.phase = GamePhase::Playing;
            }
            return events;
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
            }
            return events;
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                return events;
            }
        }
    }

    state.tick += 1;

    // Boost countdown runs between frames, before this tick's physics, so a
    // pickup always gets its full duration of play time
    tick_boost(state, &mut events);

    let frame_ended = update_player(state, input, &mut events);

    // A death or a level switch ends the frame: enemies and camera hold
    // their pose (death) or stay at the freshly loaded level's reset state
    if frame_ended {
        return events;
    }

    update_enemies(state);

    let world_width = state.level.world_width();
    state.camera.follow(&state.player.body, world_width);

    events
}

/// Returns true when the frame ends early (death or level switch)
fn update_player(state: &mut SimState, input: &TickInput, events: &mut Vec<GameEvent>) -> bool {
    let tuning = state.tuning;
    let player = &mut state.player;

    // Horizontal drive. Right wins when both keys are held; the else-if
    // ordering is load-bearing and covered by tests.
    let mut speed = player.speed;
    if input.sprint {
        speed *= tuning.sprint_multiplier;
    }
    if input.left {
        player.vel.x = -speed;
    } else if input.right {
        player.vel.x = speed;
    } else {
        player.vel.x = 0.0;
    }

    if input.jump && player.grounded {
        player.vel.y = -player.jump_force;
        player.grounded = false;
    }

    player.vel.y += tuning.gravity;
    player.body.pos += player.vel;

    // Integrate-then-resolve against every platform in declared order.
    // Later platforms may overwrite an earlier outcome per axis; that
    // last-write-wins behavior is kept as-is.
    player.grounded = false;
    for platform in &state.level.platforms {
        match resolve(&mut player.body, player.vel, platform) {
            Some(Side::Top) => {
                player.vel.y = 0.0;
                player.grounded = true;
            }
            Some(Side::Bottom) => player.vel.y = 0.0,
            Some(Side::Left) | Some(Side::Right) => player.vel.x = 0.0,
            None => {}
        }
    }

    // Keep the player inside the world's horizontal extent
    let max_x = (state.level.world_width() - player.body.size.x).max(0.0);
    player.body.pos.x = player.body.pos.x.clamp(0.0, max_x);

    // Enemy interaction: a hit from above is a stomp, anything else ends the
    // run. Stomped enemies are only marked here and compacted after the pass.
    let mut fatal = false;
    for enemy in &mut state.enemies {
        if !enemy.alive || !player.body.overlaps(&enemy.body) {
            continue;
        }
        if player.body.bottom() - player.vel.y <= enemy.body.top() {
            enemy.alive = false;
            player.vel.y = -player.jump_force / tuning.stomp_bounce_divisor;
            events.push(GameEvent::EnemyStomped);
        } else {
            fatal = true;
            break;
        }
    }
    if fatal {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::PlayerKilled(DeathCause::EnemyContact));
        return true;
    }
    state.enemies.retain(|e| e.alive);

    // Goal: advance the campaign, wrapping to the first level at the end
    if state.player.body.overlaps(&state.level.goal) {
        let completed = state.level_index;
        events.push(GameEvent::LevelCompleted(completed));
        let next = completed + 1;
        if next >= state.level_count() {
            events.push(GameEvent::CampaignCompleted);
            state.load_level(0);
        } else {
            state.load_level(next);
        }
        return true;
    }

    // Power-up pickup: the boost multiplier applies once; a pickup while a
    // boost is already running only refreshes the countdown
    if state.powerup.active && state.player.body.overlaps(&state.powerup.body) {
        state.powerup.active = false;
        if state.boost_ticks == 0 {
            state.player.jump_force *= tuning.boost_multiplier;
        }
        state.boost_ticks = tuning.boost_ticks;
        events.push(GameEvent::PowerUpCollected);
    }

    if state.player.body.top() > VIEWPORT_HEIGHT {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::PlayerKilled(DeathCause::FellOffWorld));
        return true;
    }

    false
}

fn update_enemies(state: &mut SimState) {
    let world_width = state.level.world_width();
    let gravity = state.tuning.gravity;

    for enemy in &mut state.enemies {
        enemy.vel_y += gravity;

        enemy.body.pos.x += enemy.speed * enemy.direction;
        enemy.body.pos.y += enemy.vel_y;

        enemy.grounded = false;
        for platform in &state.level.platforms {
            // Reconstruct from the live velocity: an earlier platform in this
            // pass may already have zeroed vel_y or flipped the patrol
            let step = Vec2::new(enemy.speed * enemy.direction, enemy.vel_y);
            match resolve(&mut enemy.body, step, platform) {
                Some(Side::Top) => {
                    enemy.vel_y = 0.0;
                    enemy.grounded = true;
                }
                Some(Side::Bottom) => enemy.vel_y = 0.0,
                Some(Side::Left) | Some(Side::Right) => enemy.direction = -enemy.direction,
                None => {}
            }
        }

        // Turn around at the world edges regardless of platform contact
        if enemy.body.left() < 0.0 || enemy.body.right() > world_width {
            enemy.direction = -enemy.direction;
        }
    }
}

fn tick_boost(state: &mut SimState, events: &mut Vec<GameEvent>) {
    if state.boost_ticks > 0 {
        state.boost_ticks -= 1;
        if state.boost_ticks == 0 {
            state.player.jump_force = state.player.default_jump_force;
            events.push(GameEvent::JumpBoostExpired);
        }
    }
}
