//! Ledge Runner headless entry point
//!
//! Stands in for the external tick driver: advances the simulation with a
//! scripted input sequence and logs what a renderer would draw. A real
//! embedding supplies its own frame loop, input collector and renderer and
//! calls `sim::advance` exactly the way this driver does.

use ledge_runner::config::Tuning;
use ledge_runner::sim::{GamePhase, SimState, TickInput, advance, campaign};

fn main() {
    env_logger::init();
    log::info!("ledge-runner (headless) starting...");

    let mut state = match SimState::new(campaign(), Tuning::default()) {
        Ok(state) => state,
        Err(err) => {
            log::error!("campaign rejected: {err}");
            std::process::exit(1);
        }
    };
    log::info!("campaign loaded: {} levels", state.level_count());

    // Confirm past the title screen; confirm is a one-shot flag, so it is
    // only set for this single tick
    let snap = advance(&mut state, &TickInput {
        confirm: true,
        ..TickInput::default()
    });
    log::info!("phase after confirm: {:?}", snap.phase);

    // Scripted session: hold right and hop periodically for ten seconds of
    // simulated time
    let mut input = TickInput {
        right: true,
        ..TickInput::default()
    };
    for frame in 0..600u32 {
        input.jump = frame % 45 < 2;

        let snap = advance(&mut state, &input);
        for event in &snap.events {
            log::info!("tick {}: {:?}", snap.tick, event);
        }
        if frame % 60 == 0 {
            log::info!(
                "tick {} phase {:?} level {} player ({:.0},{:.0}) camera {:.0} enemies {}",
                snap.tick,
                snap.phase,
                snap.level_index,
                snap.player.pos.x,
                snap.player.pos.y,
                snap.camera_x,
                snap.enemies.len()
            );
        }
        if snap.phase == GamePhase::GameOver {
            log::info!("run ended at tick {}", snap.tick);
            break;
        }
    }
}
