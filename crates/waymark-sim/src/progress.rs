use serde::{Deserialize, Serialize};

use crate::RunEvent;
use crate::input::InputState;
use crate::layout::Checkpoint;
use crate::physics::Player;

/// Width of the band at a checkpoint's left edge inside which a claim
/// surfaces the "checkpoint reached" banner. Claims outside the band are
/// silent (the player swept through fast or clipped the far side).
pub const BANNER_BAND: f32 = 40.0;

/// Whether the run still reacts to input and motion. Cleared permanently
/// when the final checkpoint is claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    pub active: bool,
}

impl Default for RunState {
    fn default() -> Self {
        Self { active: true }
    }
}

/// Test the player against every checkpoint in ordinal order, claiming
/// matches irreversibly.
///
/// A checkpoint matches only when the player overlaps it vertically, has
/// reached its left edge without overshooting the proximity bound, the run
/// is active, and every earlier checkpoint is already claimed. Claiming the
/// last checkpoint freezes the run: the progression flag clears, held
/// directions are dropped and the player's velocity is zeroed.
pub fn evaluate_checkpoints(
    player: &mut Player,
    checkpoints: &mut [Checkpoint],
    run: &mut RunState,
    input: &mut InputState,
) -> Vec<RunEvent> {
    let mut events = Vec::new();
    let count = checkpoints.len();

    for index in 0..count {
        let prior_claimed = index == 0 || checkpoints[index - 1].claimed;
        let cp = &mut checkpoints[index];

        let reached = run.active
            && prior_claimed
            && player.x >= cp.x
            && player.y >= cp.y
            && player.y + player.height <= cp.y + cp.height
            && player.x - player.width <= cp.x - cp.width + player.width * 0.9;
        if !reached {
            continue;
        }

        cp.claim();
        tracing::info!(index, "checkpoint claimed");

        if index == count - 1 {
            // Terminal: freeze the run and shed any held input effect.
            run.active = false;
            input.release_all();
            player.vx = 0.0;
            player.vy = 0.0;
            tracing::info!("final checkpoint claimed, run complete");
            events.push(RunEvent::RunComplete);
        } else if player.x >= cp.x && player.x <= cp.x + BANNER_BAND {
            events.push(RunEvent::CheckpointReached { index });
        }
    }

    events
}
