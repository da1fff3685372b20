pub mod camera;
pub mod input;
pub mod layout;
pub mod physics;
pub mod progress;

use serde::{Deserialize, Serialize};

use waymark_core::input::InputEvent;
use waymark_core::overlay::Banner;
use waymark_core::render::{Rect, Renderer};
use waymark_core::viewport::Viewport;

use camera::Camera;
use input::{InputQueue, InputState};
use layout::{Checkpoint, Layout, Platform};
use physics::{Player, SimConfig};
use progress::RunState;

/// Entity fill colors handed to the renderer.
pub const PLAYER_COLOR: &str = "#99c9ff";
pub const PLATFORM_COLOR: &str = "#acd157";
pub const CHECKPOINT_COLOR: &str = "#f1be32";

/// Banner texts surfaced to the overlay.
pub const CHECKPOINT_MESSAGE: &str = "You reached a checkpoint!";
pub const FINAL_MESSAGE: &str = "You reached the final checkpoint!";

/// Events raised by a single tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEvent {
    /// A non-final checkpoint was claimed close enough to its left edge
    /// to deserve a banner.
    CheckpointReached { index: usize },
    /// The final checkpoint was claimed; the run is frozen from here on.
    RunComplete,
}

/// Complete simulation state for one run, serializable as a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub checkpoints: Vec<Checkpoint>,
    pub run: RunState,
    /// Completed active ticks. Does not advance while paused or frozen.
    pub tick: u64,
}

/// The simulation driver: owns all run state and advances it one discrete
/// tick at a time.
///
/// Callers invoke [`tick`](Self::tick) (or [`frame`](Self::frame)) once per
/// display refresh. Input events arrive asynchronously through the queue
/// and are applied at the next tick boundary, so all mutation happens on
/// one logical timeline.
pub struct WaymarkRun {
    config: SimConfig,
    viewport: Viewport,
    camera: Camera,
    state: SimState,
    input: InputState,
    queue: InputQueue,
    paused: bool,
}

impl WaymarkRun {
    /// New run with default physics and the built-in course layout.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_config(SimConfig::default(), &Layout::default(), viewport)
    }

    pub fn with_config(config: SimConfig, layout: &Layout, viewport: Viewport) -> Self {
        let camera = Camera::new(&config, viewport);
        let state = SimState {
            player: Player::new(&config, viewport),
            platforms: layout::build_platforms(layout, &config, viewport),
            checkpoints: layout::build_checkpoints(layout, &config, viewport),
            run: RunState::default(),
            tick: 0,
        };
        Self {
            config,
            viewport,
            camera,
            state,
            input: InputState::default(),
            queue: InputQueue::default(),
            paused: false,
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Held directional state as of the last tick boundary.
    pub fn input_state(&self) -> InputState {
        self.input
    }

    /// True once the final checkpoint has been claimed.
    pub fn is_complete(&self) -> bool {
        !self.state.run.active
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Queue a logical input event for the next tick.
    pub fn queue_input(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Queue a raw host key event. Unrecognized key codes are dropped.
    pub fn queue_key(&mut self, code: &str, pressed: bool) {
        match InputEvent::from_code(code, pressed) {
            Some(event) => self.queue.push(event),
            None => tracing::debug!(code, "ignoring unrecognized key"),
        }
    }

    /// Begin displaying the run through the given overlay.
    pub fn start(&mut self, banner: &mut dyn Banner) {
        self.paused = false;
        banner.set_visible(true);
        tracing::info!("run started");
    }

    /// Halt ticking and hide the overlay.
    pub fn stop(&mut self, banner: &mut dyn Banner) {
        self.paused = true;
        banner.set_visible(false);
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Advance the simulation one tick: drain queued input, steer through
    /// the camera dead-zone, integrate the player, scroll the world,
    /// resolve platform collisions, then evaluate checkpoints.
    ///
    /// While paused, nothing happens and queued input stays queued. After
    /// the run completes, input is drained and discarded and nothing moves.
    pub fn tick(&mut self) -> Vec<RunEvent> {
        if self.paused {
            return Vec::new();
        }

        let jumps = self.queue.drain_into(&mut self.input);

        if !self.state.run.active {
            if jumps > 0 {
                tracing::debug!(jumps, "jump ignored after run completion");
            }
            return Vec::new();
        }

        for _ in 0..jumps {
            self.state.player.vy -= self.config.jump_impulse;
        }

        let steer = self.camera.steer(&self.input, self.state.player.x);
        self.state.player.vx = steer.vx;
        self.state.player.integrate(self.config.gravity, self.viewport);
        layout::scroll_world(
            &mut self.state.platforms,
            &mut self.state.checkpoints,
            steer.world_dx,
        );
        physics::resolve_platform_collisions(
            &mut self.state.player,
            &self.state.platforms,
            self.config.gravity,
        );
        let events = progress::evaluate_checkpoints(
            &mut self.state.player,
            &mut self.state.checkpoints,
            &mut self.state.run,
            &mut self.input,
        );
        self.state.tick += 1;
        events
    }

    /// Draw the current state: platforms, then checkpoints, then the player.
    /// Claimed checkpoints are zero-sized and draw as no-ops.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.clear();
        for platform in &self.state.platforms {
            renderer.fill_rect(
                Rect::new(platform.x, platform.y, platform.width, platform.height),
                PLATFORM_COLOR,
            );
        }
        for checkpoint in &self.state.checkpoints {
            renderer.fill_rect(
                Rect::new(checkpoint.x, checkpoint.y, checkpoint.width, checkpoint.height),
                CHECKPOINT_COLOR,
            );
        }
        let player = &self.state.player;
        renderer.fill_rect(
            Rect::new(player.x, player.y, player.width, player.height),
            PLAYER_COLOR,
        );
    }

    /// One display refresh: tick, surface banners for the tick's events,
    /// redraw. Rendering continues after the run freezes.
    pub fn frame(&mut self, renderer: &mut dyn Renderer, banner: &mut dyn Banner) -> Vec<RunEvent> {
        let events = self.tick();
        for event in &events {
            match event {
                RunEvent::CheckpointReached { .. } => banner.show(CHECKPOINT_MESSAGE, true),
                RunEvent::RunComplete => banner.show(FINAL_MESSAGE, false),
            }
        }
        self.render(renderer);
        events
    }

    /// Serialize the full simulation state.
    pub fn snapshot(&self) -> Vec<u8> {
        rmp_serde::to_vec(&self.state).unwrap_or_else(|e| {
            tracing::warn!("snapshot serialization failed: {e}");
            Vec::new()
        })
    }

    /// Replace the simulation state with a previously taken snapshot.
    /// Malformed bytes are ignored.
    pub fn restore(&mut self, snapshot: &[u8]) {
        if let Ok(state) = rmp_serde::from_slice::<SimState>(snapshot) {
            self.state = state;
        }
    }
}
