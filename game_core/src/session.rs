//! One player's game: the ball, the court, the score and the pointer gesture

use crate::{
    create_ball, step, Ball, Config, ConfigError, Court, DragGesture, Events, Params, Score,
    ShotStats,
};
use glam::Vec2;
use hecs::{Entity, World};

/// Number of preview points drawn for the aiming guide
pub const AIM_PREVIEW_STEPS: usize = 24;

pub struct GameSession {
    world: World,
    ball: Entity,
    config: Config,
    court: Court,
    score: Score,
    stats: ShotStats,
    accumulator: f32,
    drag: Option<DragGesture>,
    launch_pending: bool,
}

impl GameSession {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let court = Court::new(&config);
        let mut world = World::new();
        let ball = create_ball(&mut world, court.ball_origin);

        Ok(Self {
            world,
            ball,
            config,
            court,
            score: Score::new(),
            stats: ShotStats::new(),
            accumulator: 0.0,
            drag: None,
            launch_pending: false,
        })
    }

    /// Score back to 0, ball back to origin at rest
    pub fn reset(&mut self) {
        self.score.reset();
        self.stats.reset();
        self.drag = None;
        self.accumulator = 0.0;
        self.launch_pending = false;
        let origin = self.court.ball_origin;
        let found = match self.ball_mut() {
            Some(mut ball) => {
                ball.reset(origin);
                true
            }
            None => false,
        };
        if !found {
            self.ball = create_ball(&mut self.world, origin);
        }
    }

    /// Start aiming. Ignored while the ball is in flight
    pub fn pointer_down(&mut self, point: Vec2) -> bool {
        if self.ball().map_or(true, |b| b.in_motion) {
            return false;
        }
        self.drag = Some(DragGesture::begin(point));
        true
    }

    pub fn pointer_move(&mut self, point: Vec2) {
        if let Some(drag) = self.drag.as_mut() {
            drag.update(point);
        }
    }

    /// Finish aiming and launch. Returns the launch velocity if a shot was taken
    pub fn pointer_up(&mut self, point: Vec2) -> Option<Vec2> {
        let mut drag = self.drag.take()?;
        drag.update(point);
        let velocity = drag.release(&self.config)?;

        {
            let mut ball = self.ball_mut()?;
            if ball.in_motion {
                return None;
            }
            ball.launch(velocity);
        }
        self.stats.record_attempt();
        self.launch_pending = true;
        log::debug!("launch velocity ({:.2}, {:.2})", velocity.x, velocity.y);
        Some(velocity)
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Advance by wall-clock `dt` seconds in fixed steps, returning what happened.
    /// A launch since the previous call is reported even if no step ran
    pub fn advance(&mut self, dt: f32) -> Events {
        let mut frame_events = Events::new();
        frame_events.launched = std::mem::take(&mut self.launch_pending);
        self.accumulator += dt.clamp(0.0, Params::MAX_DT);

        while self.accumulator >= Params::FIXED_DT {
            self.accumulator -= Params::FIXED_DT;
            let mut events = Events::new();
            step(
                &mut self.world,
                &self.court,
                &self.config,
                &mut self.score,
                &mut self.stats,
                &mut events,
            );
            frame_events.merge(&events);
        }

        frame_events
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        self.world.get::<&mut Ball>(self.ball).ok()
    }

    pub fn score(&self) -> u32 {
        self.score.points
    }

    pub fn stats(&self) -> ShotStats {
        self.stats
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    pub fn drag(&self) -> Option<&DragGesture> {
        self.drag.as_ref()
    }

    /// Predicted path for the shot currently being aimed
    pub fn aim_preview(&self) -> Vec<Vec2> {
        let (Some(drag), Some(ball)) = (self.drag, self.ball()) else {
            return Vec::new();
        };
        match drag.release(&self.config) {
            Some(velocity) => crate::predict_path(
                ball.pos,
                velocity,
                &self.config,
                &self.court,
                AIM_PREVIEW_STEPS,
            ),
            None => Vec::new(),
        }
    }
}
