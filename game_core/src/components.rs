use glam::Vec2;

/// Ball component - the basketball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub in_motion: bool,
}

impl Ball {
    /// Ball resting at `pos`
    pub fn at_rest(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            in_motion: false,
        }
    }

    pub fn launch(&mut self, vel: Vec2) {
        self.vel = vel;
        self.in_motion = true;
    }

    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
        self.in_motion = false;
    }

    /// Put the ball back on the origin, at rest
    pub fn reset(&mut self, origin: Vec2) {
        self.pos = origin;
        self.stop();
    }
}
