/// Points scored in the current game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    pub fn reset(&mut self) {
        self.points = 0;
    }
}

/// Shot accounting for the current game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShotStats {
    pub attempts: u32,
    pub makes: u32,
}

impl ShotStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    pub fn record_make(&mut self) {
        self.makes += 1;
    }

    /// Fraction of attempts that scored, 0.0 before the first shot
    pub fn accuracy(&self) -> f32 {
        if self.attempts == 0 {
            0.0
        } else {
            self.makes as f32 / self.attempts as f32
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub launched: bool,
    pub scored: bool,
    pub bounced_floor: bool,
    pub bounced_wall: bool,
    pub settled: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fold another step's events into this frame's events
    pub fn merge(&mut self, other: &Events) {
        self.launched |= other.launched;
        self.scored |= other.scored;
        self.bounced_floor |= other.bounced_floor;
        self.bounced_wall |= other.bounced_wall;
        self.settled |= other.settled;
    }
}
