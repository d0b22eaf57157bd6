/// Game tuning parameters for the free-throw court.
///
/// Units are canvas pixels. Velocities are pixels per fixed step and
/// gravity is pixels per step squared.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_ORIGIN_X: f32 = 150.0;
    pub const BALL_ORIGIN_Y: f32 = 450.0;

    // Physics
    pub const GRAVITY: f32 = 0.5;
    pub const RESTITUTION: f32 = 0.7; // Normal velocity kept after a bounce
    pub const FRICTION: f32 = 0.9; // Tangential velocity kept on floor contact
    pub const REST_SPEED: f32 = 0.6; // Below this on the floor the ball stops

    // Launch
    pub const LAUNCH_DIVISOR: f32 = 10.0;
    pub const MIN_DRAG: f32 = 5.0;

    // Hoop
    pub const HOOP_CENTER_X: f32 = 640.0;
    pub const HOOP_CENTER_Y: f32 = 220.0;
    pub const HOOP_WIDTH: f32 = 70.0;
    pub const HOOP_HEIGHT: f32 = 12.0;
    pub const BACKBOARD_WIDTH: f32 = 10.0;
    pub const BACKBOARD_HEIGHT: f32 = 110.0;

    // Score
    pub const POINTS_PER_BASKET: u32 = 2;

    // Timing
    pub const FIXED_DT: f32 = 1.0 / 60.0; // 60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
