use crate::{Ball, Config, Court, Events, Score, ShotStats};
use glam::Vec2;
use hecs::World;

/// Check whether the ball dropped through the hoop during the last step
pub fn check_scoring(
    world: &mut World,
    court: &Court,
    config: &Config,
    score: &mut Score,
    stats: &mut ShotStats,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.in_motion || ball.vel.y <= 0.0 {
            continue;
        }

        // Euler step: the previous position is one velocity behind
        let prev = ball.pos - ball.vel;
        if entered_from_above(court, prev, ball.pos) {
            score.add(config.points_per_basket);
            stats.record_make();
            events.scored = true;
            log::debug!("basket! score is now {}", score.points);

            ball.reset(court.ball_origin);
        }
    }
}

/// True if the step from `from` to `to` passed down through the top of the
/// hoop between the rim ends. Covers fast balls that skip the whole rim in
/// one step; a ball that came up through the rim from below never counts
fn entered_from_above(court: &Court, from: Vec2, to: Vec2) -> bool {
    let top = court.hoop.min.y;
    if !(from.y < top && to.y >= top) {
        return false;
    }
    let t = (top - from.y) / (to.y - from.y);
    let x = from.x + (to.x - from.x) * t;
    x >= court.hoop.min.x && x <= court.hoop.max.x
}
