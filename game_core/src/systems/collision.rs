use crate::{Ball, Config, Court, Events};
use hecs::World;

/// Bounce the ball off the floor and side walls, and stop it once it rests on the floor
pub fn resolve_bounds(world: &mut World, court: &Court, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.in_motion {
            continue;
        }

        // Floor: restitution on the normal component, friction on the tangential one
        let floor_contact = court.floor_y - radius;
        let on_floor = ball.pos.y >= floor_contact;
        if on_floor {
            if ball.vel.y > config.rest_speed {
                events.bounced_floor = true;
            }
            ball.pos.y = floor_contact;
            if ball.vel.y > 0.0 {
                ball.vel.y = -ball.vel.y * config.restitution;
            }
            ball.vel.x *= config.friction;
        }

        // Side walls
        if ball.pos.x - radius < court.left_wall() {
            ball.pos.x = court.left_wall() + radius;
            if ball.vel.x < 0.0 {
                ball.vel.x = -ball.vel.x * config.restitution;
                events.bounced_wall = true;
            }
        } else if ball.pos.x + radius > court.right_wall() {
            ball.pos.x = court.right_wall() - radius;
            if ball.vel.x > 0.0 {
                ball.vel.x = -ball.vel.x * config.restitution;
                events.bounced_wall = true;
            }
        }

        if on_floor && ball.vel.length() < config.rest_speed {
            ball.stop();
            events.settled = true;
            log::debug!("ball settled at x={:.1}", ball.pos.x);
        }
    }
}
