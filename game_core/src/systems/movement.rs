use crate::{Ball, Config};
use hecs::World;

/// Apply gravity, then advance position by velocity (explicit Euler, one fixed step)
pub fn integrate_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.in_motion {
            continue;
        }
        ball.vel.y += config.gravity;
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_gravity_added_before_position_update() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_ball(&mut world, Vec2::new(100.0, 100.0));
        world
            .get::<&mut Ball>(entity)
            .unwrap()
            .launch(Vec2::new(2.0, -10.0));

        integrate_ball(&mut world, &config);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.vel, Vec2::new(2.0, -10.0 + config.gravity));
        assert_eq!(ball.pos, Vec2::new(102.0, 100.0 - 10.0 + config.gravity));
    }

    #[test]
    fn test_ball_at_rest_does_not_fall() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_ball(&mut world, config.ball_origin);

        for _ in 0..10 {
            integrate_ball(&mut world, &config);
        }

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, config.ball_origin);
        assert_eq!(ball.vel, Vec2::ZERO);
    }
}
