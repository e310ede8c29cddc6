use crate::{Aabb, Ball, Config, Events, GameMap, Paddle, Side};
use glam::Vec2;
use hecs::World;

/// Reflect the ball off the top or bottom wall, clamping it back inside
pub fn bounce_off_walls(ball: &mut Ball, map: &GameMap) -> bool {
    let half = ball.half_size();
    if ball.pos.y - half <= 0.0 {
        ball.pos.y = half;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + half >= map.height {
        ball.pos.y = map.height - half;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Resolve a ball/paddle hit. Returns `true` when the ball bounced.
///
/// The ball is pushed flush against the paddle face opposite its travel
/// direction, reflected horizontally, deflected by the hit offset, sped up
/// (capped) along the new angle, and finally given a minimum horizontal speed.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    if !Aabb::of_ball(ball).overlaps(&Aabb::of_paddle(paddle)) {
        return false;
    }

    // Push ball out to avoid sticking
    let half = ball.half_size();
    if ball.vel.x < 0.0 {
        ball.pos.x = paddle.x + paddle.width + half;
    } else {
        ball.pos.x = paddle.x - half;
    }

    // -1 (top edge) .. 1 (bottom edge)
    let half_height = paddle.height / 2.0;
    let offset = ((ball.pos.y - paddle.center_y()) / half_height).clamp(-1.0, 1.0);

    ball.vel.x = -ball.vel.x;
    ball.vel.y += offset * config.deflection;

    // Speed up along the post-bounce angle
    let speed = (ball.vel.length() + config.ball_speed_boost).min(config.max_ball_speed);
    let direction_x = ball.vel.x.signum();
    let angle = ball.vel.y.atan2(ball.vel.x);
    ball.vel = Vec2::new(angle.cos() * speed, angle.sin() * speed);

    if ball.vel.x.abs() < config.min_horizontal_speed {
        ball.vel.x = config.min_horizontal_speed * direction_x;

        // The floor must not push the magnitude past the cap
        let max_vy = (config.max_ball_speed.powi(2) - ball.vel.x.powi(2))
            .max(0.0)
            .sqrt();
        if ball.vel.y.abs() > max_vy {
            ball.vel.y = max_vy.copysign(ball.vel.y);
        }
    }

    true
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // Left paddle first, then right; both are always tested
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();
    paddles.sort_by_key(|p| p.side == Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, map) {
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if bounce_off_paddle(ball, paddle, config) {
                events.ball_hit_paddle = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Ball, Config, Events, GameMap};

    fn setup_world() -> (hecs::World, Config, GameMap, Events) {
        let world = hecs::World::new();
        let config = Config::new();
        let map = GameMap::new(&config);
        let events = Events::new();
        (world, config, map, events)
    }

    fn paddle_at(config: &Config, side: Side) -> Paddle {
        Paddle::new(
            side,
            config.paddle_x(side),
            config.center_paddle_y(),
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
        )
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, map, mut events) = setup_world();
        let ball_vel = Vec2::new(4.0, -3.0);
        create_ball(&mut world, Vec2::new(400.0, 5.0), ball_vel, config.ball_size);

        check_collisions(&mut world, &map, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert!(ball.vel.y > 0.0, "Ball should bounce down after hitting top wall");
            assert_eq!(ball.vel.x, ball_vel.x, "X velocity should be unchanged");
            assert_eq!(ball.pos.y, config.ball_size / 2.0, "Ball clamped to wall");
        }
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(400.0, map.height - 2.0),
            Vec2::new(4.0, 3.0),
            config.ball_size,
        );

        check_collisions(&mut world, &map, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert!(ball.vel.y < 0.0, "Ball should bounce up after hitting bottom wall");
            assert_eq!(ball.pos.y, map.height - config.ball_size / 2.0);
        }
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let config = Config::new();
        let paddle = paddle_at(&config, Side::Left);
        let mut ball = Ball::new(
            Vec2::new(paddle.x + paddle.width, paddle.center_y()),
            Vec2::new(-5.0, 0.0),
            config.ball_size,
        );

        assert!(bounce_off_paddle(&mut ball, &paddle, &config));

        assert!(ball.vel.x > 0.0, "Ball should bounce right after hitting left paddle");
        assert_eq!(
            ball.pos.x,
            paddle.x + paddle.width + config.ball_size / 2.0,
            "Ball should sit flush against the paddle face"
        );
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let config = Config::new();
        let paddle = paddle_at(&config, Side::Right);
        let mut ball = Ball::new(
            Vec2::new(paddle.x, paddle.center_y()),
            Vec2::new(5.0, 0.0),
            config.ball_size,
        );

        assert!(bounce_off_paddle(&mut ball, &paddle, &config));

        assert!(ball.vel.x < 0.0, "Ball should bounce left after hitting right paddle");
        assert_eq!(ball.pos.x, paddle.x - config.ball_size / 2.0);
    }

    #[test]
    fn test_ball_speed_increases_on_paddle_hit() {
        let config = Config::new();
        let paddle = paddle_at(&config, Side::Left);
        let mut ball = Ball::new(
            Vec2::new(paddle.x + paddle.width, paddle.center_y()),
            Vec2::new(-5.0, 0.0),
            config.ball_size,
        );

        bounce_off_paddle(&mut ball, &paddle, &config);

        let expected = 5.0 + config.ball_speed_boost;
        assert!(
            (ball.vel.length() - expected).abs() < 1e-4,
            "Ball speed should grow by the boost, got {}",
            ball.vel.length()
        );
    }

    #[test]
    fn test_ball_speed_caps_at_max() {
        let config = Config::new();
        let paddle = paddle_at(&config, Side::Left);
        let mut ball = Ball::new(
            Vec2::new(paddle.x + paddle.width, paddle.center_y()),
            Vec2::new(-(config.max_ball_speed - 0.1), 0.0),
            config.ball_size,
        );

        bounce_off_paddle(&mut ball, &paddle, &config);

        assert!(ball.vel.length() <= config.max_ball_speed + 1e-4);
    }

    #[test]
    fn test_ball_trajectory_affected_by_hit_position() {
        let config = Config::new();
        let paddle = paddle_at(&config, Side::Left);

        let mut top = Ball::new(
            Vec2::new(paddle.x + paddle.width, paddle.y + 2.0),
            Vec2::new(-5.0, 0.0),
            config.ball_size,
        );
        bounce_off_paddle(&mut top, &paddle, &config);
        assert!(top.vel.y < 0.0, "Top hits should deflect upward");

        let mut bottom = Ball::new(
            Vec2::new(paddle.x + paddle.width, paddle.y + paddle.height - 2.0),
            Vec2::new(-5.0, 0.0),
            config.ball_size,
        );
        bounce_off_paddle(&mut bottom, &paddle, &config);
        assert!(bottom.vel.y > 0.0, "Bottom hits should deflect downward");
    }

    #[test]
    fn test_steep_hit_keeps_horizontal_floor() {
        let config = Config::new();
        let paddle = paddle_at(&config, Side::Left);
        let mut ball = Ball::new(
            Vec2::new(paddle.x + paddle.width, paddle.y + paddle.height),
            Vec2::new(-0.5, 10.5),
            config.ball_size,
        );

        bounce_off_paddle(&mut ball, &paddle, &config);

        assert_eq!(ball.vel.x, config.min_horizontal_speed);
        assert!(ball.vel.length() <= config.max_ball_speed + 1e-4);
    }

    #[test]
    fn test_no_collision_when_apart() {
        let config = Config::new();
        let paddle = paddle_at(&config, Side::Left);
        let original = Ball::new(Vec2::new(400.0, 250.0), Vec2::new(-5.0, 1.0), config.ball_size);
        let mut ball = original;

        assert!(!bounce_off_paddle(&mut ball, &paddle, &config));
        assert_eq!(ball, original);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left);

        check_collisions(&mut world, &map, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_paddle_hit_through_world() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);
        let x = config.paddle_x(Side::Left) + config.paddle_width;
        create_ball(&mut world, Vec2::new(x, 250.0), Vec2::new(-5.0, 0.0), config.ball_size);

        check_collisions(&mut world, &map, &config, &mut events);

        assert!(events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
