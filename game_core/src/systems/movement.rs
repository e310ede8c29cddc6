use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.y += intent.dir as f32 * intent.speed;

        // Clamp every tick, even when idle, so bad geometry can't leak out
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Move ball based on velocity (one explicit Euler step per tick)
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    #[test]
    fn test_paddle_moves_by_speed() {
        let config = Config::new();
        let mut world = World::new();
        let paddle = create_paddle(&mut world, &config, Side::Left);
        let start_y = world.get::<&Paddle>(paddle).unwrap().y;
        world.get::<&mut PaddleIntent>(paddle).unwrap().dir = -1;
        world.get::<&mut PaddleIntent>(paddle).unwrap().speed = config.paddle_speed;

        move_paddles(&mut world, &config);

        let y = world.get::<&Paddle>(paddle).unwrap().y;
        assert_eq!(y, start_y - config.paddle_speed);
    }

    #[test]
    fn test_paddle_clamped_at_edges() {
        let config = Config::new();
        let mut world = World::new();
        let paddle = create_paddle(&mut world, &config, Side::Right);
        world.get::<&mut Paddle>(paddle).unwrap().y = 2.0;
        *world.get::<&mut PaddleIntent>(paddle).unwrap() = PaddleIntent { dir: -1, speed: 6.0 };

        move_paddles(&mut world, &config);
        assert_eq!(world.get::<&Paddle>(paddle).unwrap().y, 0.0);

        world.get::<&mut Paddle>(paddle).unwrap().y = config.arena_height;
        *world.get::<&mut PaddleIntent>(paddle).unwrap() = PaddleIntent::new();
        move_paddles(&mut world, &config);
        assert_eq!(
            world.get::<&Paddle>(paddle).unwrap().y,
            config.arena_height - config.paddle_height
        );
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let mut world = World::new();
        let ball = create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(4.0, -2.0), 14.0);

        move_ball(&mut world);

        assert_eq!(world.get::<&Ball>(ball).unwrap().pos, Vec2::new(104.0, 98.0));
    }
}
