use hecs::World;

use crate::{AiControlled, AiProfile, Ball, Paddle, PaddleIntent};

/// Direction the AI paddle should move to chase the ball.
///
/// Deterministic: no movement inside the dead zone, otherwise one step toward
/// the ball's vertical position.
pub fn ai_direction(ball_y: f32, paddle_center_y: f32, profile: &AiProfile) -> i8 {
    let delta = ball_y - paddle_center_y;
    if delta.abs() <= profile.dead_zone {
        0
    } else if delta > 0.0 {
        1
    } else {
        -1
    }
}

/// Set intents for every AI-controlled paddle
pub fn drive_ai(world: &mut World, profile: &AiProfile) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };
    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, (paddle, intent, _ai)) in
        world.query_mut::<(&Paddle, &mut PaddleIntent, &AiControlled)>()
    {
        intent.dir = ai_direction(ball_y, paddle.center_y(), profile);
        intent.speed = profile.tracking_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEDIUM: AiProfile = AiProfile::new(3.6, 18.0);

    #[test]
    fn test_no_movement_inside_dead_zone() {
        assert_eq!(ai_direction(260.0, 250.0, &MEDIUM), 0);
        assert_eq!(ai_direction(232.0, 250.0, &MEDIUM), 0);
    }

    #[test]
    fn test_dead_zone_boundary_is_inclusive() {
        assert_eq!(ai_direction(268.0, 250.0, &MEDIUM), 0);
    }

    #[test]
    fn test_moves_toward_ball_outside_dead_zone() {
        assert_eq!(ai_direction(275.0, 250.0, &MEDIUM), 1);
        assert_eq!(ai_direction(225.0, 250.0, &MEDIUM), -1);
    }

    #[test]
    fn test_harder_profiles_react_sooner() {
        let easy = AiProfile::new(2.3, 32.0);
        let hard = AiProfile::new(5.2, 8.0);
        assert_eq!(ai_direction(270.0, 250.0, &easy), 0);
        assert_eq!(ai_direction(270.0, 250.0, &hard), 1);
    }
}
