use crate::{Ball, Config, Events, GameMap, GameRng, Score, Side};
use hecs::World;

/// Side that scores if the ball has fully left the court, if any.
/// An edge exactly on the boundary is still in play.
pub fn goal_scorer(ball: &Ball, map: &GameMap) -> Option<Side> {
    let half = ball.half_size();
    if ball.pos.x + half < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x - half > map.width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Check if ball left the arena (scoring). Serves a fresh ball unless the
/// goal decided the match.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let Some(side) = goal_scorer(ball, map) else {
            continue;
        };

        score.increment(side);
        match side {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        log::debug!(
            "{:?} scored, score now {} - {}",
            side,
            score.left,
            score.right
        );

        if score.winner(config.win_score).is_none() {
            ball.serve(
                map.center(),
                config.ball_speed_start,
                config.serve_half_angle,
                config.serve_rule.direction(side),
                rng,
            );
        }
        scorer = Some(side);
    }

    scorer
}
