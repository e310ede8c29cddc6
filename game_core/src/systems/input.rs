use hecs::World;

use crate::{AiControlled, Paddle, PaddleIntent, Side};

/// Sampled state of the four logical controls, read once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signed direction for a side; opposing keys cancel out
    pub fn dir(&self, side: Side) -> i8 {
        let (up, down) = match side {
            Side::Left => (self.p1_up, self.p1_down),
            Side::Right => (self.p2_up, self.p2_down),
        };
        down as i8 - up as i8
    }
}

/// Turn sampled key state into intents for every human-controlled paddle
pub fn ingest_inputs(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent, ai)) in
        world.query_mut::<(&Paddle, &mut PaddleIntent, Option<&AiControlled>)>()
    {
        if ai.is_some() {
            continue;
        }
        intent.dir = input.dir(paddle.side);
        intent.speed = paddle.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config};

    #[test]
    fn test_dir_mapping() {
        let input = InputState {
            p1_up: true,
            p2_down: true,
            ..InputState::new()
        };
        assert_eq!(input.dir(Side::Left), -1);
        assert_eq!(input.dir(Side::Right), 1);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let input = InputState {
            p1_up: true,
            p1_down: true,
            ..InputState::new()
        };
        assert_eq!(input.dir(Side::Left), 0);
    }

    #[test]
    fn test_ai_paddle_ignores_keyboard() {
        let config = Config::new();
        let mut world = World::new();
        let left = create_paddle(&mut world, &config, Side::Left);
        let right = create_paddle(&mut world, &config, Side::Right);
        world.insert_one(right, AiControlled).unwrap();

        let input = InputState {
            p1_down: true,
            p2_up: true,
            ..InputState::new()
        };
        ingest_inputs(&mut world, &input);

        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, 1);
        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, 0);
    }
}
