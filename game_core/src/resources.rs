use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Player 1
    pub right: u8, // Computer or Player 2
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Winner once either side has reached `win_score`; the higher score takes it
    pub fn winner(&self, win_score: u8) -> Option<Side> {
        if self.left < win_score && self.right < win_score {
            None
        } else if self.left > self.right {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn coin_flip(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score, Score { left: 2, right: 1 });
    }

    #[test]
    fn test_score_winner_at_threshold() {
        let score = Score { left: 10, right: 7 };
        assert_eq!(score.winner(10), Some(Side::Left));

        let score = Score { left: 4, right: 10 };
        assert_eq!(score.winner(10), Some(Side::Right));
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let score = Score { left: 9, right: 9 };
        assert_eq!(score.winner(10), None, "No winner below threshold");
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { left: 6, right: 3 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            left_scored: true,
            right_scored: true,
            ball_hit_paddle: true,
            ball_hit_wall: true,
        };
        events.clear();
        assert_eq!(events, Events::new());
        assert!(!events.scored());
    }
}
