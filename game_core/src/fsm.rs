//! Match State Machine
//!
//! Menu -> Playing -> GameOver, with explicit exits back to the menu.

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Start,
    PlayAgain,
    Finish,
    BackToMenu,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => {
                log::debug!("Rejected {:?} while in {:?}", action, from_state);
                TransitionResult {
                    success: false,
                    from_state,
                    to_state: from_state,
                    action,
                }
            }
        }
    }

    fn next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (MatchState::Menu, MatchAction::Start) => Some(MatchState::Playing),

            (MatchState::Playing, MatchAction::Finish) => Some(MatchState::GameOver),
            (MatchState::Playing, MatchAction::BackToMenu) => Some(MatchState::Menu),

            (MatchState::GameOver, MatchAction::PlayAgain) => Some(MatchState::Playing),
            (MatchState::GameOver, MatchAction::BackToMenu) => Some(MatchState::Menu),

            _ => None,
        }
    }

    /// Check if currently playing
    pub fn is_playing(&self) -> bool {
        self.state == MatchState::Playing
    }

    /// Check if in game over state
    pub fn is_game_over(&self) -> bool {
        self.state == MatchState::GameOver
    }
}
