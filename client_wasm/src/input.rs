//! Keyboard input handling
//!
//! Key events update a continuously sampled [`InputState`]; the session
//! reads it once per tick.

use game_core::InputState;

/// Handle key down event. Returns `true` if the key is a game control.
pub fn handle_key_down(input: &mut InputState, key: &str) -> bool {
    set_key(input, key, true)
}

/// Handle key up event. Returns `true` if the key is a game control.
pub fn handle_key_up(input: &mut InputState, key: &str) -> bool {
    set_key(input, key, false)
}

fn set_key(input: &mut InputState, key: &str, pressed: bool) -> bool {
    let slot = match key {
        "w" | "W" => &mut input.p1_up,
        "s" | "S" => &mut input.p1_down,
        "ArrowUp" => &mut input.p2_up,
        "ArrowDown" => &mut input.p2_down,
        _ => return false,
    };
    *slot = pressed;
    true
}

/// Escape leaves a running match
pub fn is_back_key(key: &str) -> bool {
    key == "Escape"
}

/// Extract key from keyboard event
#[cfg(target_arch = "wasm32")]
pub fn get_key_from_event(event: &web_sys::KeyboardEvent) -> String {
    event.key()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_one_keys() {
        let mut input = InputState::new();
        assert!(handle_key_down(&mut input, "w"));
        assert!(input.p1_up);
        assert!(handle_key_down(&mut input, "S"));
        assert!(input.p1_down);
        handle_key_up(&mut input, "W");
        assert!(!input.p1_up);
    }

    #[test]
    fn test_player_two_keys() {
        let mut input = InputState::new();
        handle_key_down(&mut input, "ArrowUp");
        handle_key_down(&mut input, "ArrowDown");
        assert!(input.p2_up && input.p2_down);
        handle_key_up(&mut input, "ArrowDown");
        assert!(!input.p2_down);
    }

    #[test]
    fn test_escape_is_back_not_a_paddle_control() {
        let mut input = InputState::new();
        assert!(is_back_key("Escape"));
        assert!(!is_back_key("Esc"));
        assert!(!handle_key_down(&mut input, "Escape"));
        assert_eq!(input, InputState::new());
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut input = InputState::new();
        assert!(!handle_key_down(&mut input, "a"));
        assert!(!handle_key_down(&mut input, "arrowup"));
        assert_eq!(input, InputState::new());
    }
}
