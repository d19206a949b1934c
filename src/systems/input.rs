use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Tracks the held state of the steering keys and maps app-level commands.
/// The physics system samples the held flags once per tick.
pub struct InputSystem {
    pub left_held: bool,
    pub right_held: bool,
}

/// Commands the input system can emit back to the app shell.
#[derive(Debug, Clone, Copy)]
pub enum InputCommand {
    Exit,
}

impl InputSystem {
    pub fn new() -> Self {
        Self {
            left_held: false,
            right_held: false,
        }
    }

    /// Folds a key transition into the held state. Repeats are harmless:
    /// they re-assert a state that is already set.
    pub fn handle_key(&mut self, keycode: KeyCode, state: ElementState) -> Option<InputCommand> {
        let held = state.is_pressed();
        match keycode {
            KeyCode::ArrowLeft | KeyCode::KeyA => {
                self.left_held = held;
                None
            }
            KeyCode::ArrowRight | KeyCode::KeyD => {
                self.right_held = held;
                None
            }
            KeyCode::Escape if held => Some(InputCommand::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_toggle_held_state() {
        let mut input = InputSystem::new();

        input.handle_key(KeyCode::ArrowLeft, ElementState::Pressed);
        assert!(input.left_held);
        assert!(!input.right_held);

        input.handle_key(KeyCode::KeyD, ElementState::Pressed);
        assert!(input.right_held);

        input.handle_key(KeyCode::ArrowLeft, ElementState::Released);
        assert!(!input.left_held);
        assert!(input.right_held);
    }

    #[test]
    fn wasd_and_arrows_share_flags() {
        let mut input = InputSystem::new();
        input.handle_key(KeyCode::KeyA, ElementState::Pressed);
        assert!(input.left_held);
        input.handle_key(KeyCode::ArrowLeft, ElementState::Released);
        assert!(!input.left_held);
    }

    #[test]
    fn escape_maps_to_exit() {
        let mut input = InputSystem::new();
        assert!(matches!(
            input.handle_key(KeyCode::Escape, ElementState::Pressed),
            Some(InputCommand::Exit)
        ));
        assert!(
            input
                .handle_key(KeyCode::Escape, ElementState::Released)
                .is_none()
        );
    }
}
