//! Game action definitions

/// Everything the player can ask for with a button
///
/// Keyboard: arrows or A/D move, P pauses, Escape quits.
/// Gamepad: d-pad or left stick moves, Start pauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Pause,
    Quit,
}
