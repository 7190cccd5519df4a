use macroquad::input::KeyCode;

use crate::grid::Direction;

/// What a key press asks the game to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Pause,
    Steer(Direction),
    ToggleMusic,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Pause => "Pause",
            Action::Steer(_) => "Steer",
            Action::ToggleMusic => "ToggleMusic",
        }
    }

    pub fn heading(self) -> Direction {
        match self {
            Action::Steer(dir) => dir,
            _ => Direction::None,
        }
    }
}

/// Key bindings. Anything not listed is ignored.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Space => Some(Action::Pause),
        KeyCode::Left => Some(Action::Steer(Direction::West)),
        KeyCode::Up => Some(Action::Steer(Direction::North)),
        KeyCode::Right => Some(Action::Steer(Direction::East)),
        KeyCode::Down => Some(Action::Steer(Direction::South)),
        KeyCode::M => Some(Action::ToggleMusic),
        _ => None,
    }
}

/// One-slot input queue: a newer action replaces an unconsumed older one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingAction(Option<Action>);

impl PendingAction {
    pub fn set(&mut self, action: Action) {
        self.0 = Some(action);
    }

    pub fn get(&self) -> Option<Action> {
        self.0
    }

    /// Remove the pending action if it matches `pred`.
    pub fn take_if(&mut self, pred: impl FnOnce(Action) -> bool) -> Option<Action> {
        match self.0 {
            Some(action) if pred(action) => self.0.take(),
            _ => None,
        }
    }
}
