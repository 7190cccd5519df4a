use log::{debug, info};
use macroquad::input::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::audio::{AudioCues, Cue};
use crate::config::Settings;
use crate::error::Result;
use crate::food::{Food, place_food};
use crate::grid::{Board, Direction};
use crate::input::{Action, PendingAction, action_for_key};
use crate::render::{self, RenderContext};
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Freshly reset, waiting for the first unpause.
    Idle,
    Running,
    Paused,
    Dead,
}

/// Number of ticks between updates for a snake of `length`.
///
/// Past ten segments every four more take a tick off, up to ten ticks,
/// and never below one.
pub fn game_speed(start_speed: u64, length: usize) -> u64 {
    let raw = ((length as f64 - 10.0) / 4.0).clamp(0.0, 10.0);
    let speed = (start_speed as f64 - raw).floor();
    if speed < 1.0 { 1 } else { speed as u64 }
}

pub struct GameLoop {
    board: Board,
    snake: Snake,
    food: Food,
    start_speed: u64,
    game_speed: u64,
    ticks: u64,
    /// Cleared when the snake dies; no further updates are scheduled.
    next_update: Option<u64>,
    paused: bool,
    pending: PendingAction,
    initial_length: usize,
    music: bool,
    debug: bool,
    rng: StdRng,
}

impl GameLoop {
    /// A new game waiting in the Idle state. Fails on settings that do not validate.
    pub fn new(settings: &Settings, audio: &mut impl AudioCues) -> Result<Self> {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(settings, rng, audio)
    }

    pub fn with_rng(settings: &Settings, rng: StdRng, audio: &mut impl AudioCues) -> Result<Self> {
        settings.validate()?;
        let board = settings.board();
        // snake and food are placeholders until reset builds the real ones
        let mut game = Self {
            board,
            snake: Snake::from_segments(Vec::new(), Direction::North),
            food: Food::new(board.center()),
            start_speed: settings.start_speed,
            game_speed: settings.start_speed,
            ticks: 0,
            next_update: None,
            paused: true,
            pending: PendingAction::default(),
            initial_length: settings.initial_length,
            music: settings.music,
            debug: settings.debug,
            rng,
        };
        game.reset(audio);
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Replace the snake, e.g. to set up a position in a test or a demo.
    pub fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn set_food(&mut self, food: Food) {
        self.food = food;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn next_update(&self) -> Option<u64> {
        self.next_update
    }

    pub fn game_speed(&self) -> u64 {
        self.game_speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pending(&self) -> Option<Action> {
        self.pending.get()
    }

    pub fn state(&self) -> GameState {
        if self.snake.is_dead() {
            GameState::Dead
        } else if self.paused && self.ticks == 0 {
            GameState::Idle
        } else if self.paused {
            GameState::Paused
        } else {
            GameState::Running
        }
    }

    /// Fresh snake, food and counters. Leaves the paused flag alone.
    pub fn reset(&mut self, audio: &mut impl AudioCues) {
        self.game_speed = self.start_speed;
        self.ticks = 0;
        self.next_update = Some(self.game_speed);
        self.snake = Snake::new(self.board.center(), self.initial_length, self.music);
        if self.snake.music_on() {
            audio.play(Cue::Music);
        }
        self.food = place_food(&self.board, &self.snake, &mut self.rng);
        info!(
            "new game on {}x{} board, start speed {}",
            self.board.width, self.board.height, self.start_speed
        );
    }

    /// Reset and start running straight away.
    pub fn restart(&mut self, audio: &mut impl AudioCues) {
        self.reset(audio);
        self.paused = false;
    }

    /// Queue an action for the next tick, replacing any that is still pending.
    pub fn on_input(&mut self, action: Action) {
        self.pending.set(action);
    }

    pub fn on_key(&mut self, key: KeyCode) {
        if let Some(action) = action_for_key(key) {
            self.on_input(action);
        }
    }

    /// One host timer tick: handle pause and music, maybe update, always render.
    pub fn on_tick(&mut self, ctx: &mut impl RenderContext, audio: &mut impl AudioCues) {
        self.handle_pause(audio);
        self.handle_toggle_music(audio);

        if !self.paused && !self.snake.is_dead() {
            self.ticks += 1;
            if self.next_update.is_some_and(|tick| self.ticks >= tick) {
                self.update(audio);
            }
        }
        self.render(ctx);
    }

    fn handle_pause(&mut self, audio: &mut impl AudioCues) {
        if self.pending.take_if(|a| a == Action::Pause).is_none() {
            return;
        }
        if self.paused {
            if self.next_update.is_none() {
                self.reset(audio);
            }
            self.paused = false;
        } else {
            self.paused = true;
        }
        debug!("paused: {}", self.paused);
    }

    fn handle_toggle_music(&mut self, audio: &mut impl AudioCues) {
        if self.pending.take_if(|a| a == Action::ToggleMusic).is_some() {
            self.snake.toggle_music(audio);
        }
    }

    fn update(&mut self, audio: &mut impl AudioCues) {
        let speed = game_speed(self.start_speed, self.snake.len());
        if speed != self.game_speed {
            debug!("game speed {} -> {}", self.game_speed, speed);
            self.game_speed = speed;
        }
        self.next_update = Some(self.ticks + self.game_speed);

        if let Some(Action::Steer(heading)) = self.pending.take_if(|a| matches!(a, Action::Steer(_))) {
            self.snake.change_direction(heading);
        }

        if self.snake.head() == Some(self.food.position) {
            self.snake.feed(audio);
            self.food = place_food(&self.board, &self.snake, &mut self.rng);
        }
        self.snake.advance(self.snake.is_eating());

        if self
            .snake
            .check_collision(0, 0, self.board.width - 1, self.board.height - 1)
        {
            self.next_update = None;
            self.snake.kill(audio);
            self.paused = true;
        }
    }

    pub fn render(&self, ctx: &mut impl RenderContext) {
        ctx.clear();
        ctx.status(&self.status_message());
        render::render_board(&self.board, ctx);
        self.food.render(ctx);
        self.snake.render(ctx);
    }

    pub fn status_message(&self) -> String {
        let mut msg = format!("Length = {}", self.snake.len());
        if self.snake.is_dead() {
            msg.push_str(" (GAME OVER)");
        } else if self.paused {
            msg.push_str(" (PAUSED)");
        }
        if self.debug {
            let next = self
                .next_update
                .map_or_else(|| "-".to_string(), |tick| tick.to_string());
            let (action, heading) = match self.pending.get() {
                Some(action) => (action.name(), action.heading()),
                None => ("None", Direction::None),
            };
            msg.push_str(&format!(
                " :: Ticks ({}) :: Next Update ({}) :: {} :: {}",
                self.ticks,
                next,
                action,
                heading.name()
            ));
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_starts_at_start_speed() {
        for len in 0..=10 {
            assert_eq!(game_speed(20, len), 20);
        }
        assert_eq!(game_speed(20, 14), 19);
        assert_eq!(game_speed(20, 15), 18);
    }

    #[test]
    fn speed_is_monotone_and_clamped() {
        let mut last = game_speed(20, 1);
        for len in 1..200 {
            let speed = game_speed(20, len);
            assert!(speed <= last);
            assert!((1..=20).contains(&speed));
            last = speed;
        }
        assert_eq!(game_speed(20, 50), 10);
        assert_eq!(game_speed(20, 500), 10);
        assert_eq!(game_speed(5, 500), 1);
        assert_eq!(game_speed(1, 5), 1);
    }
}
