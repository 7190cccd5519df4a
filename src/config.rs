use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnakeError};
use crate::grid::Board;

pub const SETTINGS_FILE: &str = "snake_board.json";
pub const SAVE_FILE: &str = "snake_save.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board_width: i32,
    pub board_height: i32,
    /// Ticks between updates for a short snake. Lower is faster.
    pub start_speed: u64,
    pub tick_period_ms: u64,
    pub initial_length: usize,
    pub music: bool,
    pub music_volume: f32,
    pub cue_volume: f32,
    /// Append tick and input details to the status line.
    pub debug: bool,
    /// Fixed seed for food placement; random when absent.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: 25,
            board_height: 25,
            start_speed: 20,
            tick_period_ms: 10,
            initial_length: 5,
            music: true,
            music_volume: 0.2,
            cue_volume: 1.0,
            debug: false,
            seed: None,
        }
    }
}

impl Settings {
    pub fn board(&self) -> Board {
        Board::new(self.board_width, self.board_height)
    }

    pub fn validate(&self) -> Result<()> {
        if self.board_width < 3 || self.board_height < 3 {
            return Err(SnakeError::Invalid(format!(
                "board {}x{} has no interior",
                self.board_width, self.board_height
            )));
        }
        if self.start_speed == 0 {
            return Err(SnakeError::Invalid("start_speed must be at least 1".into()));
        }
        if self.tick_period_ms == 0 {
            return Err(SnakeError::Invalid("tick_period_ms must be at least 1".into()));
        }
        // the body trails south from the center and must start inside the walls
        let head_y = self.board_height / 2;
        let room = (self.board_height - 1 - head_y).max(0) as usize;
        if self.initial_length == 0 || self.initial_length > room {
            return Err(SnakeError::Invalid(format!(
                "initial_length must be between 1 and {room}"
            )));
        }
        let interior = ((self.board_width - 2) * (self.board_height - 2)) as usize;
        if interior <= self.initial_length {
            return Err(SnakeError::Invalid(format!(
                "a {}x{} board leaves no free cell for food",
                self.board_width, self.board_height
            )));
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let settings: Settings = read_json(path.as_ref())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json(path.as_ref(), self)
    }
}

/// Progress kept between runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub best_length: usize,
}

impl SaveData {
    /// A missing save file is a fresh start, not an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        read_json(path)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json(path.as_ref(), self)
    }

    /// Record `length` if it beats the best so far.
    pub fn record(&mut self, length: usize) -> bool {
        if length > self.best_length {
            self.best_length = length;
            true
        } else {
            false
        }
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| SnakeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SnakeError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|source| SnakeError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(|source| SnakeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("snake_board_{}_{name}", std::process::id()))
    }

    #[test]
    fn partial_settings_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "board_width": 31, "debug": true }"#).unwrap();
        assert_eq!(settings.board_width, 31);
        assert!(settings.debug);
        assert_eq!(settings.board_height, 25);
        assert_eq!(settings.start_speed, 20);
        assert_eq!(settings.seed, None);
        settings.validate().unwrap();
    }

    #[test]
    fn rejects_unplayable_settings() {
        let tiny = Settings { board_width: 2, ..Settings::default() };
        assert!(matches!(tiny.validate(), Err(SnakeError::Invalid(_))));

        let stalled = Settings { start_speed: 0, ..Settings::default() };
        assert!(stalled.validate().is_err());

        let long = Settings { initial_length: 13, ..Settings::default() };
        assert!(long.validate().is_err());
        let fits = Settings { initial_length: 12, ..Settings::default() };
        assert!(fits.validate().is_ok());

        // the only interior cell is taken by the snake
        let crowded = Settings { board_width: 3, board_height: 3, initial_length: 1, ..Settings::default() };
        assert!(matches!(crowded.validate(), Err(SnakeError::Invalid(_))));
        let roomy = Settings { board_width: 4, board_height: 4, initial_length: 1, ..Settings::default() };
        assert!(roomy.validate().is_ok());
    }

    #[test]
    fn settings_file_round_trip() {
        let path = temp_path("settings.json");
        let settings = Settings { seed: Some(99), music: false, ..Settings::default() };
        settings.write(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn malformed_settings_report_json_error() {
        let path = temp_path("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Settings::load(&path), Err(SnakeError::Json { .. })));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_save_is_default() {
        let path = temp_path("absent_save.json");
        assert_eq!(SaveData::load(&path).unwrap(), SaveData::default());
    }

    #[test]
    fn record_keeps_the_best() {
        let mut save = SaveData::default();
        assert!(save.record(7));
        assert!(!save.record(6));
        assert!(save.record(9));
        assert_eq!(save.best_length, 9);
    }
}
