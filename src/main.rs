use std::fs::File;
use std::path::Path;

use log::{error, info, warn};
use macroquad::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

use snake_board::config::{SAVE_FILE, SETTINGS_FILE, SaveData, Settings};
use snake_board::host::{HostAudio, ScreenSurface};
use snake_board::render::CellGeometry;
use snake_board::timer::TickTimer;
use snake_board::{Board, GameLoop, GameState};

const LOG_FILE: &str = "snake_board.log";
const STATUS_BAND: f32 = 36.0;
const STATUS_TEXT: Color = Color::new(0.25, 0.9, 0.25, 1.0);
const HINT_TEXT: Color = Color::new(0.5, 0.5, 0.5, 1.0);

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake Board".to_owned(),
        window_width: 600,
        window_height: 636,
        high_dpi: true,
        ..Default::default()
    }
}

fn init_logging() {
    match File::create(LOG_FILE) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Info, Config::default(), file) {
                eprintln!("logger already initialised: {e}");
            }
        }
        Err(e) => eprintln!("cannot create {LOG_FILE}: {e}"),
    }
}

fn load_settings() -> Settings {
    if !Path::new(SETTINGS_FILE).exists() {
        return Settings::default();
    }
    Settings::load(SETTINGS_FILE).unwrap_or_else(|e| {
        warn!("{e}; using default settings");
        Settings::default()
    })
}

fn board_geometry(board: &Board) -> CellGeometry {
    CellGeometry::fit(board, screen_width(), screen_height() - STATUS_BAND)
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    info!("starting snake_board");

    let settings = load_settings();
    let mut save = SaveData::load(SAVE_FILE).unwrap_or_else(|e| {
        warn!("{e}; starting without a saved record");
        SaveData::default()
    });

    let mut audio = HostAudio::load(settings.cue_volume, settings.music_volume).await;
    let mut game = match GameLoop::new(&settings, &mut audio) {
        Ok(game) => game,
        Err(e) => {
            error!("{e}");
            return;
        }
    };
    let mut surface = ScreenSurface::new(board_geometry(game.board()));
    let mut timer = TickTimer::new(settings.tick_period_ms);
    let mut recorded = false;

    loop {
        if is_key_pressed(KeyCode::Q) {
            break;
        }
        if let Some(key) = get_last_key_pressed() {
            game.on_key(key);
        }

        surface.set_geometry(board_geometry(game.board()));
        let due = timer.advance(get_frame_time() as f64);
        for _ in 0..due {
            game.on_tick(&mut surface, &mut audio);
        }
        if due == 0 {
            game.render(&mut surface);
        }

        if game.state() == GameState::Dead {
            if !recorded {
                recorded = true;
                if save.record(game.snake().len()) {
                    info!("new best length {}", save.best_length);
                    if let Err(e) = save.write(SAVE_FILE) {
                        warn!("{e}");
                    }
                }
            }
        } else {
            recorded = false;
        }

        let y = screen_height() - STATUS_BAND + 22.0;
        draw_text(surface.status_line(), 8.0, y, 22.0, STATUS_TEXT);
        let best = format!("Best: {}", save.best_length);
        let m = measure_text(&best, None, 22, 1.0);
        draw_text(&best, screen_width() - m.width - 8.0, y, 22.0, STATUS_TEXT);
        if game.state() == GameState::Idle {
            let hint = "Space: start/pause  Arrows: steer  M: music  Q: quit";
            let m = measure_text(hint, None, 18, 1.0);
            draw_text(hint, (screen_width() - m.width) * 0.5, screen_height() * 0.3, 18.0, HINT_TEXT);
        }

        next_frame().await;
    }
    info!("quit");
}
