//! macroquad-backed drawing surface and sound cues.

use log::error;
use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound, stop_sound};
use macroquad::color::{BLACK, Color};
use macroquad::shapes::{draw_circle, draw_circle_lines, draw_rectangle, draw_rectangle_lines};
use macroquad::window::clear_background;

use crate::audio::{self, AudioCues, Cue, Note};
use crate::error::{Result, SnakeError};
use crate::grid::Position;
use crate::render::{CellGeometry, RenderContext};

/// Draws straight to the macroquad window. The status line is kept for the
/// caller to place on screen.
pub struct ScreenSurface {
    geometry: CellGeometry,
    status: String,
}

impl ScreenSurface {
    pub fn new(geometry: CellGeometry) -> Self {
        Self {
            geometry,
            status: String::new(),
        }
    }

    /// Follow window resizes.
    pub fn set_geometry(&mut self, geometry: CellGeometry) {
        self.geometry = geometry;
    }

    pub fn status_line(&self) -> &str {
        &self.status
    }
}

impl RenderContext for ScreenSurface {
    fn clear(&mut self) {
        clear_background(BLACK);
    }

    fn draw_rect(&mut self, cell: Position, line_width: f32, fill: Option<Color>, stroke: Option<Color>) {
        let r = self.geometry.cell_rect(cell);
        if let Some(fill) = fill {
            draw_rectangle(r.x, r.y, r.w, r.h, fill);
        }
        if let Some(stroke) = stroke {
            draw_rectangle_lines(r.x, r.y, r.w, r.h, line_width, stroke);
        }
    }

    fn draw_circle(&mut self, cell: Position, line_width: f32, fill: Option<Color>, stroke: Option<Color>) {
        let (cx, cy, radius) = self.geometry.cell_circle(cell);
        if let Some(fill) = fill {
            draw_circle(cx, cy, radius, fill);
        }
        if let Some(stroke) = stroke {
            draw_circle_lines(cx, cy, radius, line_width, stroke);
        }
    }

    fn status(&mut self, line: &str) {
        self.status.clear();
        self.status.push_str(line);
    }
}

/// Synthesized tones played through the macroquad mixer.
pub struct SoundCues {
    eating: Sound,
    dying: Sound,
    music: Sound,
    volume: f32,
    music_volume: f32,
    music_playing: bool,
}

impl SoundCues {
    pub async fn load(volume: f32, music_volume: f32) -> Result<Self> {
        Ok(Self {
            eating: load_cue(Cue::Eating, audio::GULP).await?,
            dying: load_cue(Cue::Dying, audio::BOING).await?,
            music: load_cue(Cue::Music, audio::TUNE).await?,
            volume: volume.clamp(0.0, 1.0),
            music_volume: music_volume.clamp(0.0, 1.0),
            music_playing: false,
        })
    }
}

async fn load_cue(cue: Cue, notes: &[Note]) -> Result<Sound> {
    let bytes = audio::synthesize_wav(notes, 0.7);
    load_sound_from_bytes(&bytes)
        .await
        .map_err(|e| SnakeError::Audio {
            cue: cue.name(),
            reason: format!("{e:?}"),
        })
}

impl AudioCues for SoundCues {
    fn play(&mut self, cue: Cue) {
        match cue {
            Cue::Eating => play_sound(&self.eating, PlaySoundParams { looped: false, volume: 0.35 * self.volume }),
            Cue::Dying => play_sound(&self.dying, PlaySoundParams { looped: false, volume: 0.6 * self.volume }),
            Cue::Music => {
                // restarting a looped sound would layer a second copy on top
                if !self.music_playing {
                    play_sound(&self.music, PlaySoundParams { looped: true, volume: self.music_volume });
                    self.music_playing = true;
                }
            }
        }
    }

    fn pause(&mut self, cue: Cue) {
        match cue {
            Cue::Eating => stop_sound(&self.eating),
            Cue::Dying => stop_sound(&self.dying),
            Cue::Music => {
                stop_sound(&self.music);
                self.music_playing = false;
            }
        }
    }
}

/// Sound cues, or silence when they failed to load.
pub enum HostAudio {
    Sound(SoundCues),
    Muted(audio::Silent),
}

impl HostAudio {
    pub async fn load(volume: f32, music_volume: f32) -> Self {
        match SoundCues::load(volume, music_volume).await {
            Ok(cues) => HostAudio::Sound(cues),
            Err(e) => {
                error!("{e}; continuing without sound");
                HostAudio::Muted(audio::Silent)
            }
        }
    }
}

impl AudioCues for HostAudio {
    fn play(&mut self, cue: Cue) {
        match self {
            HostAudio::Sound(cues) => cues.play(cue),
            HostAudio::Muted(silent) => silent.play(cue),
        }
    }

    fn pause(&mut self, cue: Cue) {
        match self {
            HostAudio::Sound(cues) => cues.pause(cue),
            HostAudio::Muted(silent) => silent.pause(cue),
        }
    }
}
