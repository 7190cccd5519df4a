#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Eating,
    Dying,
    Music,
}

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Cue::Eating => "eating",
            Cue::Dying => "dying",
            Cue::Music => "music",
        }
    }
}

/// Fire-and-forget playback of the named cues. Nothing waits on completion.
pub trait AudioCues {
    fn play(&mut self, cue: Cue);
    fn pause(&mut self, cue: Cue);
}

/// A sink for games that run without sound.
#[derive(Default, Debug)]
pub struct Silent;

impl AudioCues for Silent {
    fn play(&mut self, _cue: Cue) {}
    fn pause(&mut self, _cue: Cue) {}
}

pub const SAMPLE_RATE: u32 = 44100;

/// One note of a synthesized cue: frequency in Hz (0 for a rest) and length in seconds.
#[derive(Copy, Clone, Debug)]
pub struct Note(pub f32, pub f32);

pub const GULP: &[Note] = &[Note(660.0, 0.04), Note(880.0, 0.06)];
pub const BOING: &[Note] = &[Note(220.0, 0.12), Note(165.0, 0.12), Note(110.0, 0.25)];
pub const TUNE: &[Note] = &[
    Note(262.0, 0.25),
    Note(330.0, 0.25),
    Note(392.0, 0.25),
    Note(330.0, 0.25),
    Note(294.0, 0.25),
    Note(349.0, 0.25),
    Note(440.0, 0.25),
    Note(0.0, 0.25),
];

/// Render a sequence of sine notes into a PCM16 mono WAV file.
pub fn synthesize_wav(notes: &[Note], volume: f32) -> Vec<u8> {
    let samples: Vec<i16> = notes
        .iter()
        .flat_map(|&Note(freq, secs)| sine_samples(freq, secs, volume))
        .collect();

    let block_align: u16 = 2; // mono 16-bit
    let byte_rate: u32 = SAMPLE_RATE * block_align as u32;
    let data_size: u32 = samples.len() as u32 * 2;
    let chunk_size: u32 = 36 + data_size;

    let mut data: Vec<u8> = Vec::with_capacity(samples.len() * 2 + 44);
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&chunk_size.to_le_bytes());
    data.extend_from_slice(b"WAVE");
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // channels
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());
    for s in samples {
        data.extend_from_slice(&s.to_le_bytes());
    }
    data
}

fn sine_samples(freq: f32, secs: f32, volume: f32) -> impl Iterator<Item = i16> {
    let count = (secs * SAMPLE_RATE as f32) as u32;
    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    (0..count).map(move |n| {
        let t = n as f32 / SAMPLE_RATE as f32;
        // short linear fade at both ends keeps note boundaries from clicking
        let edge = (n.min(count - n) as f32 / 200.0).min(1.0);
        (amplitude * edge * (std::f32::consts::TAU * freq * t).sin() * i16::MAX as f32) as i16
    })
}
