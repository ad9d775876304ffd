use std::time::{Duration, Instant};

use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};
use tracing::trace;

use crate::error::Error;

const TONE_HZ: f32 = 440.0;
const VOLUME: f32 = 0.1;
const BEEP_LENGTH: Duration = Duration::from_millis(120);

struct SquareWave {
    phase_inc: f32,
    phase: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase < 0.5 { VOLUME } else { -VOLUME };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Beeper
/// Plays a short square-wave tone for each beep the interpreter reports.
///
/// The device is paused between beeps; `update` has to be called regularly
/// so a beep stops once `BEEP_LENGTH` has passed.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
    playing_until: Option<Instant>,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, Error> {
        let audio_subsystem = sdl.audio().map_err(Error::Audio)?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio_subsystem
            .open_playback(None, &desired, |spec| SquareWave {
                phase_inc: TONE_HZ / spec.freq as f32,
                phase: 0.0,
            })
            .map_err(Error::Audio)?;

        Ok(Beeper {
            device,
            playing_until: None,
        })
    }

    pub fn beep(&mut self) {
        trace!("beep");
        self.device.resume();
        self.playing_until = Some(Instant::now() + BEEP_LENGTH);
    }

    /// Silences the tone once the current beep has run its course.
    pub fn update(&mut self) {
        if let Some(until) = self.playing_until {
            if Instant::now() >= until {
                self.device.pause();
                self.playing_until = None;
            }
        }
    }
}
