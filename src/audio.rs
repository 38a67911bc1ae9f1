//! Sound cues
//!
//! The simulation never talks to an audio device. It fires cues at an
//! [`AudioSink`]; the host decides how (and whether) to play them.

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ship fires a bolt
    PlayerFire,
    /// An alien fires a bolt
    AlienFire,
    /// Player bolt destroys an alien
    AlienDestroyed,
    /// Alien bolt destroys the ship
    ShipDestroyed,
}

/// Fire-and-forget sound trigger
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every cue (tests, headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// A queued cue with the volume it should play at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundCue {
    pub effect: SoundEffect,
    pub volume: f32,
}

/// Audio manager for the game
///
/// Applies the player's volume settings and buffers cues until the host
/// drains them once per frame.
#[derive(Debug, Clone, Default)]
pub struct AudioManager {
    settings: Settings,
    queue: Vec<SoundCue>,
}

impl AudioManager {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            queue: Vec::new(),
        }
    }

    /// Replace the volume settings (takes effect on the next cue)
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
    }

    /// Cues waiting to be played, oldest first
    pub fn pending(&self) -> &[SoundCue] {
        &self.queue
    }

    /// Take all queued cues
    pub fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.queue)
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let volume = self.settings.effective_volume();
        if volume <= 0.0 {
            return;
        }
        log::trace!("cue {:?} at {:.2}", effect, volume);
        self.queue.push(SoundCue { effect, volume });
    }
}

impl<A: AudioSink + ?Sized> AudioSink for &mut A {
    fn play(&mut self, effect: SoundEffect) {
        (**self).play(effect);
    }
}

/// Recording sink for tests: keeps every effect in order
impl AudioSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}
