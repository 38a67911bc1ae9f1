//! Alien Invaders headless runner
//!
//! Plays one wave with a scripted pilot and reports the outcome. Useful for
//! checking tuning files and seeds without a renderer.
//!
//! Usage: `alien-invaders [seed] [tuning.json]`

use std::path::Path;

use anyhow::{Context, Result};

use alien_invaders::sim::Wave;
use alien_invaders::{AudioManager, Settings, Tuning, WaveInput};

/// Simulated frame rate
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after ten simulated minutes
const MAX_FRAMES: u32 = 60 * 60 * 10;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>().with_context(|| format!("invalid seed '{arg}'"))?,
        None => 42,
    };
    let tuning = match args.next() {
        Some(path) => load_tuning(Path::new(&path))?,
        None => Tuning::default(),
    };

    log::info!("Alien Invaders (headless) starting...");
    let mut wave = Wave::new(tuning, seed, AudioManager::new(Settings::default()));

    let mut frames = 0;
    let mut cues = 0;
    while !wave.finished() && frames < MAX_FRAMES {
        if wave.ship().is_none() {
            wave.respawn_ship();
        }
        let input = pilot(&wave);
        wave.update(&input, FRAME_DT);
        cues += wave.audio_mut().drain().len();
        frames += 1;
    }

    let outcome = match (wave.finished(), wave.won()) {
        (true, true) => "won",
        (true, false) => "lost",
        (false, _) => "unfinished",
    };
    log::info!("Played {} frames, {} sound cues", frames, cues);
    println!(
        "seed {seed}: {outcome} after {frames} frames, score {}, lives {}, aliens left {}",
        wave.score(),
        wave.lives(),
        wave.grid().live_count()
    );
    Ok(())
}

fn load_tuning(path: &Path) -> Result<Tuning> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    let tuning = Tuning::from_json(&json)
        .with_context(|| format!("loading tuning file {}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}

/// Steer under the lowest live alien and keep firing
fn pilot(wave: &Wave<AudioManager>) -> WaveInput {
    let Some(ship) = wave.ship() else {
        return WaveInput::default();
    };
    let target = wave
        .grid()
        .iter_live()
        .min_by(|(_, _, a), (_, _, b)| a.pos.y.total_cmp(&b.pos.y))
        .map(|(_, _, alien)| alien.pos.x);

    let mut input = WaveInput::fire();
    if let Some(x) = target {
        let dx = x - ship.pos.x;
        let dead_zone = wave.tuning().ship_movement;
        input.left = dx < -dead_zone;
        input.right = dx > dead_zone;
    }
    input
}
