//! Inovation headless driver
//!
//! Plays one scripted run through every screen against a logging audio sink
//! and a recording renderer.
//!
//! Usage: `inovation [LEVEL] [SETTINGS_JSON]`

use std::path::Path;
use std::process::ExitCode;

use inovation::audio::{LogSink, MusicDeck};
use inovation::consts::FRAME_RATE;
use inovation::field::TileGrid;
use inovation::game::{EndingPhase, GameController, ScreenKind};
use inovation::input::{InputState, Key};
use inovation::render::RecordingRenderer;
use inovation::settings::Settings;

/// Start point with a row of items to its right, over a floor
const DEMO_LEVEL: &str = "\
B         B
B@ c a  P B
BBBBBBBBBBB
";

/// Give up after ten minutes of game time
const MAX_FRAMES: u64 = 10 * 60 * FRAME_RATE as u64;

/// Keys a player racing to the end would hold on `kind`
fn scripted_keys(kind: ScreenKind, frame: u64) -> &'static [Key] {
    match kind {
        ScreenKind::Opening | ScreenKind::Ending(EndingPhase::StaffRoll) => &[Key::Space],
        ScreenKind::Playing => &[Key::Right],
        ScreenKind::Title | ScreenKind::Ending(EndingPhase::Result) | ScreenKind::Secret(_) => {
            if frame % 10 == 9 {
                &[Key::Enter]
            } else {
                &[]
            }
        }
    }
}

fn load_level(path: Option<&str>) -> Result<String, inovation::LevelError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEMO_LEVEL.to_string(),
    };
    TileGrid::try_decode(&text)?;
    Ok(text)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Inovation (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let level = match load_level(args.first().map(String::as_str)) {
        Ok(level) => level,
        Err(e) => {
            log::error!("Failed to load level: {e}");
            return ExitCode::FAILURE;
        }
    };
    if !level.contains('@') {
        log::error!("Level has no start point");
        return ExitCode::FAILURE;
    }
    let settings = match args.get(1) {
        Some(path) => match Settings::load(Path::new(path)) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load settings: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let deck = MusicDeck::new(LogSink, &settings);
    let mut game = GameController::with_level(deck, settings, level);
    let mut input = InputState::new();
    let mut renderer = RecordingRenderer::new();
    let mut state = game.current_state();
    let mut finished = false;

    while game.frames() < MAX_FRAMES {
        input.update(scripted_keys(state, game.frames()), false);
        renderer.clear();
        if let Err(e) = game.tick(&input, &mut renderer, false) {
            log::warn!("Audio error: {e}");
        }

        let next = game.current_state();
        if next != state {
            println!("frame {:>6}: {state:?} -> {next:?}", game.frames());
            if next == ScreenKind::Title {
                finished = true;
                break;
            }
            state = next;
        }
    }

    let progress = game.progress();
    println!(
        "items {}, time {}s, secret {}, {} frames",
        progress.item_count(),
        progress.time_in_seconds(game.settings().frame_rate),
        progress.has_secret_item(),
        game.frames()
    );
    if finished {
        ExitCode::SUCCESS
    } else {
        log::warn!("Run did not finish within {MAX_FRAMES} frames");
        ExitCode::FAILURE
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Embedders drive GameController directly
}
