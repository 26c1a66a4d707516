//! Plasma Pong entry point
//!
//! Startup, the lockstep frame loop, and shutdown. Each frame runs to
//! completion before the next begins: poll input, update the state machine,
//! composite the blur, draw the overlays, present, swap buffers. The
//! present call blocks until the next frame slot, so there is no separate
//! timer, and quitting only ever happens between frames.

use std::mem;
use std::process::ExitCode;

use plasma_pong::gfx::blur::BlurTables;
use plasma_pong::gfx::framebuffer::Framebuffer;
use plasma_pong::gfx::glyphs::BuiltinGlyphs;
use plasma_pong::platform::{DisplayAdapter, PointerAdapter, StartupError, VgaWindow};
use plasma_pong::render::{render_back, render_front};
use plasma_pong::settings::Settings;
use plasma_pong::sim::{GameData, Phase, RandomTable, TrigTables, enter_phase, update};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), StartupError> {
    let settings = Settings::load();
    log::info!(
        "Plasma Pong starting (seed {}, {}x window)",
        settings.seed,
        settings.window_scale
    );

    let mut window = VgaWindow::new("Plasma Pong", settings.window_scale, settings.target_fps)?;
    if !window.try_set_indexed_color_mode() {
        return Err(StartupError::DisplayMode("window closed during setup".into()));
    }
    if !window.is_present() {
        return Err(StartupError::NoPointer);
    }

    let mut front = Framebuffer::new();
    let mut back = Framebuffer::new();

    let blur = BlurTables::new();
    let trig = TrigTables::new();
    let glyphs = BuiltinGlyphs;
    let mut rng = RandomTable::new(settings.seed);

    let mut g = GameData::new();
    let mut phase = Phase::Playing;
    enter_phase(phase, &mut g, &mut rng, &mut window);

    loop {
        let input = window.poll();
        if input.wants_quit() {
            break;
        }

        let new_phase = update(phase, &mut g, &input, &mut rng, &mut window);
        if new_phase != phase {
            log::debug!("{phase:?} -> {new_phase:?} (score {})", g.score);
            phase = new_phase;
            enter_phase(phase, &mut g, &mut rng, &mut window);
        }

        render_back(phase, &mut back, &g, &mut rng);
        blur.blur(&mut front, &back, g.is_noisy, &mut rng);
        render_front(phase, &mut front, &g, &input, &mut rng, &trig, &glyphs);

        window.present(&front);
        mem::swap(&mut front, &mut back);
    }

    window.restore_original_mode();
    log::info!("Quit at score {}", g.score);

    Ok(())
}
