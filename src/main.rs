//! Ring Post entry point
//!
//! Runs a scripted headless session against the headless host: wins every
//! level, restarts, and exercises the tilt and bob controls along the way.
//!
//! Usage: `ring-post [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
use ring_post::{
    Settings,
    audio::AudioManager,
    consts::RING_TAG,
    host::{HeadlessScene, SharedAudio, SharedText, SharedToggle},
    sim::{Hud, Scene, TickInput, Transform, tick},
};

/// Host frame time (60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up on a level after this many frames
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES_PER_LEVEL: u32 = 60 * 30;

#[cfg(not(target_arch = "wasm32"))]
fn run_frames(scene: &mut Scene<HeadlessScene>, frames: u32) {
    let empty = TickInput::default();
    for _ in 0..frames {
        tick(scene, &empty, FRAME_DT);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ring Post (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(std::path::Path::new(&path)),
        None => Settings::default(),
    };
    let keys = settings.keys.clone();

    let rings = HeadlessScene::new();
    let status = SharedText::new();
    let level_text = SharedText::new();
    let prompt = SharedToggle::new();
    let win = SharedAudio::new();
    let movement = SharedAudio::new();

    let hud = Hud::new()
        .with_status_text(status.clone())
        .with_level_text(level_text.clone())
        .with_continue_prompt(prompt.clone());
    let audio = AudioManager::from_settings(&settings.audio)
        .with_win_source(win.clone())
        .with_movement_source(movement.clone());

    let mut scene = Scene::new(&settings, rings.clone(), hud, audio, Transform::default());
    scene.start();

    while !scene.level.state().game_complete {
        let state = scene.level.state().clone();
        log::info!(
            "{}: {} ring(s) on the field, need {}",
            level_text.text(),
            rings.ring_count(),
            state.required_rings
        );

        // Tilt diagonally while lining up the rings
        let tilt = TickInput {
            keys_pressed: vec![keys.up, keys.right],
            ..Default::default()
        };
        tick(&mut scene, &tilt, FRAME_DT);
        let release = TickInput {
            keys_released: vec![keys.up, keys.right],
            ..Default::default()
        };
        tick(&mut scene, &release, FRAME_DT);
        movement.stop();

        let drop_rings = TickInput {
            trigger_enters: vec![RING_TAG.to_string(); state.required_rings as usize],
            ..Default::default()
        };
        tick(&mut scene, &drop_rings, FRAME_DT);

        let mut frames = 0;
        while !scene.level.state().level_complete {
            run_frames(&mut scene, 1);
            frames += 1;
            if frames > MAX_FRAMES_PER_LEVEL {
                log::error!("Level {} never completed - stopping", state.current_level);
                return;
            }
        }
        log::info!(
            "Held for {:.2}s, prompt visible: {}",
            scene.level.state().time_touching_seconds(),
            prompt.is_visible()
        );

        tick(&mut scene, &TickInput::press(keys.continue_key), FRAME_DT);
        tick(&mut scene, &TickInput::release(keys.continue_key), FRAME_DT);
        movement.stop();
        // Let the tilt and bob settle before the next level
        run_frames(&mut scene, 30);
    }

    log::info!("Final status: {}", status.text());
    tick(&mut scene, &TickInput::press(keys.continue_key), FRAME_DT);
    log::info!(
        "Restarted: {} / \"{}\" with {} ring(s)",
        level_text.text(),
        status.text(),
        rings.ring_count()
    );
    log::info!(
        "Session done: {} frames, {:.2}s simulated, win sound x{}, movement sound x{}",
        scene.frames,
        scene.time,
        win.plays(),
        movement.plays()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {}
