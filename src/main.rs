// main.rs
mod audio_manager;
mod core;
mod screens;
mod textures;

use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};
use raylib::prelude::*;

use crate::core::config::{GameConfig, ViewportState};
use crate::core::session::{InputEvent, Key, Phase, Session};
use audio_manager::AudioManager;
use textures::TextureBank;

fn main() {
    env_logger::init();

    let config = GameConfig::default();
    let viewport = ViewportState::default();

    let (mut rl, raylib_thread) = raylib::init()
        .size(viewport.width, viewport.height)
        .title("Mouse Miki Game")
        .resizable()
        .build();
    // Escape belongs to the game (help view, victory screen), not the window
    rl.set_exit_key(None);
    info!("window up at {}x{}", viewport.width, viewport.height);

    let bank = TextureBank::load(&mut rl, &raylib_thread);
    let mut audio = AudioManager::new();
    match audio.as_mut() {
        Some(a) => a.play_music_loop_auto(),
        None => warn!("no audio output device; running silent"),
    }

    let mut session = Session::new(config, viewport);
    let clock = Instant::now();
    let mut last_cursor = rl.get_mouse_position();
    let frame_delay = Duration::from_millis(1000 / config.fps as u64);

    while session.running {
        let now_ms = clock.elapsed().as_millis() as u64;
        let events = gather_events(&rl, &mut last_cursor);
        session.frame(&events, now_ms);

        {
            let mut d = rl.begin_drawing(&raylib_thread);
            match session.phase {
                Phase::Menu { .. } => screens::draw_menu(&mut d, &bank, &session),
                Phase::Playing => screens::draw_playing(&mut d, &bank, &session, now_ms),
                Phase::Dead { .. } => screens::draw_dead(&mut d, &bank, &session),
                Phase::Victory => screens::draw_victory(&mut d, &bank, &session),
            }
        }

        // fixed pacing, same as the original's 1000 / FPS delay
        thread::sleep(frame_delay);
    }

    info!("shutting down");
}

/// Translates raylib's polled input into this frame's event list. Order
/// matters only for the button flag (last write wins); the quit signal
/// goes last, after everything else has been drained.
fn gather_events(rl: &RaylibHandle, last_cursor: &mut Vector2) -> Vec<InputEvent> {
    let mut events = Vec::new();

    if rl.is_window_resized() {
        events.push(InputEvent::WindowResized(
            rl.get_screen_width(),
            rl.get_screen_height(),
        ));
    }

    let cursor = rl.get_mouse_position();
    if cursor.x != last_cursor.x || cursor.y != last_cursor.y {
        *last_cursor = cursor;
        events.push(InputEvent::PointerMoved(cursor.x, cursor.y));
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        events.push(InputEvent::PointerDown);
    }
    if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        events.push(InputEvent::PointerUp);
    }

    let keys = [
        (KeyboardKey::KEY_DOWN, Key::Down),
        (KeyboardKey::KEY_ENTER, Key::Enter),
        (KeyboardKey::KEY_ESCAPE, Key::Escape),
    ];
    for (rk, k) in keys {
        if rl.is_key_pressed(rk) {
            events.push(InputEvent::KeyDown(k));
        }
    }

    if rl.window_should_close() {
        events.push(InputEvent::Quit);
    }

    events
}
