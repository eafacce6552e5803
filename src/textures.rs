//! Texture and font loading with graceful fallbacks.
//!
//! Every asset is optional: a missing file is logged once and the screens
//! draw a flat-color stand-in instead, so the game stays playable from a
//! bare checkout.
use log::warn;
use raylib::prelude::*;

/// All textures and fonts the game uses, loaded once at startup.
pub struct TextureBank {
    pub background: Option<Texture2D>,
    /// Horizontal running sheet; frame width is sheet height + 3.
    pub mouse_sheet: Option<Texture2D>,
    pub key: Option<Texture2D>,
    pub died: Option<Texture2D>,
    pub victory: Option<Texture2D>,
    pub button_start: Option<Texture2D>,
    pub button_options: Option<Texture2D>,
    pub button_exit: Option<Texture2D>,
    /// HUD font for the time counter.
    pub hud_font: Option<Font>,
    /// Font for the help text in the options view.
    pub help_font: Option<Font>,
}

impl TextureBank {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread) -> Self {
        Self {
            background: load_texture_any(
                rl,
                thread,
                "background",
                &["assets/background.jpg", "background.jpg"],
            ),
            mouse_sheet: load_texture_any(
                rl,
                thread,
                "mouse sheet",
                &[
                    "assets/mouse_running_left_right.png",
                    "mouse_running_left_right.png",
                ],
            ),
            key: load_texture_any(rl, thread, "key", &["assets/key.png", "key.png"]),
            died: load_texture_any(rl, thread, "death screen", &["assets/died.png", "died.png"]),
            victory: load_texture_any(
                rl,
                thread,
                "victory sheet",
                &["assets/victory_sheet.png", "victory_sheet.png"],
            ),
            button_start: load_texture_any(
                rl,
                thread,
                "start button",
                &["assets/button_start.png", "button_start.png"],
            ),
            button_options: load_texture_any(
                rl,
                thread,
                "options button",
                &["assets/button_options.png", "button_options.png"],
            ),
            button_exit: load_texture_any(
                rl,
                thread,
                "exit button",
                &["assets/button_exit.png", "button_exit.png"],
            ),
            hud_font: load_font_any(rl, thread, "hud font", &["assets/ebrimabd.ttf", "ebrimabd.ttf"]),
            help_font: load_font_any(rl, thread, "help font", &["assets/RAVIE.TTF", "RAVIE.TTF"]),
        }
    }
}

fn load_texture_any(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    what: &str,
    paths: &[&str],
) -> Option<Texture2D> {
    for p in paths {
        if let Ok(tex) = rl.load_texture(thread, p) {
            return Some(tex);
        }
    }
    warn!("no {} texture found (tried {:?}); drawing a fallback", what, paths);
    None
}

fn load_font_any(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    what: &str,
    paths: &[&str],
) -> Option<Font> {
    for p in paths {
        if let Ok(font) = rl.load_font(thread, p) {
            return Some(font);
        }
    }
    warn!("no {} found (tried {:?}); using the built-in font", what, paths);
    None
}
