//! Per-phase drawing. Everything here is a thin wrapper over raylib; the
//! session tells us what to draw, never the other way around.
use raylib::core::texture::RaylibTexture2D;
use raylib::prelude::*;

use crate::core::actor::{ACTOR_H, ACTOR_W};
use crate::core::config::ViewportState;
use crate::core::session::{MenuItem, Phase, Session};
use crate::textures::TextureBank;

const HELP_LINES: [&str; 4] = [
    "The essence of the game: reach the key in the center of the labyrinth.",
    "Controls: hold the left mouse button and the character runs after the cursor.",
    "Touching any wall of the labyrinth is deadly. Press Escape to go back.",
    "That's all! Good luck!",
];

pub fn draw_menu(d: &mut RaylibDrawHandle, bank: &TextureBank, session: &Session) {
    let Phase::Menu { item, help_open } = session.phase else {
        return;
    };
    draw_background(d, bank, &session.viewport);
    if help_open {
        for (i, line) in HELP_LINES.iter().enumerate() {
            draw_label(d, &bank.help_font, line, 5.0, i as f32 * 100.0, 18.0, Color::BLACK);
        }
    } else {
        draw_button(d, &bank.button_start, "START", 300.0, item == MenuItem::Start);
        draw_button(d, &bank.button_options, "OPTIONS", 410.0, item == MenuItem::Help);
        draw_button(d, &bank.button_exit, "EXIT", 520.0, item == MenuItem::Exit);
    }
}

pub fn draw_playing(d: &mut RaylibDrawHandle, bank: &TextureBank, session: &Session, now_ms: u64) {
    draw_background(d, bank, &session.viewport);
    draw_label(
        d,
        &bank.hud_font,
        &session.elapsed_label(now_ms),
        0.0,
        0.0,
        32.0,
        Color::WHITE,
    );

    for wall in &session.walls {
        d.draw_rectangle_rec(*wall, Color::BLACK);
    }

    match &bank.key {
        Some(t) => {
            let src = Rectangle::new(0.0, 0.0, t.width() as f32, t.height() as f32);
            d.draw_texture_pro(t, src, session.goal, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
        }
        None => d.draw_rectangle_rec(session.goal, Color::GOLD),
    }

    draw_actor(d, bank, session);
}

pub fn draw_dead(d: &mut RaylibDrawHandle, bank: &TextureBank, session: &Session) {
    draw_background(d, bank, &session.viewport);
    let dst = Rectangle::new(450.0, 300.0, 350.0, 300.0);
    match &bank.died {
        Some(t) => {
            let src = Rectangle::new(0.0, 0.0, t.width() as f32, t.height() as f32);
            d.draw_texture_pro(t, src, dst, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
        }
        None => draw_label(d, &bank.hud_font, "YOU DIED", 520.0, 400.0, 48.0, Color::RED),
    }
}

pub fn draw_victory(d: &mut RaylibDrawHandle, bank: &TextureBank, session: &Session) {
    draw_background(d, bank, &session.viewport);
    let dst = Rectangle::new(450.0, 190.0, 300.0, 150.0);
    match &bank.victory {
        Some(t) => {
            let src = Rectangle::new(0.0, 0.0, t.width() as f32, t.height() as f32);
            d.draw_texture_pro(t, src, dst, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
        }
        None => draw_label(d, &bank.hud_font, "VICTORY!", 500.0, 230.0, 48.0, Color::GREEN),
    }
    // the run time, frozen at the moment the key was reached
    draw_label(
        d,
        &bank.hud_font,
        &session.victory_label(),
        500.0,
        350.0,
        32.0,
        Color::WHITE,
    );
}

fn draw_background(d: &mut RaylibDrawHandle, bank: &TextureBank, viewport: &ViewportState) {
    d.clear_background(Color::WHITE);
    if let Some(t) = &bank.background {
        let src = Rectangle::new(0.0, 0.0, t.width() as f32, t.height() as f32);
        // stretches with the window; the maze does not (fixed world coords)
        let dst = Rectangle::new(0.0, 0.0, viewport.width as f32, viewport.height as f32);
        d.draw_texture_pro(t, src, dst, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
    }
}

fn draw_actor(d: &mut RaylibDrawHandle, bank: &TextureBank, session: &Session) {
    let pos = session.actor.pos;
    let dst = Rectangle::new(pos.x, pos.y, ACTOR_W, ACTOR_H);
    match &bank.mouse_sheet {
        Some(t) => {
            // the sheet's frames are square-ish: width = height + 3
            let fw = (t.height() + 3) as f32;
            let mut src = Rectangle::new(session.actor.frame as f32 * fw, 0.0, fw, t.height() as f32);
            if session.actor.mirror {
                src.width = -src.width;
            }
            d.draw_texture_pro(t, src, dst, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
        }
        None => d.draw_rectangle_rec(dst, Color::YELLOW),
    }
}

/// Menu buttons come as a two-frame sheet: normal | highlighted.
fn draw_button(
    d: &mut RaylibDrawHandle,
    tex: &Option<Texture2D>,
    label: &str,
    y: f32,
    selected: bool,
) {
    let dst = Rectangle::new(500.0, y, 240.0, 80.0);
    match tex {
        Some(t) => {
            let half = t.width() as f32 / 2.0;
            let src = Rectangle::new(
                if selected { half } else { 0.0 },
                0.0,
                half,
                t.height() as f32,
            );
            d.draw_texture_pro(t, src, dst, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
        }
        None => {
            let fill = if selected {
                Color::DARKGRAY
            } else {
                Color::LIGHTGRAY
            };
            d.draw_rectangle_rec(dst, fill);
            d.draw_text(label, 540, y as i32 + 28, 24, Color::BLACK);
        }
    }
}

fn draw_label(
    d: &mut RaylibDrawHandle,
    font: &Option<Font>,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: Color,
) {
    match font {
        Some(f) => d.draw_text_ex(f, text, Vector2::new(x, y), size, 1.0, color),
        None => d.draw_text(text, x as i32, y as i32, size as i32, color),
    }
}
