//! Game state machine driven by per-frame input events.
//!
//! The frame loop in `main.rs` translates raylib's polled input into a
//! small event list and feeds it to [`Session::frame`] together with a
//! monotonic millisecond clock. Keeping the clock and the events as plain
//! parameters keeps this whole module free of raylib handles, so the
//! machine can be driven verbatim from tests.
use raylib::prelude::*;

use crate::core::actor::Actor;
use crate::core::collision::{hits_goal, hits_wall};
use crate::core::config::{GameConfig, ViewportState};
use crate::core::maze::{build_maze, goal_rect};
use crate::core::motion::{DEAD_ZONE, advance};

/// Keys the game cares about.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Down,
    Enter,
    Escape,
}

/// One frame's worth of input, in queue order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    WindowResized(i32, i32),
    PointerMoved(f32, f32),
    PointerDown,
    PointerUp,
    KeyDown(Key),
}

/// Menu entries, cycled top to bottom by the Down key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    Help,
    Exit,
}

impl MenuItem {
    pub fn next(self) -> Self {
        match self {
            MenuItem::Start => MenuItem::Help,
            MenuItem::Help => MenuItem::Exit,
            MenuItem::Exit => MenuItem::Start,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Phase {
    Menu { item: MenuItem, help_open: bool },
    Playing,
    Dead { until_ms: u64 },
    Victory,
}

fn menu() -> Phase {
    Phase::Menu {
        item: MenuItem::Start,
        help_open: false,
    }
}

pub struct Session {
    pub phase: Phase,
    /// Cleared by a quit event or by choosing Exit; the frame loop stops.
    pub running: bool,
    pub actor: Actor,
    /// Last known cursor position.
    pub target: Vector2,
    /// True while the left button is held; the mouse only chases then.
    pub pursuit_active: bool,
    /// Clock value at the moment Playing last started.
    pub start_ms: u64,
    /// Elapsed play time frozen at the moment of victory.
    pub victory_run_ms: u64,
    pub config: GameConfig,
    pub viewport: ViewportState,
    pub walls: Vec<Rectangle>,
    pub goal: Rectangle,
}

impl Session {
    pub fn new(config: GameConfig, viewport: ViewportState) -> Self {
        let spawn = viewport.spawn_point();
        Self {
            phase: menu(),
            running: true,
            actor: Actor::new(spawn),
            target: spawn,
            pursuit_active: false,
            start_ms: 0,
            victory_run_ms: 0,
            config,
            viewport,
            walls: build_maze(),
            goal: goal_rect(),
        }
    }

    /// Runs one frame: applies the drained input events in order, then the
    /// per-phase update (motion, collisions, timers).
    pub fn frame(&mut self, events: &[InputEvent], now_ms: u64) {
        for &ev in events {
            self.handle_event(ev, now_ms);
        }
        match self.phase {
            Phase::Playing => self.update_playing(now_ms),
            Phase::Dead { until_ms } => {
                if now_ms >= until_ms {
                    self.phase = menu();
                }
            }
            _ => {}
        }
    }

    fn handle_event(&mut self, ev: InputEvent, now_ms: u64) {
        if ev == InputEvent::Quit {
            self.running = false;
            return;
        }
        // The death screen swallows everything else.
        if matches!(self.phase, Phase::Dead { .. }) {
            return;
        }
        if let InputEvent::WindowResized(w, h) = ev {
            self.viewport = ViewportState::new(w, h);
            return;
        }
        match self.phase {
            Phase::Menu { item, help_open } => self.menu_event(ev, item, help_open, now_ms),
            Phase::Playing => self.playing_event(ev),
            Phase::Victory => {
                if ev == InputEvent::KeyDown(Key::Escape) {
                    self.phase = menu();
                }
            }
            Phase::Dead { .. } => {}
        }
    }

    fn menu_event(&mut self, ev: InputEvent, item: MenuItem, help_open: bool, now_ms: u64) {
        let InputEvent::KeyDown(key) = ev else {
            return;
        };
        if help_open {
            if key == Key::Escape {
                self.phase = Phase::Menu {
                    item,
                    help_open: false,
                };
            }
            return;
        }
        match key {
            Key::Down => {
                self.phase = Phase::Menu {
                    item: item.next(),
                    help_open: false,
                };
            }
            Key::Enter => match item {
                MenuItem::Start => self.enter_playing(now_ms),
                MenuItem::Help => {
                    self.phase = Phase::Menu {
                        item,
                        help_open: true,
                    };
                }
                MenuItem::Exit => self.running = false,
            },
            Key::Escape => {}
        }
    }

    fn playing_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::PointerMoved(x, y) => {
                self.target = Vector2::new(x, y);
                // face the cursor; decided when the cursor moves, not per tick
                self.mirror_toward_target();
            }
            InputEvent::PointerDown => self.pursuit_active = true,
            InputEvent::PointerUp => self.pursuit_active = false,
            _ => {}
        }
    }

    fn mirror_toward_target(&mut self) {
        self.actor.mirror = self.actor.pos.x > self.target.x;
    }

    fn enter_playing(&mut self, now_ms: u64) {
        let spawn = self.viewport.spawn_point();
        self.actor.reset(spawn);
        self.target = spawn;
        self.pursuit_active = false;
        self.start_ms = now_ms;
        self.phase = Phase::Playing;
    }

    fn update_playing(&mut self, now_ms: u64) {
        if self.pursuit_active {
            let (pos, len) = advance(self.actor.pos, self.target, self.config.speed, self.config.fps);
            self.actor.pos = pos;
            if len > DEAD_ZONE {
                self.actor.step_frame();
            } else {
                self.actor.set_idle();
            }
        }

        let center = self.actor.center();
        if hits_wall(center, &self.walls) {
            let spawn = self.viewport.spawn_point();
            self.actor.reset(spawn);
            self.pursuit_active = false;
            self.phase = Phase::Dead {
                until_ms: now_ms + self.config.death_hold_ms,
            };
            return;
        }
        if hits_goal(center, &self.goal) {
            self.victory_run_ms = now_ms.saturating_sub(self.start_ms);
            let spawn = self.viewport.spawn_point();
            self.actor.reset(spawn);
            self.pursuit_active = false;
            self.phase = Phase::Victory;
        }
    }

    /// Live HUD label while playing.
    pub fn elapsed_label(&self, now_ms: u64) -> String {
        format_time(now_ms.saturating_sub(self.start_ms))
    }

    /// Frozen label shown on the victory screen.
    pub fn victory_label(&self) -> String {
        format_time(self.victory_run_ms)
    }
}

/// `Time MM:SS`, zero-padded, minutes carry past 59 seconds.
pub fn format_time(ms: u64) -> String {
    let secs = ms / 1000;
    format!("Time {:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actor::{ACTOR_H, ACTOR_W};

    fn started(now_ms: u64) -> Session {
        let mut s = Session::new(GameConfig::default(), ViewportState::default());
        s.frame(&[InputEvent::KeyDown(Key::Enter)], now_ms);
        assert_eq!(s.phase, Phase::Playing);
        s
    }

    /// Places the actor so its center lands on `(cx, cy)`.
    fn put_center(s: &mut Session, cx: f32, cy: f32) {
        s.actor.pos = Vector2::new(cx - ACTOR_W / 2.0, cy - ACTOR_H / 2.0);
    }

    #[test]
    fn start_resets_clock_and_spawn() {
        let mut s = Session::new(GameConfig::default(), ViewportState::default());
        s.start_ms = 999;
        s.actor.pos = Vector2::new(600.0, 600.0);
        s.pursuit_active = true;
        s.frame(&[InputEvent::KeyDown(Key::Enter)], 5000);
        assert_eq!(s.phase, Phase::Playing);
        assert_eq!(s.start_ms, 5000);
        assert_eq!(s.elapsed_label(5000), "Time 00:00");
        let spawn = s.viewport.spawn_point();
        assert_eq!(s.actor.pos.x, spawn.x);
        assert_eq!(s.actor.pos.y, spawn.y);
        assert!(!s.pursuit_active);
    }

    #[test]
    fn spawn_point_is_outside_every_wall() {
        let s = started(0);
        assert!(!hits_wall(s.actor.center(), &s.walls));
    }

    #[test]
    fn menu_cycles_and_wraps() {
        let mut s = Session::new(GameConfig::default(), ViewportState::default());
        let down = [InputEvent::KeyDown(Key::Down)];
        s.frame(&down, 0);
        assert_eq!(
            s.phase,
            Phase::Menu {
                item: MenuItem::Help,
                help_open: false
            }
        );
        s.frame(&down, 0);
        s.frame(&down, 0);
        assert_eq!(
            s.phase,
            Phase::Menu {
                item: MenuItem::Start,
                help_open: false
            }
        );
    }

    #[test]
    fn help_opens_and_escape_returns_to_list() {
        let mut s = Session::new(GameConfig::default(), ViewportState::default());
        s.frame(&[InputEvent::KeyDown(Key::Down)], 0); // Help
        s.frame(&[InputEvent::KeyDown(Key::Enter)], 0);
        assert_eq!(
            s.phase,
            Phase::Menu {
                item: MenuItem::Help,
                help_open: true
            }
        );
        // Down is ignored while the help text is up
        s.frame(&[InputEvent::KeyDown(Key::Down)], 0);
        assert_eq!(
            s.phase,
            Phase::Menu {
                item: MenuItem::Help,
                help_open: true
            }
        );
        s.frame(&[InputEvent::KeyDown(Key::Escape)], 0);
        assert_eq!(
            s.phase,
            Phase::Menu {
                item: MenuItem::Help,
                help_open: false
            }
        );
    }

    #[test]
    fn exit_and_quit_stop_the_session() {
        let mut s = Session::new(GameConfig::default(), ViewportState::default());
        s.frame(&[InputEvent::KeyDown(Key::Down)], 0);
        s.frame(&[InputEvent::KeyDown(Key::Down)], 0); // Exit
        s.frame(&[InputEvent::KeyDown(Key::Enter)], 0);
        assert!(!s.running);

        let mut s = started(0);
        s.frame(&[InputEvent::Quit], 16);
        assert!(!s.running);
    }

    #[test]
    fn held_button_chases_the_cursor() {
        let mut s = started(0);
        let before = s.actor.pos;
        s.frame(
            &[
                InputEvent::PointerMoved(500.0, 350.0),
                InputEvent::PointerDown,
            ],
            16,
        );
        assert!(s.actor.pos.x > before.x);
        // releasing stops the chase
        let held = s.actor.pos;
        s.frame(&[InputEvent::PointerUp], 32);
        assert_eq!(s.actor.pos.x, held.x);
    }

    #[test]
    fn same_frame_down_then_up_means_released() {
        let mut s = started(0);
        let before = s.actor.pos;
        s.frame(
            &[
                InputEvent::PointerMoved(500.0, 350.0),
                InputEvent::PointerDown,
                InputEvent::PointerUp,
            ],
            16,
        );
        assert!(!s.pursuit_active);
        assert_eq!(s.actor.pos.x, before.x);
    }

    #[test]
    fn facing_follows_cursor_side() {
        let mut s = started(0);
        s.actor.pos = Vector2::new(600.0, 350.0);
        s.frame(&[InputEvent::PointerMoved(642.0, 350.0)], 16);
        assert!(!s.actor.mirror);
        s.frame(&[InputEvent::PointerMoved(599.0, 350.0)], 32);
        assert!(s.actor.mirror);
    }

    #[test]
    fn wall_hit_holds_death_screen_then_returns_to_menu() {
        let mut s = started(1000);
        put_center(&mut s, 95.0, 100.0); // inside the first wall
        s.frame(&[], 2000);
        assert_eq!(s.phase, Phase::Dead { until_ms: 5000 });
        assert!(!s.pursuit_active);
        let spawn = s.viewport.spawn_point();
        assert_eq!(s.actor.pos.x, spawn.x);

        // input is ignored while dead
        s.frame(&[InputEvent::KeyDown(Key::Enter), InputEvent::PointerDown], 3000);
        assert_eq!(s.phase, Phase::Dead { until_ms: 5000 });
        assert!(!s.pursuit_active);

        s.frame(&[], 4999);
        assert_eq!(s.phase, Phase::Dead { until_ms: 5000 });
        s.frame(&[], 5000);
        assert_eq!(s.phase, menu());
    }

    #[test]
    fn goal_hit_waits_for_escape() {
        let mut s = started(1000);
        put_center(&mut s, 965.0, 290.0); // inside the key
        s.frame(&[], 61_000);
        assert_eq!(s.phase, Phase::Victory);
        // stays put regardless of elapsed real time
        s.frame(&[], 1_000_000);
        s.frame(&[InputEvent::KeyDown(Key::Enter)], 2_000_000);
        assert_eq!(s.phase, Phase::Victory);
        assert_eq!(s.victory_label(), "Time 01:00");
        s.frame(&[InputEvent::KeyDown(Key::Escape)], 3_000_000);
        assert_eq!(s.phase, menu());
    }

    #[test]
    fn resize_updates_viewport_only() {
        let mut s = started(0);
        let walls_before = s.walls.clone();
        s.frame(&[InputEvent::WindowResized(800, 400)], 16);
        assert_eq!(s.viewport.width, 800);
        assert_eq!(s.viewport.height, 400);
        assert_eq!(s.walls.len(), walls_before.len());
        assert_eq!(s.walls[0].x, walls_before[0].x);
    }

    #[test]
    fn time_label_is_zero_padded() {
        assert_eq!(format_time(0), "Time 00:00");
        assert_eq!(format_time(999), "Time 00:00");
        assert_eq!(format_time(65_000), "Time 01:05");
        assert_eq!(format_time(185_000), "Time 03:05");
    }
}
