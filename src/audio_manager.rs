//! Background music via rodio. Fire-and-forget; nothing here feeds back
//! into the game logic.
use std::{fs::File, io::Cursor, io::Read};

use log::warn;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any(paths: &[&str]) -> Option<Vec<u8>> {
    for p in paths {
        if let Some(b) = load_bytes(p) {
            return Some(b);
        }
    }
    None
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bg_sink: Option<Sink>,
}

impl AudioManager {
    /// None when there is no output device; the game then runs silent.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = OutputStream::try_default().ok()?;
        Some(Self {
            _stream,
            handle,
            bg_sink: None,
        })
    }

    pub fn play_music_loop(&mut self, path: &str) {
        if self.bg_sink.is_some() {
            return;
        }
        if let Some(bytes) = load_bytes(path) {
            self.start_loop(bytes);
        } else {
            warn!("music file {} not found; running silent", path);
        }
    }

    pub fn play_music_loop_auto(&mut self) {
        if self.bg_sink.is_some() {
            return;
        }
        let candidates = [
            "assets/swingin-and-singin.wav",
            "swingin-and-singin.wav",
            "assets/music_bg.wav",
        ];
        match load_bytes_any(&candidates) {
            Some(bytes) => self.start_loop(bytes),
            None => warn!("no music track found (tried {:?}); running silent", candidates),
        }
    }

    fn start_loop(&mut self, bytes: Vec<u8>) {
        if let Ok(dec) = Decoder::new_looped(Cursor::new(bytes)) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.append(dec);
                sink.set_volume(0.35);
                self.bg_sink = Some(sink);
            }
        }
    }
}
