//! SDL2 keyboard/window events mapped to semantic input

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use super::{InputEvent, InputSource};

/// Key bindings: Space/Up jump, R restarts, Escape quits
pub fn map_key(key: Keycode) -> Option<InputEvent> {
    match key {
        Keycode::Space | Keycode::Up => Some(InputEvent::Jump),
        Keycode::R => Some(InputEvent::Restart),
        Keycode::Escape => Some(InputEvent::Exit),
        _ => None,
    }
}

/// Map a raw SDL event, ignoring everything the game doesn't care about
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Exit),
        Event::KeyDown {
            keycode: Some(key), ..
        } => map_key(*key),
        _ => None,
    }
}

/// Input source backed by the SDL event pump
pub struct SdlInput {
    pump: EventPump,
}

impl SdlInput {
    pub fn new(pump: EventPump) -> Self {
        Self { pump }
    }
}

impl InputSource for SdlInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.pump.poll_iter().filter_map(|e| map_event(&e)).collect()
    }
}
