use egui::Pos2;

use crate::session::Sketchpad;

/// A pointer event in pad coordinates.
///
/// Hosts translate whatever their windowing layer reports into these four
/// shapes; the session neither knows nor cares which button or device
/// produced them. Positions are relative to the pad's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer went down over the pad.
    PointerPressed { pos: Pos2 },
    /// The pointer moved while over the pad, pressed or not.
    PointerMoved { pos: Pos2 },
    /// The pointer was released.
    PointerReleased { pos: Pos2 },
    /// The pointer left the pad entirely.
    PointerLeft,
}

impl Sketchpad {
    /// Route one pointer event to the matching session operation.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerPressed { pos } => self.pointer_pressed(pos),
            InputEvent::PointerMoved { pos } => self.pointer_moved(pos),
            InputEvent::PointerReleased { pos } => self.pointer_released(pos),
            InputEvent::PointerLeft => self.pointer_left(),
        }
    }
}
