use crate::pet::PointerEvent;
use eframe::egui;
use glam::Vec2;

/// The parts of egui's pointer state the pet cares about, for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    pub hover: Option<Vec2>,
    /// Primary button went down this frame, at this position
    pub press: Option<Vec2>,
    pub released: bool,
    pub double_click: Option<Vec2>,
}

impl PointerSnapshot {
    pub fn from_input(input: &egui::InputState) -> Self {
        let pointer = &input.pointer;
        let at = pointer.interact_pos().map(to_vec2);

        Self {
            hover: pointer.hover_pos().map(to_vec2),
            press: at.filter(|_| pointer.primary_pressed()),
            released: pointer.primary_released(),
            double_click: at.filter(|_| pointer.button_double_clicked(egui::PointerButton::Primary)),
        }
    }
}

fn to_vec2(pos: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x, pos.y)
}

/// Derives enter/move/leave from successive snapshots.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_hover: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for one frame, in the order the pet should see them.
    ///
    /// A double-click is reported after the press and release it ends with,
    /// so the poke lands after the grab has ended.
    pub fn translate(&mut self, snapshot: PointerSnapshot) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        match (self.last_hover, snapshot.hover) {
            (None, Some(at)) => {
                events.push(PointerEvent::Entered);
                events.push(PointerEvent::Moved(at));
            }
            (Some(previous), Some(at)) if previous != at => events.push(PointerEvent::Moved(at)),
            _ => {}
        }

        if let Some(at) = snapshot.press {
            events.push(PointerEvent::Pressed(at));
        }
        if snapshot.released {
            events.push(PointerEvent::Released);
        }
        if let Some(at) = snapshot.double_click {
            events.push(PointerEvent::DoubleClicked(at));
        }

        if self.last_hover.is_some() && snapshot.hover.is_none() {
            events.push(PointerEvent::Left);
        }

        self.last_hover = snapshot.hover;
        events
    }
}
