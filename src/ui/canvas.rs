use crate::pet::{AnimationFrame, Pet};
use eframe::egui::{self, Align2, Color32, FontId, Pos2};
use glam::Vec2;

const BACKGROUND: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);
const HOUSE_COLOR: Color32 = Color32::from_rgb(0xc0, 0xc0, 0xc0);
const PET_COLOR: Color32 = Color32::from_rgb(0x40, 0x40, 0x40);
const HOUSE_INSET: f32 = 10.0;
const HOUSE_SIZE: f32 = 12.0;

/// Paint the container and the pet.
pub fn show_pet(ctx: &egui::Context, pet: &Pet, opacity: f32) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default())
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter();

            painter.rect_filled(rect, 0.0, BACKGROUND.gamma_multiply(opacity));
            painter.text(
                Pos2::new(rect.right() - HOUSE_INSET, rect.top() + HOUSE_INSET),
                Align2::RIGHT_TOP,
                "🏠",
                FontId::proportional(HOUSE_SIZE),
                HOUSE_COLOR,
            );

            let frame = pet.frame();
            let size = pet.behavior().tuning().sprite_radius * 2.0;
            painter.text(
                sprite_anchor(rect.min, pet.position(), frame),
                Align2::CENTER_CENTER,
                frame.sprite.glyph(),
                FontId::proportional(size),
                PET_COLOR,
            );
        });
}

/// Screen point the sprite is centred on; the bounce only shifts the drawing.
fn sprite_anchor(origin: Pos2, position: Vec2, frame: AnimationFrame) -> Pos2 {
    Pos2::new(origin.x + position.x, origin.y + position.y + frame.bounce)
}
