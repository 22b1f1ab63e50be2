use crate::config::{ContainerLayout, PetSettings};
use crate::pet::{Pet, RngDice};
use crate::platform::{self, DesktopPlacement};
use crate::ui::canvas;
use crate::ui::pointer::{PointerSnapshot, PointerTracker};
use eframe::egui;
use rand::rngs::ThreadRng;
use std::time::Instant;
use tracing::info;

/// The desktop pet window
pub struct PetApp {
    pet: Pet,
    settings: PetSettings,
    layout: ContainerLayout,
    placement: Box<dyn DesktopPlacement>,
    pointer: PointerTracker,
    dice: RngDice<ThreadRng>,
    last_update: Instant,
    monitor_checked: bool,
}

impl PetApp {
    pub fn new(
        settings: PetSettings,
        layout: ContainerLayout,
        placement: Box<dyn DesktopPlacement>,
    ) -> Self {
        let pet = Pet::new(layout.bounds(), settings.timing(), settings.tuning());
        Self {
            pet,
            settings,
            layout,
            placement,
            pointer: PointerTracker::new(),
            dice: RngDice::thread(),
            last_update: Instant::now(),
            monitor_checked: false,
        }
    }

    /// Viewport for the initial window, before any monitor is known
    pub fn viewport(
        settings: &PetSettings,
        layout: &ContainerLayout,
        placement: &dyn DesktopPlacement,
    ) -> egui::ViewportBuilder {
        let viewport = egui::ViewportBuilder::default()
            .with_title(settings.window.title.clone())
            .with_inner_size([layout.width as f32, layout.height as f32])
            .with_position([layout.x as f32, layout.y as f32]);
        placement.configure(viewport)
    }

    /// Resize to the real monitor once eframe reports it.
    fn sync_layout(&mut self, ctx: &egui::Context) {
        if self.monitor_checked {
            return;
        }
        let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) else {
            return;
        };
        self.monitor_checked = true;

        let layout =
            ContainerLayout::for_screen(monitor.x as u32, monitor.y as u32, &self.settings.window);
        if layout == self.layout {
            return;
        }

        info!(
            "🖥️ Monitor {}x{}: container {}x{} at ({}, {})",
            monitor.x, monitor.y, layout.width, layout.height, layout.x, layout.y
        );
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            layout.width as f32,
            layout.height as f32,
        )));
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
            layout.x as f32,
            layout.y as f32,
        )));
        self.pet.set_bounds(layout.bounds());
        self.layout = layout;
    }
}

impl eframe::App for PetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_layout(ctx);

        let snapshot = ctx.input(PointerSnapshot::from_input);
        for event in self.pointer.translate(snapshot) {
            self.pet.handle_pointer(event);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update);
        self.last_update = now;

        let update = self.pet.advance(elapsed, &mut self.dice);
        if update.reassert_placement {
            platform::reassert_quietly(self.placement.as_ref(), ctx);
        }

        canvas::show_pet(ctx, &self.pet, self.settings.window.opacity);
        ctx.request_repaint_after(update.next_tick_in);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0; 4]
    }
}
