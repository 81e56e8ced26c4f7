use super::{App, Config};
use crate::Identity;
use eframe::egui::{
    load::SizedTexture, Button, DragValue, Image, RichText, Slider, Stroke, TextureFilter,
    TextureOptions, TextureWrapMode, Ui,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        if ui
            .add_enabled(self.is_paused, Self::new_button("Next step"))
            .clicked()
        {
            self.do_one_step = true;
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Ticks per frame: "));
            ui.add(DragValue::new(&mut self.ticks_per_frame).range(1..=64));
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Reseed")).clicked() {
                self.reseed();
            }
            ui.label(Self::new_text("seed: "));
            ui.add(DragValue::new(&mut self.seed));
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Fill rate: "));
            ui.add(Slider::new(&mut self.fill_rate, 0.0..=1.0));
        });

        if ui.add(Self::new_button("Clear field")).clicked() {
            self.clear_field();
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Brush: "));
            for identity in Identity::ALL {
                ui.radio_value(
                    &mut self.brush,
                    identity,
                    Self::new_text(&format!("{:?}", identity)),
                );
            }
        });
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!("Generation: {}", self.sim.ticks())));

        ui.label(Self::new_text(&format!(
            "Static cells: {} / {}",
            self.sim.static_cells(),
            self.sim.rows() * self.sim.cols()
        )));

        ui.label(Self::new_text(&format!(
            "Last tick: {:.3} ms",
            self.last_tick_duration * 1e3
        )));

        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, 5.0..=240.0).logarithmic(true));
        });
    }

    fn repaint_image(&mut self) {
        let cols = self.sim.cols();
        if self.full_redraw {
            for view in self.sim.cells() {
                self.image.pixels[view.row * cols + view.col] = Config::color(view.identity);
            }
            self.full_redraw = false;
        } else {
            // Static cells cannot have changed since the last frame.
            for view in self.sim.cells().filter(|view| !view.is_static) {
                self.image.pixels[view.row * cols + view.col] = Config::color(view.identity);
            }
        }
    }

    fn draw_field(&mut self, ui: &mut Ui, size_px: f32) {
        self.repaint_image();

        let texture_options = TextureOptions {
            magnification: TextureFilter::Nearest,
            minification: TextureFilter::Linear,
            wrap_mode: TextureWrapMode::ClampToEdge,
        };
        self.texture.set(self.image.clone(), texture_options);

        let source = SizedTexture::new(self.texture.id(), [size_px; 2]);
        let response = ui.add(Image::from_texture(source));
        self.field_rect.replace(response.rect);
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.group(|ui| {
                    self.draw_simulation_controls(ui);
                });

                ui.add_space(Config::WIDGET_GAP);

                ui.group(|ui| {
                    self.draw_stats(ui);
                });
            });

            ui.add_space(ui.available_width() - size_px);

            ui.vertical_centered(|ui| {
                self.draw_field(ui, size_px);
            });
        });
    }
}
