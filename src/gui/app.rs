use super::{Config, FpsLimiter};
use crate::{Identity, RuleSet, Simulator};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, Rect, TextureHandle,
    TextureOptions,
};
use std::time::Instant;

pub struct App {
    pub(super) sim: Simulator,         // Extended-life engine; owns the grid.
    pub(super) is_paused: bool,        // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,      // Do one step and pause.
    pub(super) ticks_per_frame: u32,   // Number of engine ticks per frame.
    pub(super) brush: Identity,        // Species painted by pointer clicks.
    pub(super) seed: u64,              // Seed used by the Reseed button.
    pub(super) fill_rate: f64,         // Live density used by the Reseed button.
    pub(super) last_tick_duration: f64, // Duration of the last tick in seconds.
    pub(super) image: ColorImage,      // Persistent field image, repainted incrementally.
    pub(super) full_redraw: bool,      // Repaint every cell on the next frame.
    pub(super) texture: TextureHandle, // Texture handle of the field image.
    pub(super) field_rect: Option<Rect>, // Part of the window displaying the field.
    pub(super) fps_limiter: FpsLimiter, // Limits the frame rate to a certain value.
    pub(super) max_fps: f64,
}

impl App {
    pub fn new(ctx: &Context) -> Self {
        let mut sim = Simulator::new(Config::GRID_ROWS, Config::GRID_COLS, RuleSet::standard());
        sim.randomize(Some(Config::DEFAULT_SEED), Config::FILL_RATE);
        Self {
            sim,
            is_paused: true,
            do_one_step: false,
            ticks_per_frame: 1,
            brush: Identity::Live,
            seed: Config::DEFAULT_SEED,
            fill_rate: Config::FILL_RATE,
            last_tick_duration: 0.,
            image: ColorImage::new([Config::GRID_COLS, Config::GRID_ROWS], Color32::BLACK),
            full_redraw: true,
            texture: ctx.load_texture(
                "Extended-life field",
                ColorImage::default(),
                TextureOptions::default(),
            ),
            field_rect: None,
            fps_limiter: FpsLimiter::default(),
            max_fps: Config::MAX_FPS,
        }
    }

    pub(super) fn reseed(&mut self) {
        self.sim.randomize(Some(self.seed), self.fill_rate);
        self.full_redraw = true;
    }

    pub(super) fn clear_field(&mut self) {
        self.sim.clear();
        self.full_redraw = true;
    }

    fn update_engine(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }

        let timer = Instant::now();
        for _ in 0..self.ticks_per_frame {
            self.sim.tick();
        }
        self.last_tick_duration = timer.elapsed().as_secs_f64() / self.ticks_per_frame.max(1) as f64;
        self.do_one_step = false;
    }

    fn handle_input(&mut self, ctx: &Context, field_rect: Rect) {
        ctx.input(|input| {
            if let Some(pos) = input.pointer.latest_pos() {
                if field_rect.contains(pos) && input.pointer.primary_down() {
                    let p = (pos - field_rect.left_top()) / field_rect.size();
                    let row = (p.y * self.sim.rows() as f32) as usize;
                    let col = (p.x * self.sim.cols() as f32) as usize;
                    // The pointer can land exactly on the bottom or right
                    // edge, which maps one past the grid.
                    if self.sim.set_cell(row, col, self.brush.code()).is_ok() {
                        self.full_redraw = true;
                    }
                }
            }
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::P) {
                self.is_paused = !self.is_paused;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                if let Some(field_rect) = self.field_rect {
                    self.handle_input(ctx, field_rect);
                }

                self.draw(ui);

                self.update_engine();
            });

        self.fps_limiter.sleep(self.max_fps);
    }
}
