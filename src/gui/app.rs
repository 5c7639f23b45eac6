use super::{Config, FpsLimiter};
use crate::{Grid, LifeEngine};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Margin, TextureHandle, TextureOptions,
};
use rand::Rng;

pub struct App {
    pub(super) grid: Grid,          // Current generation.
    pub(super) engine: LifeEngine,  // Computes generation transitions.
    pub(super) frame: u64,          // Rendered-frame counter; drives hue drift and the tick divisor.
    pub(super) generation: u64,     // Generations since the last reset.
    pub(super) cell_size: usize,    // Edge of a drawn cell in pixels; changing it resets the field.
    pub(super) fade: f32,           // Trail persistence; rendering-only.
    pub(super) hue: f32,            // Base hue of live cells, re-rolled on reset.
    pub(super) background: Color32, // Trail decay target, re-rolled on reset.
    pub(super) canvas: Vec<Color32>, // Persistent framebuffer the trails accumulate in.
    pub(super) canvas_size: [usize; 2], // Framebuffer dimensions in pixels.
    pub(super) texture: TextureHandle, // Texture handle the framebuffer is uploaded into.
    pub(super) reset_requested: bool, // Re-seed everything before the next field draw.
    pub(super) fps_limiter: FpsLimiter, // Limits the frame rate to a certain value.
    pub(super) max_fps: f64,
}

impl App {
    pub fn new(ctx: &Context) -> Self {
        Self {
            // Placeholder until the first frame reveals the field area;
            // the canvas size mismatch then triggers the real reset.
            grid: Grid::blank(1, 1),
            engine: LifeEngine::new(Config::SPARK_CHANCE, None),
            frame: 0,
            generation: 0,
            cell_size: Config::CELL_SIZE,
            fade: Config::FADE,
            hue: 0.,
            background: Color32::BLACK,
            canvas: vec![],
            canvas_size: [0, 0],
            texture: ctx.load_texture(
                "life field",
                ColorImage::default(),
                TextureOptions::default(),
            ),
            reset_requested: false,
            fps_limiter: FpsLimiter::default(),
            max_fps: Config::MAX_FPS,
        }
    }

    /// Re-seed the simulation for a `canvas_size`-pixel field: fresh random
    /// grid sized for the current cell size, fresh hue and background, and a
    /// framebuffer cleared of old trails. Replaces all state in one call, so
    /// no frame ever mixes old and new dimensions.
    pub(super) fn reset(&mut self, canvas_size: [usize; 2]) {
        let cols = (canvas_size[0] / self.cell_size).max(1);
        let rows = (canvas_size[1] / self.cell_size).max(1);
        self.grid = Grid::random(cols, rows, Config::FILL_RATE, None);

        let mut rng = rand::thread_rng();
        self.hue = rng.gen_range(0.0..360.0);
        self.background = Color32::from_rgb(rng.gen(), rng.gen(), rng.gen());

        self.canvas = vec![self.background; canvas_size[0] * canvas_size[1]];
        self.canvas_size = canvas_size;
        self.generation = 0;
        // `frame` keeps counting so the hue keeps drifting across resets.
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

                self.frame += 1;
                // Simulate at half the render rate; the trails fade on
                // every frame regardless.
                if self.frame % Config::TICK_DIVISOR == 0 && self.canvas_size != [0, 0] {
                    self.grid = self.engine.step(&self.grid);
                    self.generation += 1;
                }

                self.draw(ui);
            });

        self.fps_limiter.sleep(self.max_fps);
    }
}
