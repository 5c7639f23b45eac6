use super::{App, Config};
use eframe::egui::{
    ecolor::Hsva, load::SizedTexture, vec2, Button, Color32, ColorImage, Image, RichText, Sense,
    Slider, Stroke, TextureFilter, TextureOptions, TextureWrapMode, Ui, Vec2,
};

/// Mix `src` over `dst` with the given opacity, per channel.
fn blend(dst: Color32, src: Color32, alpha: f32) -> Color32 {
    let mix = |d: u8, s: u8| (d as f32 + (s as f32 - d as f32) * alpha).round() as u8;
    Color32::from_rgb(
        mix(dst.r(), src.r()),
        mix(dst.g(), src.g()),
        mix(dst.b(), src.b()),
    )
}

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

    fn draw_render_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Cell size: "));
            if ui
                .add(Slider::new(&mut self.cell_size, Config::CELL_SIZE_RANGE))
                .changed()
            {
                // The grid dimensions depend on the cell size.
                self.reset_requested = true;
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Fade: "));
            ui.add(Slider::new(&mut self.fade, Config::FADE_RANGE).step_by(0.01));
        });

        if ui.add(Self::new_button("Reset field")).clicked() {
            self.reset_requested = true;
        }

        ui.label(Self::new_text(&format!(
            "Generation: {}\nPopulation: {}",
            self.generation,
            self.grid.population(),
        )));
    }

    fn draw_appearance_controls(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, 5.0..=480.0).logarithmic(true));
        });
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            let aw = ui.available_width();

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_render_controls(ui);
                    });

                    // to adjust the bounds
                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_appearance_controls(ui);
                    });

                    // to adjust the bounds
                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });
        });
    }

    /// Blend the background over the whole framebuffer; live cells drawn in
    /// earlier frames decay toward it at a rate set by the fade parameter.
    fn fade_pass(&mut self) {
        let alpha = (0.9 - self.fade * 0.01).clamp(0., 1.);
        if alpha == 0. {
            return;
        }
        let background = self.background;
        for px in self.canvas.iter_mut() {
            *px = blend(*px, background, alpha);
        }
    }

    /// Paint every live cell as a filled square, centered on the canvas,
    /// with the hue drifting a little further every frame.
    fn draw_cells(&mut self) {
        let [w, h] = self.canvas_size;
        let (cols, rows) = (self.grid.cols(), self.grid.rows());
        let cell = self.cell_size;
        let off_x = w.saturating_sub(cols * cell) / 2;
        let off_y = h.saturating_sub(rows * cell) / 2;

        let hue = (self.hue + self.frame as f32 * Config::HUE_DRIFT).rem_euclid(360.);
        let color = Color32::from(Hsva::new(hue / 360., 1., 1., 1.));

        for y in 0..rows {
            for x in 0..cols {
                if !self.grid.get(x, y) {
                    continue;
                }
                let (px0, py0) = (off_x + x * cell, off_y + y * cell);
                for py in py0..(py0 + cell).min(h) {
                    for px in px0..(px0 + cell).min(w) {
                        self.canvas[px + py * w] = color;
                    }
                }
            }
        }
    }

    fn draw_life_field(&mut self, ui: &mut Ui, field_size: Vec2) {
        let size_px = [field_size.x.max(1.) as usize, field_size.y.max(1.) as usize];
        // A size mismatch means the window was resized (or this is the
        // first frame); both re-seed, like an explicit reset.
        if self.reset_requested || size_px != self.canvas_size {
            self.reset(size_px);
            self.reset_requested = false;
        }

        self.fade_pass();
        self.draw_cells();

        let ci = ColorImage {
            size: self.canvas_size,
            pixels: self.canvas.clone(),
        };
        let texture_options = TextureOptions {
            magnification: TextureFilter::Nearest,
            minification: TextureFilter::Linear,
            wrap_mode: TextureWrapMode::ClampToEdge,
        };
        self.texture.set(ci, texture_options);

        let source = SizedTexture::new(self.texture.id(), field_size);
        let response = ui.add(Image::from_texture(source).sense(Sense::click()));
        if response.clicked() {
            self.reset_requested = true;
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let field_size = vec2(
            (area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN).max(1.),
            area.y.max(1.),
        );
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space((ui.available_width() - field_size.x).max(0.));

            ui.vertical_centered(|ui| {
                self.draw_life_field(ui, field_size);
            });
        });
    }
}
