use std::time::Instant;

use egui_sfml::SfEgui;
use egui_sfml::egui;

use glam::DVec2;
use sfml::{graphics::*, system::*, window::*};

use crate::components::Bounds;
use crate::config::{Args, SceneConfig};
use crate::error::Error;
use crate::input::{self, Overlay};
use crate::renderer::{self, Surface};
use crate::simulation::Simulation;

/// Halo texture radius in pixels, before scaling.
const HALO_RADIUS: u32 = 100;

/// How far the halo reaches past the body, as a multiple of its radius.
const HALO_SPREAD: f32 = 1.6;

/// The sfml window seen through [`Surface`].
struct WindowSurface<'a> {
    window: &'a mut RenderWindow,
    halo: &'a Texture,
}

impl Surface for WindowSurface<'_> {
    fn clear(&mut self) {
        self.window.clear(Color::BLACK);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color, alpha: f32, soft: bool) {
        let color = renderer::faded(color, alpha);
        let position = (center.x as f32, center.y as f32);

        if soft {
            let core = HALO_RADIUS as f32 / HALO_SPREAD;
            let scale = radius as f32 / core;

            let mut sprite = Sprite::with_texture(self.halo);
            sprite.set_origin((HALO_RADIUS as f32, HALO_RADIUS as f32));
            sprite.set_scale((scale, scale));
            sprite.set_position(position);
            sprite.set_color(color);

            self.window.draw(&sprite);
        } else {
            let mut shape = CircleShape::new(radius as _, 48);
            shape.set_origin((radius as f32, radius as f32));
            shape.set_position(position);
            shape.set_fill_color(color);

            self.window.draw(&shape);
        }
    }

    fn stroke_path(&mut self, points: &[DVec2], color: Color, alpha: f32, width: f32) {
        let mut segment = RectangleShape::new();
        segment.set_fill_color(renderer::faded(color, alpha));
        segment.set_origin((0.0, width / 2.0));

        for pair in points.windows(2) {
            let delta = pair[1] - pair[0];

            segment.set_size((delta.length() as f32, width));
            segment.set_position((pair[0].x as f32, pair[0].y as f32));
            segment.set_rotation(delta.y.atan2(delta.x).to_degrees() as f32);

            self.window.draw(&segment);
        }
    }
}

pub fn run(args: &Args, config: SceneConfig) -> Result<(), Error> {
    let halo_image = renderer::halo(HALO_RADIUS, HALO_SPREAD)?;
    let size = (HALO_RADIUS * 2) as i32;
    let mut halo = Texture::from_image(&halo_image, Rect::new(0, 0, size, size))?;
    halo.set_smooth(true);

    let mut window = RenderWindow::new(
        (args.width, args.height),
        "Driftballs",
        Style::DEFAULT,
        &ContextSettings {
            antialiasing_level: 4,
            ..Default::default()
        },
    )?;
    window.set_framerate_limit(args.fps);

    let mut sfegui = SfEgui::new(&window);
    let mut sim = Simulation::initialize(&config, window.size().into());

    let mut clock = Clock::start()?;
    let started = Instant::now();
    let mut overlay = Overlay::new(args.overlay);

    tracing::info!(bodies = sim.body_count(), fps = args.fps, "window open");

    while window.is_open() {
        let dt = clock.restart();

        while let Some(event) = window.poll_event() {
            if overlay.forwards_events() {
                sfegui.add_event(&event);
            }

            match event {
                Event::Closed => window.close(),

                Event::Resized { width, height } => {
                    let view = View::from_rect(FloatRect::new(0.0, 0.0, width as _, height as _))?;
                    window.set_view(&view);
                    sim.resize(Bounds::new(width as _, height as _));
                }

                Event::KeyPressed { code: Key::F1, .. } => overlay.toggle(),

                _ => {}
            }

            for pointer_event in input::pointer_events(&event, sim.pointer().is_inside()) {
                if overlay.accepts(pointer_event) {
                    sim.handle_pointer(pointer_event);
                }
            }
        }

        let pointer = sim.pointer();
        renderer::render(
            &mut WindowSurface {
                window: &mut *window,
                halo: &halo,
            },
            &sim.bodies(),
            pointer.trail(),
            pointer.trail_capacity(),
        );

        if overlay.visible {
            let frame_time = dt.as_seconds();
            let pointer = sim.pointer();

            let di = sfegui
                .run(&mut window, |_rw, ctx| {
                    egui::Window::new("Info")
                        .default_pos((10.0, 10.0))
                        .collapsible(true)
                        .open(&mut overlay.visible)
                        .resizable(false)
                        .show(ctx, |ui| {
                            ui.label(format!("FPS: {:.0}", 1.0 / frame_time));
                            ui.label(format!("Frame Time: {:.3}ms", frame_time * 1000.0));
                            ui.separator();
                            ui.label(format!("Bodies: {}", sim.body_count()));
                            ui.label(format!("Seed: {}", config.seed));
                            let Bounds { width, height } = sim.bounds();
                            ui.label(format!("Canvas: {width:.0}x{height:.0}"));
                            ui.separator();
                            match pointer.position() {
                                Some(DVec2 { x, y }) => ui.label(format!("Pointer: {x:.0}, {y:.0}")),
                                None => ui.label("Pointer: -"),
                            };
                            ui.label(format!(
                                "Inside: {}  Pressed: {}",
                                pointer.is_inside(),
                                pointer.is_pressed()
                            ));
                            ui.label(format!(
                                "Trail: {}/{}",
                                pointer.trail().len(),
                                pointer.trail_capacity()
                            ));
                        });

                    overlay.wants_pointer = ctx.wants_pointer_input();
                })
                .map_err(|e| Error::Overlay(format!("{e:?}")))?;

            sfegui.draw(di, &mut window, None);
        }

        window.display();

        sim.step(started.elapsed());
    }

    tracing::info!("window closed");

    Ok(())
}
