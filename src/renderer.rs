//! Scene drawing, plus the pre-rendered halo texture used by the sfml surface.

use glam::DVec2;
use sfml::SfResult;
use sfml::cpp::FBox;
use sfml::graphics::*;

use crate::body::Body;

/// Opacity of the softened circle drawn under each body.
pub const HALO_ALPHA: f32 = 0.7;

pub const TRAIL_COLOR: Color = Color {
    r: 128,
    g: 128,
    b: 128,
    a: 255,
};

pub const TRAIL_WIDTH: f32 = 5.0;

/// Minimal 2D target the scene is drawn onto.
pub trait Surface {
    fn clear(&mut self);

    /// `alpha` in 0..=1 multiplies the color's own alpha.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color, alpha: f32, soft: bool);

    fn stroke_path(&mut self, points: &[DVec2], color: Color, alpha: f32, width: f32);
}

/// Paints one frame: bodies in order, then the trail on top.
pub fn render(surface: &mut impl Surface, bodies: &[Body], trail: &[DVec2], trail_capacity: usize) {
    surface.clear();

    for body in bodies {
        surface.fill_circle(body.pos, body.radius(), body.color, HALO_ALPHA, true);
        surface.fill_circle(body.pos, body.radius(), body.color, 1.0, false);
    }

    // each stroke redraws the path so far, so older segments pile up fainter strokes
    let capacity = trail_capacity.max(1) as f32;
    for i in 0..trail.len() {
        let alpha = 1.0 - i as f32 / capacity;
        surface.stroke_path(&trail[..=i], TRAIL_COLOR, alpha, TRAIL_WIDTH);
    }
}

/// Radial falloff image for the soft circle. The opaque core covers
/// `1 / spread` of the radius, the rest fades out.
pub fn halo(radius: u32, spread: f32) -> SfResult<FBox<Image>> {
    let mut render_target = RenderTexture::new(radius * 2, radius * 2)?;

    render_target.clear(Color::TRANSPARENT);

    const RINGS: u32 = 32;
    let core = radius as f32 / spread;
    let mut circle = CircleShape::new(0.0, 128);

    // outermost first, each ring only adds a sliver of alpha
    for ring in (0..RINGS).rev() {
        let t = ring as f32 / (RINGS - 1) as f32;
        let r = core + (radius as f32 - core) * t;
        let alpha = (255.0 * (1.0 - t) / RINGS as f32 * 4.0).clamp(1.0, 255.0) as u8;

        circle.set_radius(r);
        circle.set_origin((r, r));
        circle.set_position((radius as f32, radius as f32));
        circle.set_fill_color(Color::rgba(255, 255, 255, alpha));
        render_target.draw(&circle);
    }

    circle.set_radius(core);
    circle.set_origin((core, core));
    circle.set_fill_color(Color::WHITE);
    render_target.draw(&circle);

    render_target.set_smooth(true);
    render_target.display();

    render_target.texture().copy_to_image()
}

/// Scales a color's alpha by `alpha` in 0..=1.
pub fn faded(color: Color, alpha: f32) -> Color {
    let a = (color.a as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
    Color::rgba(color.r, color.g, color.b, a)
}
