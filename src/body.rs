use std::time::Duration;

use glam::DVec2;
use rand::Rng;
use sfml::graphics::Color;

use crate::components::Bounds;
use crate::config::PhysicsConfig;
use crate::pointer::PointerState;

/// One bouncing circle.
///
/// Stored as a single legion component, see [`crate::systems::advance_bodies`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    radius: f64,
    pub base_color: Color,
    pub color: Color,
    friction: f64,
    pub colliding: bool,
    pub last_friction: Duration,
}

impl Body {
    /// Larger bodies get a smaller `friction` factor, so they lose more speed per tick.
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, base_color: Color, color_floor: u8) -> Self {
        Self {
            pos,
            vel,
            radius,
            base_color,
            color: Color::rgb(color_floor, color_floor, color_floor),
            friction: 1.0 - radius * 0.075 / 25.0,
            colliding: false,
            last_friction: Duration::ZERO,
        }
    }

    pub fn random(rng: &mut impl Rng, bounds: Bounds, color_floor: u8) -> Self {
        let radius = rng.gen_range(5.0..=25.0);

        let mut place = |extent: f64| {
            let span = extent - 2.0 * radius;
            // too small to fit: park on the radius and let it sit outside
            if span > 0.0 {
                rng.gen_range(0.0..span) + radius
            } else {
                radius
            }
        };

        let pos = DVec2::new(place(bounds.width), place(bounds.height));

        let base_color = Color::rgb(
            rng.gen_range(155..=255),
            rng.gen_range(155..=255),
            rng.gen_range(155..=255),
        );

        let vel = DVec2 {
            x: rng.gen_range(-5.0..=5.0),
            y: rng.gen_range(-5.0..=5.0),
        };

        Self::new(pos, vel, radius, base_color, color_floor)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Runs one frame. Velocity changes land before integration, so they
    /// show up in this frame's displacement.
    pub fn advance(
        &mut self,
        pointer: &PointerState,
        bounds: Bounds,
        now: Duration,
        physics: &PhysicsConfig,
    ) {
        self.check_wall_collision(bounds);
        self.update_color(physics.color_floor);
        self.attract(pointer, physics);
        self.apply_friction(now, physics.friction_interval);

        self.pos += self.vel;
    }

    /// Flips velocity on every axis the body pokes out of. No position
    /// correction, a body that stays outside keeps flipping.
    pub fn check_wall_collision(&mut self, bounds: Bounds) {
        let r = self.radius;

        if self.pos.x - r < 0.0 || self.pos.x + r > bounds.width {
            self.vel.x = -self.vel.x;
            self.colliding = true;
        }

        if self.pos.y - r < 0.0 || self.pos.y + r > bounds.height {
            self.vel.y = -self.vel.y;
            self.colliding = true;
        }
    }

    pub fn update_color(&mut self, floor: u8) {
        if self.colliding {
            self.color = self.base_color;
            self.colliding = false;
            return;
        }

        let fade = |c: u8| c.saturating_sub(1).max(floor);

        self.color.r = fade(self.color.r);
        self.color.g = fade(self.color.g);
        self.color.b = fade(self.color.b);
    }

    /// Pulls toward the pointer inside the attraction ring, pushes away
    /// while pressed. Only the upper side of the velocity is clamped.
    pub fn attract(&mut self, pointer: &PointerState, physics: &PhysicsConfig) {
        let Some(target) = pointer.active_position() else {
            return;
        };

        let delta = target - self.pos;
        let distance = delta.length();

        if !(distance > physics.min_distance && distance < physics.max_distance) {
            return;
        }

        let (strength, direction) = if pointer.is_pressed() {
            (physics.repulsion, -1.0)
        } else {
            (physics.attraction, 1.0)
        };

        let force = strength / distance;
        let limit = physics.velocity_clamp;

        self.vel.x = (self.vel.x + delta.x * force * direction).min(limit);
        self.vel.y = (self.vel.y + delta.y * force * direction).min(limit);
    }

    /// Returns whether damping was applied.
    pub fn apply_friction(&mut self, now: Duration, interval: Duration) -> bool {
        if now.saturating_sub(self.last_friction) < interval {
            return false;
        }

        self.vel *= self.friction;
        self.last_friction = now;

        true
    }

    /// Pulls the body back inside after a shrink. The low side is left alone.
    pub fn clamp_to(&mut self, bounds: Bounds) {
        self.pos.x = self.pos.x.min(bounds.width - self.radius);
        self.pos.y = self.pos.y.min(bounds.height - self.radius);
    }
}
