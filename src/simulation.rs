use std::time::Duration;

use legion::{IntoQuery, Resources, Schedule, World};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::body::Body;
use crate::components::{Bounds, SimClock};
use crate::config::SceneConfig;
use crate::pointer::{PointerEvent, PointerState};
use crate::systems as sys;

/// Owns the bodies (as legion entities) and the pointer state.
///
/// The pointer lives in `self.pointer` and is republished into the legion
/// resources after every event, systems only ever read that copy.
pub struct Simulation {
    world: World,
    resources: Resources,
    schedule: Schedule,
    resize_schedule: Schedule,
    pointer: PointerState,
    bounds: Bounds,
}

impl Simulation {
    pub fn initialize(config: &SceneConfig, bounds: Bounds) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut world = World::default();

        for _ in 0..config.body_count {
            let _ = world.push((Body::random(&mut rng, bounds, config.physics.color_floor),));
        }

        let pointer = PointerState::new(config.trail_length);

        let mut resources = Resources::default();
        resources.insert(bounds);
        resources.insert(config.physics);
        resources.insert(SimClock::default());
        resources.insert(pointer.clone());

        let schedule = Schedule::builder()
            .add_system(sys::advance_bodies_system())
            .build();

        let resize_schedule = Schedule::builder()
            .add_system(sys::clamp_to_bounds_system())
            .build();

        tracing::debug!(
            bodies = config.body_count,
            seed = config.seed,
            width = bounds.width,
            height = bounds.height,
            "simulation initialized"
        );

        Self {
            world,
            resources,
            schedule,
            resize_schedule,
            pointer,
            bounds,
        }
    }

    /// Advances every body by one frame. `now` is time since start.
    pub fn step(&mut self, now: Duration) {
        self.resources.insert(SimClock(now));
        self.schedule.execute(&mut self.world, &mut self.resources);
    }

    pub fn resize(&mut self, bounds: Bounds) {
        tracing::debug!(width = bounds.width, height = bounds.height, "resize");

        self.bounds = bounds;
        self.resources.insert(bounds);
        self.resize_schedule
            .execute(&mut self.world, &mut self.resources);
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.pointer.apply(event);
        self.resources.insert(self.pointer.clone());
    }

    /// In insertion order, which is also draw order.
    pub fn bodies(&self) -> Vec<Body> {
        <&Body>::query().iter(&self.world).copied().collect()
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn body_count(&self) -> usize {
        self.world.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glam::DVec2;

    fn scene(count: usize, seed: u64) -> SceneConfig {
        SceneConfig {
            body_count: count,
            seed,
            ..Default::default()
        }
    }

    #[test]
    fn initial_population_fits_bounds() {
        let bounds = Bounds::new(800.0, 600.0);
        let sim = Simulation::initialize(&scene(20, 3), bounds);

        let bodies = sim.bodies();
        assert_eq!(bodies.len(), 20);
        assert_eq!(sim.body_count(), 20);

        for b in &bodies {
            let r = b.radius();
            assert!(r - b.pos.x <= 0.0 && 0.0 <= bounds.width - r - b.pos.x);
            assert!(r - b.pos.y <= 0.0 && 0.0 <= bounds.height - r - b.pos.y);
        }
    }

    #[test]
    fn same_seed_same_scene() {
        let bounds = Bounds::new(640.0, 480.0);
        let a = Simulation::initialize(&scene(8, 99), bounds);
        let b = Simulation::initialize(&scene(8, 99), bounds);

        assert_eq!(a.bodies(), b.bodies());
    }

    #[test]
    fn step_matches_per_body_advance() {
        let bounds = Bounds::new(800.0, 600.0);
        let config = scene(12, 5);
        let mut sim = Simulation::initialize(&config, bounds);
        sim.handle_pointer(PointerEvent::Entered);
        sim.handle_pointer(PointerEvent::Moved { x: 400.0, y: 300.0 });

        let mut expected = sim.bodies();
        for frame in 1..=90u64 {
            let now = Duration::from_millis(frame * 16);
            sim.step(now);
            for b in &mut expected {
                b.advance(sim.pointer(), bounds, now, &config.physics);
            }
        }

        assert_eq!(sim.bodies(), expected);
    }

    #[test]
    fn population_is_constant_and_collision_flags_clear() {
        let mut sim = Simulation::initialize(&scene(20, 11), Bounds::new(300.0, 200.0));

        for frame in 0..600u64 {
            sim.step(Duration::from_millis(frame * 16));

            let bodies = sim.bodies();
            assert_eq!(bodies.len(), 20);
            for b in bodies {
                assert!(!b.colliding);
                for c in [b.color.r, b.color.g, b.color.b] {
                    assert!(c >= 32);
                }
            }
        }
    }

    #[test]
    fn resize_clamps_high_side_only() {
        let mut sim = Simulation::initialize(&scene(20, 8), Bounds::new(800.0, 600.0));

        sim.resize(Bounds::new(200.0, 100.0));

        assert_eq!(sim.bounds(), Bounds::new(200.0, 100.0));
        for b in sim.bodies() {
            assert!(b.pos.x <= 200.0 - b.radius());
            assert!(b.pos.y <= 100.0 - b.radius());
        }
    }

    #[test]
    fn pointer_events_reach_bodies() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut sim = Simulation::initialize(&scene(0, 0), bounds);
        let _ = sim.world.push((Body::new(
            DVec2::new(300.0, 300.0),
            DVec2::ZERO,
            10.0,
            sfml::graphics::Color::rgb(200, 200, 200),
            32,
        ),));

        sim.handle_pointer(PointerEvent::Entered);
        sim.handle_pointer(PointerEvent::Moved { x: 400.0, y: 300.0 });
        sim.handle_pointer(PointerEvent::Pressed);
        sim.step(Duration::from_millis(16));

        assert_eq!(sim.body_count(), 1);

        let b = sim.bodies()[0];
        assert!(b.vel.x < 0.0, "pressed pointer should push away, got {:?}", b.vel);
        assert_eq!(sim.pointer().trail().len(), 1);

        sim.handle_pointer(PointerEvent::Left);
        assert!(sim.pointer().trail().is_empty());
    }
}
