use legion::system;

use crate::body::Body;
use crate::components::{Bounds, SimClock};
use crate::config::PhysicsConfig;
use crate::pointer::PointerState;

#[system(for_each)]
pub fn advance_bodies(
    body: &mut Body,
    #[resource] pointer: &PointerState,
    #[resource] bounds: &Bounds,
    #[resource] clock: &SimClock,
    #[resource] physics: &PhysicsConfig,
) {
    body.advance(pointer, *bounds, clock.0, physics);
}

#[system(for_each)]
pub fn clamp_to_bounds(body: &mut Body, #[resource] bounds: &Bounds) {
    body.clamp_to(*bounds);
}
