use std::time::Duration;

use clap::Parser;

use crate::error::Error;

/// Command line options.
#[derive(Parser, Debug, Clone)]
#[command(name = "driftballs", version, about = "Bouncing bodies that drift around the pointer")]
pub struct Args {
    /// Number of bodies
    #[arg(short = 'n', long, default_value_t = 20)]
    pub bodies: usize,

    /// Number of pointer positions kept in the trail
    #[arg(short, long, default_value_t = 10)]
    pub trail: usize,

    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Seed for body placement, random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Frame rate limit, 0 disables it
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Show the info window at startup (toggle with F1)
    #[arg(long)]
    pub overlay: bool,
}

/// Interaction and damping constants shared by every body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsConfig {
    pub min_distance: f64,
    pub max_distance: f64,
    pub attraction: f64,
    /// Used instead of `attraction` while the pointer is pressed, and pushes away.
    pub repulsion: f64,
    /// Upper bound only, see [`crate::body::Body::attract`].
    pub velocity_clamp: f64,
    pub friction_interval: Duration,
    pub color_floor: u8,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            min_distance: 75.0,
            max_distance: 150.0,
            attraction: 0.1,
            repulsion: 2.0,
            velocity_clamp: 4.0,
            friction_interval: Duration::from_millis(500),
            color_floor: 32,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.min_distance >= 0.0 && self.min_distance < self.max_distance) {
            return Err(Error::InvalidConfig(format!(
                "attraction ring needs 0 <= min < max, got {}..{}",
                self.min_distance, self.max_distance
            )));
        }

        Ok(())
    }
}

/// Everything needed to populate a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub body_count: usize,
    pub trail_length: usize,
    pub seed: u64,
    pub physics: PhysicsConfig,
}

impl SceneConfig {
    pub fn from_args(args: &Args) -> Result<Self, Error> {
        let config = Self {
            body_count: args.bodies,
            trail_length: args.trail,
            seed: args.seed.unwrap_or_else(rand::random),
            physics: PhysicsConfig::default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.trail_length == 0 {
            return Err(Error::InvalidConfig("trail length must be at least 1".into()));
        }

        self.physics.validate()
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            body_count: 20,
            trail_length: 10,
            seed: 0,
            physics: PhysicsConfig::default(),
        }
    }
}
