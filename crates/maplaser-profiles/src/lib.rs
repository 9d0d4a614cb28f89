//! Laser machine and material profiles
//!
//! A profile binds each of the eight feature categories to the power, speed,
//! and (for fills) raster density the laser uses for it.

pub mod error;
pub mod loader;
pub mod model;

pub use error::{ProfileError, ProfileResult};
pub use loader::{available_profiles, find_profile, load_profile, PROFILE_EXTENSIONS};
pub use model::{
    LaserOperation, LaserProfile, Material, DENSITY_RANGE, POWER_RANGE, SPEED_RANGE,
};
