pub mod collaborators;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod params;
pub mod resources;
pub mod scheduler;
pub mod systems;

pub use collaborators::*;
pub use components::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use params::*;
pub use resources::*;
pub use scheduler::*;
pub use systems::{clamp_speed, ContactKind};
