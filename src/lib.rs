//! Locomotion and collision core for a first/third-person parkour runner.
//!
//! The crate owns the simulation only: player movement over a course of
//! axis-aligned volumes, checkpoints and hazards, wall running, an arrow
//! gauntlet and the run timer. Windowing, rendering, audio and menus live in
//! the host, which drives [`Session::update`] once per frame with a
//! [`TickInput`] and reads back positions, camera placement and stats.

pub mod bounds;
pub mod camera;
pub mod config;
pub mod course;
pub mod input;
pub mod player;
pub mod projectile;
pub mod session;
pub mod stats;

pub use bounds::PlayArea;
pub use camera::CameraRig;
pub use course::{Course, Volume, VolumeKind};
pub use input::TickInput;
pub use player::{Player, TickEvents};
pub use projectile::{Arrow, ArrowField, Launcher};
pub use session::Session;
pub use stats::RunStats;
