//! Intake module - the water log and its mutation service.

mod intake_model;
mod intake_service;
mod intake_traits;

pub use intake_model::{WaterLog, WaterPreset, WATER_PRESETS};
pub use intake_service::{validate_new_intake, IntakeService};
pub use intake_traits::{IntakeRepositoryTrait, IntakeServiceTrait};
