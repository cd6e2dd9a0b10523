//! CLI command implementations.

mod config;
mod doctor;
mod find;
mod info;
mod transcript;

pub use config::run_config;
pub use doctor::run_doctor;
pub use find::run_find;
pub use info::run_info;
pub use transcript::run_transcript;
