// Utility modules

pub mod background;

pub use background::{generate_in_background, TaskResult};
