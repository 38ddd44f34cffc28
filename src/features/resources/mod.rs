mod collector;
mod models;

pub use collector::ResourceCollector;
pub use models::{ResourceSnapshot, LOAD_SCALE};
