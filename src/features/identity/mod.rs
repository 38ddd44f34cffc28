mod collector;
mod models;

pub use collector::IdentityCollector;
pub use models::HostIdentity;
