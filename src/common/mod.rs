pub mod commands;
pub mod error;
pub mod events;
pub mod types;

pub use commands::ApiCommand;
pub use error::BoardError;
pub use events::ApiEvent;
pub use types::{HealthReport, HealthStatus, Message, MessageId, NewMessage};
