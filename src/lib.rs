//! Desktop client for a small message board: post, list and delete short
//! text messages against the board's HTTP API.

pub mod common;
pub mod config;
pub mod headless;
pub mod network;
pub mod session;
pub mod ui;

pub use common::{ApiCommand, ApiEvent, BoardError, HealthStatus, Message, MessageId};
pub use network::{ApiWorker, BoardApi, HttpBoardApi};
pub use session::BoardSession;
pub use ui::{BoardApp, BoardState};
