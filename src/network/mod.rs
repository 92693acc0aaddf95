pub mod api;
pub mod worker;

pub use api::{BoardApi, HttpBoardApi};
pub use worker::ApiWorker;
