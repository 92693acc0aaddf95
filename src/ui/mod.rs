pub mod app;
pub mod components;
pub mod state;

pub use app::BoardApp;
pub use state::BoardState;
