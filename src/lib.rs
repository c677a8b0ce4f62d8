pub mod config;
pub mod generation;
pub mod handlers;
pub mod state;
pub mod storage;
pub mod types;

pub use crate::config::Config;
pub use crate::generation::*;
pub use crate::handlers::*;
pub use crate::state::AppState;
pub use crate::storage::*;
pub use crate::types::*;
