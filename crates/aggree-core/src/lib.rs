pub mod actions;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod notifications;
pub mod reducer;
pub mod router;
pub mod session;
pub mod state;
pub mod store;
pub mod upload;

pub use actions::*;
pub use reducer::*;
pub use session::*;
pub use state::*;
pub use store::*;

pub use config::Config;
pub use error::ConfigError;
pub use error::ExportError;
