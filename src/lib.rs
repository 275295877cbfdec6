//! Pet adoption backend: pets, adoptions, community posts and lost/found reports over SQLite.

pub mod app;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;

pub use app::build_app;
pub use error::{AppError, ConfigError};
pub use identity::{AssertedName, IdentityProvider, UserIdentity};
pub use settings::{Settings, SiteSettings};
pub use state::AppState;
pub use store::{connect, connect_in_memory, ensure_tables};
