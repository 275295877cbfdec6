//! Router assembly.

mod api;
mod site;

pub use api::api_routes;
pub use site::site_routes;
