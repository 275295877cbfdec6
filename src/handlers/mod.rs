//! HTTP handlers for the pet API and the static site.

pub mod community;
pub mod health;
pub mod lost_found;
pub mod pets;
pub mod site;
