//! Storage operations behind the request handlers. Each service is stateless and takes the pool per call.

mod community;
mod lost_found;
mod pets;
pub use community::CommunityService;
pub use lost_found::LostFoundService;
pub use pets::{Adopted, PetService};
