pub mod health;
pub mod root;
mod router;
pub mod types;

pub use router::{build_cors_layer, create_router};
