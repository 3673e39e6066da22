//! Data models
//!
//! Shared between iraka-server and iraka-client. Rust field names are
//! English; the wire names are the Spanish camelCase keys the API has
//! always used.

pub mod activity;
pub mod customer;
pub mod dashboard;
pub mod inventory;
pub mod invoice;
pub mod movement;
pub mod order;
pub mod order_line;
pub mod product;
pub mod session;
pub mod user;

// Re-exports
pub use activity::*;
pub use customer::*;
pub use dashboard::*;
pub use inventory::*;
pub use invoice::*;
pub use movement::*;
pub use order::*;
pub use order_line::*;
pub use product::*;
pub use session::*;
pub use user::*;
