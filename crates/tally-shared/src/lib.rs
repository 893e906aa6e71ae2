//! # tally-shared
//!
//! Domain models and API payload types shared between the store and the
//! HTTP server.  Everything here is plain data: entities derive `Serialize`
//! and `Deserialize` so they can be handed straight to the API layer, and
//! all wire names are camelCase to match the JSON contract consumed by the
//! dashboard views.

pub mod dto;
pub mod models;
pub mod types;

pub use dto::*;
pub use models::*;
pub use types::*;
