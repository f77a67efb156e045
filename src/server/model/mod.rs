//! Domain models, operation parameters, and API DTOs.
//!
//! Domain models are the service layer's working types; they convert from
//! database entities at the repository boundary and into DTOs at the
//! controller boundary. Parameter types carry the fields an operation needs
//! without exposing entity models above the data layer.

pub mod api;
pub mod blacklist;
pub mod discord;
pub mod guild_settings;
pub mod stats;
