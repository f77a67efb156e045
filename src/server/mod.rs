//! Server-side application for the bot dashboard.
//!
//! Layered architecture, top to bottom:
//!
//! - `controller` - HTTP handlers: extraction, auth guard, response shaping
//! - `service` - business logic and orchestration over domain models
//! - `data` - repositories translating domain models to entity operations
//! - `model` - domain models, parameter models, and API DTOs
//! - `middleware` - authorization guard and typed session wrappers
//! - `error` - application error hierarchy with HTTP response mapping
//! - `config`, `state`, `startup`, `router` - process wiring

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
