//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules, defaults, and validation
//! - **Orchestration**: Coordinating repository calls and Discord API requests
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod blacklist;
pub mod guild;
pub mod stats;
