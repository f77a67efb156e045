//! HTTP controllers for all dashboard and API routes.
//!
//! Controllers extract and validate request data, run the authorization
//! guard, delegate to the service layer, and shape responses (JSON DTOs or
//! post-action redirects). No business logic lives here.

pub mod auth;
pub mod blacklist;
pub mod dashboard;
pub mod guild;
pub mod stats;
