//! Guardboard Test Utils
//!
//! Shared testing utilities for the guardboard dashboard. Provides a builder
//! pattern for creating test contexts backed by in-memory SQLite databases,
//! plus entity factories with sensible defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::BlacklistEntry;
//!
//! #[tokio::test]
//! async fn test_blacklist_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(BlacklistEntry)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
