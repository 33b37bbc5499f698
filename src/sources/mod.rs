//! Dataset catalog.
//!
//! # Data Flow
//! ```text
//! GET /api/labor-data/{id}
//!     → catalog.rs (parse id into DataSource)
//!     → SourceTable (DataSource → upstream URL)
//!     → upstream client
//! ```

pub mod catalog;

pub use catalog::{DataSource, SourceError, SourceTable};
