pub mod common;
pub mod error;

// Session and account types
pub mod models;

// IDMAWA domain modules (canonical locations for all admission domain types)
pub mod department;
pub mod document;
pub mod matrix;
pub mod stats;

pub use common::*;
pub use error::*;
pub use models::*;

// Re-export all domain types
pub use department::*;
pub use document::*;
pub use matrix::*;
pub use stats::*;
