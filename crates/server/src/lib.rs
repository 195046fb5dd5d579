#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod seo;

#[cfg(feature = "server")]
pub mod telemetry;

pub mod api;
pub mod mock;
