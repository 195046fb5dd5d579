pub mod coming_soon;
pub mod error_notice;
pub mod profile;
pub mod redirect;
pub mod role_gate;
