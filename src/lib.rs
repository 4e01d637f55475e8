//! Domain and view-state core of the Rebound Capital Group tax-deed CRM.
//!
//! The crate owns the lead and user collections, authentication, filtering,
//! and screen navigation; persistence goes through a key-value storage
//! client. A presentation layer is expected to embed [`app::App`] and render
//! its state.

pub mod app;
pub mod config;
pub mod model;
pub mod repository;
pub mod service;
pub mod util;
