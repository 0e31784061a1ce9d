//! Sitewatch app: startup configuration, gateway seam and event dispatch.
pub mod config;
pub mod gateway;
pub mod handler;
pub mod logging;

pub use config::WatchConfig;
pub use gateway::{Gateway, GatewayError, GatewayNotifier, LoggingGateway};
pub use handler::handle_event;
