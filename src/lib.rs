//! # unifi-legacy
//!
//! A Rust client library for the legacy (v2/v3-generation) Ubiquiti UniFi
//! Controller JSON API.
//!
//! This crate wraps the controller's cookie-authenticated HTTP endpoints with
//! an async interface: listing access points, clients, users, WLAN configs,
//! alerts, events and statistics, plus the command endpoints for blocking or
//! kicking clients, restarting access points, archiving alerts and pulling a
//! settings backup.
//!
//! Controller records are vendor-defined and change between firmware
//! versions, so list operations return them as opaque JSON maps
//! ([`Record`]) rather than modeled structs.
//!
//! ## Example
//!
//! ```rust,no_run
//! use unifi_legacy::Controller;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // `build()` performs the login request; the returned controller is
//!     // ready to use.
//!     let controller = Controller::builder()
//!         .host("unifi.example.com")
//!         .username("admin")
//!         .password("secret")
//!         .version("v3")
//!         .site("default")
//!         .accept_invalid_certs(true)
//!         .build()
//!         .await?;
//!
//!     for client in controller.stations().list().await? {
//!         let mac = client.get("mac").and_then(|v| v.as_str()).unwrap_or("?");
//!         let rssi = client.get("rssi").and_then(|v| v.as_i64()).unwrap_or(0);
//!         println!("{mac} rssi={rssi}");
//!     }
//!
//!     // Kick a weak client so it reassociates.
//!     controller.stations().reconnect("00:11:22:33:44:55").await?;
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod models;

pub use api::backup::{BackupApi, DEFAULT_BACKUP_FILE};
pub use api::device::DeviceApi;
pub use api::event::EventApi;
pub use api::stat::StatApi;
pub use api::station::StationApi;
pub use api::wlan::WlanApi;
pub use client::{Controller, ControllerBuilder};
pub use error::{ControllerError, ControllerResult, UrlParseError};
pub use models::api_response::ApiMeta;
pub use models::auth::LoginRequest;
pub use models::record::Record;
