//! # wiz_udp_client
//!
//! An async Rust client for a single Philips Wiz smart light over UDP.
//!
//! Every operation sends one JSON datagram to the device and reads one JSON
//! reply. Numeric parameters are range-checked before anything is sent, and
//! scenes are checked against the device's hardware class.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wiz_udp_client::WizClient;
//!
//! async fn control_light() -> Result<(), wiz_udp_client::Error> {
//!     let client = WizClient::connect("192.168.1.100", 38899).await?;
//!
//!     client.turn_on().await?;
//!     client.set_rgb(0, 0, 255).await?;
//!
//!     let pilot = client.get_pilot().await?;
//!     println!("dimming: {:?}", pilot.result.dimming);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Queries**: pilot state, system, user and model configuration, device info
//! - **Power**: [`WizClient::turn_on`] / [`WizClient::turn_off`]
//! - **Brightness**: 10-100% using [`Brightness`]
//! - **RGB Colors**: any [`Color`], plus raw cool/warm [`White`] channels
//! - **Color Temperature**: 2000K-9000K using [`Kelvin`]
//! - **Scenes**: the [`SceneMode`] catalog, gated by [`Capabilities`]
//! - **Effects**: scene [`Speed`] and dual-head [`Ratio`]
//! - **Locate**: [`WizClient::pulse`] blinks the bulb
//!
//! ## Communication
//!
//! All communication with Wiz bulbs occurs over UDP on port 38899. The bulbs must
//! be on the same local network and ideally have static IP addresses assigned.
//! A client owns one connected socket; requests on it are serialized and each
//! read is bounded by [`ClientConfig::read_timeout`].
//!
//! ## Feature Flags
//!
//! - `runtime-tokio` (default): Use the tokio async runtime
//! - `runtime-async-std`: Use the async-std runtime
//! - `runtime-smol`: Use the smol runtime

mod capability;
mod client;
mod config;
mod errors;
mod payload;
mod response;
pub mod runtime;
mod transport;
mod types;

// Re-export public API
pub use capability::{BulbClass, Capabilities};
pub use client::WizClient;
pub use config::ClientConfig;
pub use errors::Error;
pub use payload::{
    Command, Method, Payload, PulseParams, REQUEST_ID, RegistrationParams, StateParams,
};
pub use response::{DeviceError, ModeSet, Response, ResultFields};
pub use transport::{Transport, UdpTransport};
pub use types::{
    Brightness, Color, DW_SCENES, Kelvin, PowerMode, Ratio, SceneMode, Speed, TW_SCENES, White,
};
