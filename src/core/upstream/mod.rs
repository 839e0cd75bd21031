//! Upstream API access.
//!
//! A thin wrapper over `reqwest` shared by every tool and resource. It knows
//! nothing about the individual APIs beyond "JSON" or "text" bodies.

mod client;
mod error;

pub use client::UpstreamClient;
pub use error::{UpstreamError, UpstreamResult};
