// beamlab-api: Async Rust client for the Beamforming Lab simulation backend

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::SimulatorClient;
pub use error::Error;
pub use transport::TransportConfig;
