#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod config;
pub mod constants;
pub mod firebase;
mod names;

pub use board::{Board, NodeMcuPin, PhysicalPin, Pin, PinMap, Role};
pub use config::{DeviceConfig, DhtType, Secret, CONFIG};
