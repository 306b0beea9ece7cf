#![doc = include_str!("../README.md")]

pub mod audit;
mod error;
pub mod params;
pub mod rand;
mod service;
mod state;
mod types;

pub use crate::audit::{AuditSink, GenerationEvent, TracingAuditSink};
pub use crate::error::{Error, Result};
pub use crate::params::{GenerateParams, MAX_COUNT};
pub use crate::rand::{RandSource, ThreadRandom};
pub use crate::service::UuidService;
pub use crate::state::CounterState;
pub use crate::types::{AdminSettings, AdminStats};
