//! Data Transfer Objects (DTOs) for HTTP API contract.
//!
//! These types define the stable HTTP API contract with explicit serialization
//! control. They decouple internal domain types from external API representation.

mod json;
pub mod task;

pub use json::ApiJson;
pub use task::{ClearCompletedResponse, DeleteTaskResponse, TaskDto, TaskRequest};
