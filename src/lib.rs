//! Course Admin client
//!
//! Typed REST client for the university course administration backend:
//! faculties, majors, subjects with their study times, curricula and books.
//! Responses are normalized from whatever key spelling the backend uses into
//! one canonical record per entity.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod service;
pub mod views;

pub use api::ApiClient;
pub use errors::AppError;
