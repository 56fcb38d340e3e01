//! Find likely hiring managers for a job posting.
//!
//! The pipeline is linear: fetch the posting's visible text, ask an LLM who
//! the hiring manager probably is, then search LinkedIn profiles for that
//! person via a Google search API.

pub mod auth;
pub mod chat;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod scraper;
pub mod search;
pub mod utils;
