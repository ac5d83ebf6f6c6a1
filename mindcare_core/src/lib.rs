#![forbid(unsafe_code)]

//! Core domain model and analytics for the MindCare self-tracking system.
//!
//! This crate provides:
//! - Domain types (moods, entries, chat turns, categories)
//! - The in-memory mood log and chat log
//! - Aggregates feeding the dashboard and charts
//! - The keyword-based chat responder
//! - The resource catalog and recommendation blocks
//! - CSV export and configuration

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod store;
pub mod chat;
pub mod classifier;
pub mod analytics;
pub mod session;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use store::EntryStore;
pub use chat::ChatSession;
pub use classifier::{classify, respond, SUGGESTED_PROMPTS};
pub use analytics::{Recommendation, RecommendationRules, Summary, TrendPoint};
pub use session::UserSession;
pub use export::write_csv;
