//! Core use-case services.
//!
//! # Responsibility
//! - Wrap repository queries into use-case level APIs.
//! - Keep outer layers decoupled from storage details.

pub mod article_service;
