//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate cursor, repositories and analytics into caller-facing APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod journal_service;
