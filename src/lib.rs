//! Proposal Assistant - Grant proposal drafting for a national imaging biobank
//!
//! This crate turns a structured proposal record into a complete Markdown
//! grant proposal, scores its submission readiness, and exports the draft
//! to Word and HTML.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
