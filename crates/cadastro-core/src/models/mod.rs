//! Data models for extraction results, lookup payloads and configuration.

pub mod config;
pub mod form;
pub mod lookup;
