// Hoarder Social Relay - Server Core
//
// This crate turns Hoarder webhook events into social media posts. A
// bookmark is tracked from `created` through `crawled` to `ai tagged`;
// tagging triggers summary enrichment, post composition, and a fan-out
// publish to every configured platform.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
