// Bookmark lifecycle domain: tracking, enrichment, and event processing

pub mod enrichment;
pub mod lifecycle;
pub mod pipeline;

pub use lifecycle::{BookmarkStatus, LifecycleTracker};
pub use pipeline::process_webhook;
