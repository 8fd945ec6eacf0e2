// Social posting domain: composition, per-platform formatting, fan-out

pub mod bluesky_post;
pub mod compose;
pub mod linkedin_post;
pub mod publisher;

pub use compose::SocialPost;
pub use publisher::{publish_all, PublishReport};
