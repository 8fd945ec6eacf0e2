// Business domains
pub mod bookmarks;
pub mod social;
