//! Engaging phrases that open every social post.

use crate::kernel::BasePhrasePicker;

/// Catalog of lead-in phrases. One is chosen per publish attempt and shared
/// by every platform rendering of that post.
pub const ENGAGING_PHRASES: [&str; 20] = [
    "💡 Interesting read worth hoarding:",
    "📚 Bookmarked this gem for later:",
    "🔖 Just saved this excellent piece:",
    "💎 Found a treasure worth sharing:",
    "🧠 Brain food I've saved for you:",
    "📌 Pinned this must-read article:",
    "⭐ Star content worth your time:",
    "📑 Filed this under 'brilliant reads':",
    "🔍 Discovered this fascinating insight:",
    "💡 Lightbulb moment in this read:",
    "📋 Added to my collection of great finds:",
    "🌟 Stellar content worth remembering:",
    "📖 Page-turner I've saved for reference:",
    "🧩 Insightful piece worth your attention:",
    "🏆 Top-tier content I'm archiving:",
    "📤 Sharing this remarkable article:",
    "💫 Content that deserves a spotlight:",
    "🔆 Bright ideas worth preserving:",
    "📕 Notable read I've archived:",
    "🗃️ Worth keeping in your knowledge base:",
];

/// Uniform random pick from the catalog.
pub struct RandomPhrasePicker;

impl BasePhrasePicker for RandomPhrasePicker {
    fn pick(&self) -> &'static str {
        ENGAGING_PHRASES[fastrand::usize(..ENGAGING_PHRASES.len())]
    }
}
