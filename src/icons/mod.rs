//! Emoji used in the Slack message.

// CI status glyphs
pub const CI_SUCCESS: &str = "✅";
pub const CI_FAILURE: &str = "❌";

// Marks PRs carrying a migration label
pub const MIGRATION_WARNING: &str = "⚠️";

pub const HEADER: &str = "😎";

// List/UI elements
pub const BULLET: &str = "•";
