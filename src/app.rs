pub mod filter;
pub mod reminder;

pub use filter::build_display_blocks;
pub use reminder::{run, Outcome, Reminder};
