pub mod dates;

pub use dates::{DateWindow, REVIEW_WINDOW_DAYS};
