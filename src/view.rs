pub mod blocks;
pub mod payload;

pub use blocks::{Accessory, Block, Text};
pub use payload::Payload;
