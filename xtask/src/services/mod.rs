pub mod terraform;
pub mod utils;
