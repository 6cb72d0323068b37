//! Core data model for Weft (pure Rust): memory words, mover geometry,
//! FIFO streams between pipeline stages.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod channel;
pub mod layout;
pub mod word;

pub use channel::{stream, StreamReader, StreamWriter};
pub use layout::MemLayout;
pub use word::Word;
