pub mod fs;
pub mod interface;
pub mod memory;

pub use fs::FsStorage;
pub use interface::TextStorage;
pub use memory::MemoryStorage;
