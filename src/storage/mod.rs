//! Document sink implementations

pub mod file;
pub mod in_memory;

pub use file::FileDocumentSink;
pub use in_memory::InMemoryDocumentSink;
