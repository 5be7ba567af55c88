//! Pluggable key-value storage substrate.
//!
//! The cache layers its envelope format on top of a synchronous string
//! store; the substrate is injected rather than reached as a global so
//! tests can substitute an in-memory fake. Write failures are the
//! backend's problem to report (log-and-drop), never the caller's: a
//! failed cache write must not fail the operation that produced the value.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Synchronous string-keyed storage.
///
/// Contract: `read` returns the last value passed to `write` for the key,
/// or `None` if the key was never written or has been removed. The store
/// treats payloads as opaque strings; the envelope format belongs to the
/// cache layer.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn name(&self) -> &'static str;
}
