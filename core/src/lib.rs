//! Core containers for Keel.
//!
//! - **`buffer`**: fixed-capacity FIFO with best-effort bulk insert and filtered drain
//! - **`sink`**: the write side of a drain, accepting values into wider collections
//! - **`registry`**: type-keyed factories with cached/transient scopes and parent lookup
//!
//! Nothing here is thread-safe; callers needing shared access bring their own lock.

pub mod buffer;
pub mod registry;
pub mod sink;

pub use buffer::{BoundedBuffer, BufferError, Capacity};
pub use registry::{RegistryError, Scope, TypeRegistry};
pub use sink::Sink;
