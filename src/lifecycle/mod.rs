//! # System Lifecycle
//!
//! Starts the console's stores, shares one transport between them and shuts them down
//! together.
//!
//! ## The ConsoleSystem Pattern
//!
//! ```rust,ignore
//! let system = ConsoleSystem::new(transport);
//! // ... use system.products, system.countries, ...
//! system.shutdown().await?;
//! ```
//!
//! Every store is built first and handed the transport in `run()`. Construction never
//! touches the network, so a test can swap in a
//! [`MockTransport`](resource_store::mock::MockTransport) without changing anything else.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every store channel
//! 2. **Stores detect closure** - `receiver.recv()` returns `None`; in-flight effects are aborted
//! 3. **Await completion** - wait for every store task to finish
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber. See the [`tracing`] module for what each
//! layer logs.

pub mod console_system;
pub mod tracing;

pub use console_system::*;
pub use tracing::*;
