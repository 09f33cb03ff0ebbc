//! # Database module — PostgreSQL connection pool management
//!
//! The shared connection pool used by every server function, gated behind
//! `#[cfg(feature = "server")]` so client (WASM) builds never pull in SQLx
//! or Tokio networking code.
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]: the first [`get_pool`] call reads
//! `DATABASE_URL` from the environment (via `dotenvy`) and caches the
//! opened pool for all subsequent callers.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
