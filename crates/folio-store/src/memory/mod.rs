//! In-memory reference implementations of the store traits.
//!
//! These back the test suite and small single-process deployments. A single
//! mutex over each map makes the uniqueness checks atomic, which is the
//! storage-level guarantee the service relies on under concurrent requests.

pub mod audit_sink;
pub mod identity_store;
pub mod settings_store;
