//! Database layer
//!
//! Typed repositories over the injected [`KvStore`](crate::store::KvStore).

pub mod repository;
