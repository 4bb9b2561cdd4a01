//! # cull-catalog
//!
//! The media-manager side of the tool: a blocking client for an *arr-style
//! v3 REST API (list, tags, root folders, delete, refresh command) and the
//! generic library-refresh trigger for downstream media servers. Transient
//! transport failures are retried with a bounded backoff; HTTP status
//! failures are not.

pub mod client;
pub mod models;
pub mod refresh;
pub mod retry;

pub use client::ArrClient;
pub use refresh::MediaServerRefresh;
