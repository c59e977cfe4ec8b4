//! Networking for dataset documents.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the dashboard's read-only GETs. Document shapes live in the
//! shared `datasets` crate so the server probes the same model.

pub mod api;
