//! Client state modules.
//!
//! ARCHITECTURE
//! ============
//! State types are plain data held in Leptos signals by the page that owns
//! them; they carry no browser dependencies and are tested natively.

pub mod dashboard;
