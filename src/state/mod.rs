//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `catalog`, `gamification`, `ui`) so
//! individual components can depend on small focused models. Each struct is
//! held in an `RwSignal` provided via context at the app root.

pub mod auth;
pub mod catalog;
pub mod gamification;
pub mod ui;
