//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `content`, `ui`) so individual
//! components can depend on small focused models. Each model has exactly one
//! writer: the session store mutates `auth`, the public-page hydration
//! mutates `content`, and UI chrome mutates `ui`.

pub mod auth;
pub mod content;
pub mod ui;
