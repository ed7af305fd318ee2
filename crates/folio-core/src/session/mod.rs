//! Session resolution: who is signed in, and which palette is active.

pub mod auth;
pub mod theme;
