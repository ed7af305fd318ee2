//! Theme feature: the active selection and its activation paths.

pub mod state;
pub mod update;

pub use state::ThemeState;
