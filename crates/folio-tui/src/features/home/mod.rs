//! Home feature: the public browsing surface.
//!
//! Users listing → user portfolio → blog detail → post detail, one pane per
//! selection level. Each pane owns its own fetch state and is re-fetched
//! whenever its view mounts.

pub mod render;
pub mod state;
pub mod update;

pub use state::{can_delete_comment, BlogPane, HomeState, PortfolioPane, PostPane};
