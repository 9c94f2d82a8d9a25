//! Terminal browser for Lemmy communities, posts and comment threads.
//!
//! ## Navigation model
//!
//! The [`navigator::Navigator`] keeps a stack of [`view::ViewKind`] tags and a typed
//! [`context::NavigationContext`]. Each turn it builds a fresh view for the top tag, lets it
//! fetch and present its data, and applies the returned decision:
//!
//! - `Descend` writes the selection into the context and pushes the child view.
//! - `Return` pops one view and clears the context key that view required. At the root it
//!   does nothing and the root view is shown again.
//! - `Exit` ends the session; the menu reports it when stdin closes or the user quits.
//!
//! Views are never cached, so returning to a view always refetches its data.
//!
//! ## Configuration
//!
//! - `LEMMY_BROWSER_BASE_URL` instance to read from (default `https://lemmy.ml`)
//! - `LEMMY_BROWSER_TIMEOUT_SEC` request timeout in seconds (default `5`)
//! - `LEMMY_BROWSER_START` root view, `communities` (default) or `frontpage`
//!
//! Logging and preview height are configured through `lemmy_tui::EnvConfig`.

pub mod config;
pub mod context;
pub mod gateway;
pub mod navigator;
pub mod view;
