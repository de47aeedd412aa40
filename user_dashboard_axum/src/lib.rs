//! user-dashboard-axum - Axum integration for the user CRUD dashboard
//!
//! Maps the HTTP surface onto [`UserStore`] operations:
//! `/users/*` JSON endpoints, the `/health` probe, and the HTML
//! dashboard page at `/`.

mod error;
mod health;
mod pages;
mod router;
mod state;
mod users;

pub use router::{dashboard_router, dashboard_router_no_trace};
pub use state::AppState;

// Re-export the storage handle so binaries only need this crate
pub use user_dashboard::{DataStoreConfig, User, UserStore};
