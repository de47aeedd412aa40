use user_dashboard::UserStore;

/// Shared state for all request handlers.
///
/// Owns the storage handle for the lifetime of the process; handlers
/// receive it through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
}

impl AppState {
    pub fn new(users: UserStore) -> Self {
        Self { users }
    }
}
