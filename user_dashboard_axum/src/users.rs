use axum::{
    Router,
    extract::Json as ExtractJson,
    extract::{Query, State},
    response::Json,
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use serde_json::{Value, json};

use user_dashboard::{User, UserError};

use crate::error::{ApiError, IntoResponseError};
use crate::state::AppState;

/// Create a router for the user CRUD endpoints
pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(list_users))
        .route("/find", get(find_user))
        .route("/add", post(add_user))
        .route("/update", put(update_user))
        .route("/remove", delete(remove_user))
}

#[derive(Deserialize)]
struct FindUserQuery {
    user_id: i64,
}

/// Request payload for creating a user
#[derive(Deserialize)]
struct NewUser {
    id: i64,
    name: String,
}

/// Request payload for renaming a user
#[derive(Deserialize)]
struct ModifyUser {
    id: i64,
    new_name: String,
}

/// Request payload for deleting a user
#[derive(Deserialize)]
struct RemoveUser {
    id: i64,
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let users = state.users.list_users().await.into_response_error()?;

    Ok(Json(json!({ "users": users })))
}

async fn find_user(
    State(state): State<AppState>,
    Query(params): Query<FindUserQuery>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .find_user(params.user_id)
        .await
        .and_then(|user| user.ok_or(UserError::NotFound))
        .into_response_error()?;

    Ok(Json(user))
}

async fn add_user(
    State(state): State<AppState>,
    ExtractJson(payload): ExtractJson<NewUser>,
) -> Result<Json<Value>, ApiError> {
    tracing::debug!("Adding user with id {}", payload.id);

    state
        .users
        .insert_user(&User::new(payload.id, payload.name))
        .await
        .into_response_error()?;

    Ok(Json(json!({ "message": "User added successfully" })))
}

async fn update_user(
    State(state): State<AppState>,
    ExtractJson(payload): ExtractJson<ModifyUser>,
) -> Result<Json<Value>, ApiError> {
    tracing::debug!("Updating user with id {}", payload.id);

    state
        .users
        .update_user(payload.id, &payload.new_name)
        .await
        .into_response_error()?;

    Ok(Json(json!({ "message": "User updated successfully" })))
}

async fn remove_user(
    State(state): State<AppState>,
    ExtractJson(payload): ExtractJson<RemoveUser>,
) -> Result<Json<Value>, ApiError> {
    tracing::debug!("Removing user with id {}", payload.id);

    state
        .users
        .delete_user(payload.id)
        .await
        .into_response_error()?;

    Ok(Json(json!({ "message": "User removed successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use tempfile::TempDir;
    use user_dashboard::{DataStoreConfig, UserStore};

    async fn test_state() -> (AppState, TempDir) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let url = format!("sqlite://{}/users.db", dir.path().display());
        let store = UserStore::new(
            DataStoreConfig::sqlite(url)
                .connect()
                .expect("Failed to open test store"),
        );
        store.init().await.expect("Failed to init test store");
        (AppState::new(store), dir)
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let (state, _dir) = test_state().await;

        let Json(added) = add_user(
            State(state.clone()),
            ExtractJson(NewUser {
                id: 1,
                name: "Alice".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(added, json!({ "message": "User added successfully" }));

        let Json(listed) = list_users(State(state)).await.unwrap();
        assert_eq!(listed, json!({ "users": [{ "id": 1, "name": "Alice" }] }));
    }

    #[tokio::test]
    async fn test_find_missing_returns_404() {
        let (state, _dir) = test_state().await;

        let (status, Json(body)) =
            find_user(State(state), Query(FindUserQuery { user_id: 999 }))
                .await
                .unwrap_err();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "User not found" }));
    }

    #[tokio::test]
    async fn test_update_then_find() {
        let (state, _dir) = test_state().await;
        state.users.insert_user(&User::new(1, "Alice")).await.unwrap();

        let Json(updated) = update_user(
            State(state.clone()),
            ExtractJson(ModifyUser {
                id: 1,
                new_name: "Bob".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(updated, json!({ "message": "User updated successfully" }));

        let Json(found) = find_user(State(state), Query(FindUserQuery { user_id: 1 }))
            .await
            .unwrap();
        assert_eq!(found, User::new(1, "Bob"));
    }

    #[tokio::test]
    async fn test_update_missing_returns_404() {
        let (state, _dir) = test_state().await;

        let (status, Json(body)) = update_user(
            State(state),
            ExtractJson(ModifyUser {
                id: 999,
                new_name: "Bob".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "User not found" }));
    }

    #[tokio::test]
    async fn test_remove_then_find_returns_404() {
        let (state, _dir) = test_state().await;
        state.users.insert_user(&User::new(1, "Alice")).await.unwrap();

        let Json(removed) =
            remove_user(State(state.clone()), ExtractJson(RemoveUser { id: 1 }))
                .await
                .unwrap();
        assert_eq!(removed, json!({ "message": "User removed successfully" }));

        let (status, _) = find_user(State(state), Query(FindUserQuery { user_id: 1 }))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_remove_missing_returns_404() {
        let (state, _dir) = test_state().await;

        let (status, _) = remove_user(State(state), ExtractJson(RemoveUser { id: 999 }))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_duplicate_ids_lists_both() {
        let (state, _dir) = test_state().await;

        for name in ["Alice", "Alicia"] {
            add_user(
                State(state.clone()),
                ExtractJson(NewUser {
                    id: 1,
                    name: name.to_string(),
                }),
            )
            .await
            .unwrap();
        }

        let Json(listed) = list_users(State(state)).await.unwrap();
        assert_eq!(
            listed,
            json!({ "users": [
                { "id": 1, "name": "Alice" },
                { "id": 1, "name": "Alicia" },
            ] })
        );
    }
}
