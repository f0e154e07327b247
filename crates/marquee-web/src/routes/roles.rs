use crate::{AppState, WebError};
use axum::{extract::State, routing::get, Json, Router};
use marquee_core::{RoleHolder, RoleKind};

/// `GET /api/actors`, `/api/writers`, ... one listing per role kind
pub fn role_routes() -> Router<AppState> {
    RoleKind::ALL.into_iter().fold(Router::new(), |router, kind| {
        router.route(
            &format!("/api/{}", kind.binding().plural),
            get(move |State(state): State<AppState>| async move {
                list_role_holders(state, kind).await
            }),
        )
    })
}

async fn list_role_holders(
    state: AppState,
    kind: RoleKind,
) -> Result<Json<Vec<RoleHolder>>, WebError> {
    Ok(Json(state.catalog.role_holders(kind).await?))
}
