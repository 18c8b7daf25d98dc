use crate::services::PageState;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};
use http::StatusCode;
use tracing::error;

pub fn posts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/{id}", get(post_handler))
}

async fn index_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    match state.blog.render_index().await {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            error!(error = %format!("{:#}", e), "failed to render index");
            Err((
                StatusCode::BAD_GATEWAY,
                Html("Content is temporarily unavailable.".to_string()),
            ))
        }
    }
}

async fn post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    let page_state = state.blog.assemble(&id).await;
    let status = match page_state {
        PageState::Found(_) => StatusCode::OK,
        PageState::NotFound => StatusCode::NOT_FOUND,
    };

    (status, Html(page_state.to_html(&state.config.site_title)))
}
