use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::path::PathBuf;
use tower_http::services::ServeDir;
use url::Url;

use crate::api::LayoutApi;
use crate::db::Storage;
use crate::handlers;
use crate::service::GridPlanner;

#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub layout: LayoutApi,
    pub planner: GridPlanner,
    pub upload_dir: PathBuf,
    pub public_base_url: Url,
}

impl AppState {
    pub fn new(
        storage: Storage,
        layout: LayoutApi,
        upload_dir: PathBuf,
        public_base_url: Url,
    ) -> Self {
        Self {
            storage,
            layout,
            planner: GridPlanner::new(),
            upload_dir,
            public_base_url,
        }
    }
}

/// Every route of the service, all under `/api`. Uploaded images are served
/// straight from the upload directory.
pub fn api_router(state: AppState) -> Router {
    let upload_dir = state.upload_dir.clone();
    Router::new()
        .route("/api/status", get(handlers::status_handler))
        // news
        .route("/api/news", get(handlers::news::list_news))
        .route("/api/news", post(handlers::news::create_news))
        .route("/api/news/{id}", get(handlers::news::get_news))
        .route("/api/news/{id}", put(handlers::news::update_news))
        .route("/api/news/{id}", delete(handlers::news::delete_news))
        // cms
        .route("/api/cms/content", get(handlers::cms::get_content))
        .route("/api/cms/content", put(handlers::cms::update_content))
        .route("/api/cms/theme", get(handlers::cms::get_theme))
        .route("/api/cms/theme", put(handlers::cms::update_theme))
        .route("/api/cms/login", post(handlers::auth::login))
        // questions
        .route("/api/questions", post(handlers::questions::submit_question))
        .route("/api/questions/all", get(handlers::questions::list_questions))
        .route(
            "/api/questions/answered",
            get(handlers::questions::list_answered),
        )
        .route(
            "/api/questions/{id}/answer",
            put(handlers::questions::answer_question),
        )
        .route(
            "/api/questions/{id}",
            delete(handlers::questions::delete_question),
        )
        // layout
        .route("/api/layout/predict", post(handlers::layout::predict))
        .route(
            "/api/layout/recommendations",
            post(handlers::layout::recommendations),
        )
        .route("/api/layout/reset", post(handlers::layout::reset))
        .route("/api/layout/auto-place", post(handlers::layout::auto_place))
        // uploads
        .route("/api/news/upload-image", post(handlers::upload::upload_image))
        .nest_service("/api/news/images", ServeDir::new(upload_dir))
        .with_state(state)
}
