use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::notifications::Mailer,
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod send_email;
pub mod uptime;

pub fn router<M: Mailer>() -> Router<AppState<M>> {
    Router::new()
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/send-email", post(send_email::handler))
        .route("/uptime", get(uptime::handler))
}
