use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Template)]
#[template(path = "dashboard.j2")]
struct DashboardTemplate<'a> {
    title: &'a str,
}

/// Serve the dashboard page
pub(super) async fn dashboard() -> Result<Response, (StatusCode, String)> {
    let template = DashboardTemplate {
        title: "User Dashboard",
    };

    let html = Html(
        template
            .render()
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?,
    );
    Ok(html.into_response())
}
