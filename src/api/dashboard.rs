use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::domain::{DashboardQuery, DashboardResponse, PageMeta};
use crate::services::session::PAGE_SIZE;
use crate::state::AppState;

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn get_logs(
    State(state): State<AppState>,
    Query(params): Query<DashboardQuery>,
) -> Json<DashboardResponse> {
    let mut session = state.session.lock().unwrap();
    session.apply(&params);

    let page = session.page();
    let meta = PageMeta {
        total: page.total,
        page: session.current_page(),
        page_size: PAGE_SIZE,
        total_pages: page.total_pages,
    };

    Json(DashboardResponse {
        data: page.items.into_iter().cloned().collect(),
        meta,
        metrics: session.metrics().clone(),
        trend: session.trend().to_vec(),
    })
}

pub async fn get_interfaces(State(state): State<AppState>) -> Json<Vec<String>> {
    let session = state.session.lock().unwrap();
    Json(session.interfaces().to_vec())
}
