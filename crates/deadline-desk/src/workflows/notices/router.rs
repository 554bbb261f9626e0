use axum::{http::StatusCode, routing::post, Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::digest::{NoticeDigest, NoticeRecord};
use super::domain::ParsedNotice;
use super::parser::parse_notice_on;
use super::presentation::UrgencyTone;

#[derive(Debug, Deserialize, Serialize)]
pub struct ParseNoticeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ParsedNoticeView {
    pub today: NaiveDate,
    #[serde(flatten)]
    pub notice: ParsedNotice,
    pub tone: UrgencyTone,
    pub tone_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ParsedNoticeView {
    pub fn new(notice: ParsedNotice, today: NaiveDate) -> Self {
        let tone = notice.tone();
        Self {
            today,
            label: notice.deadline_label(),
            tone,
            tone_label: tone.label().to_string(),
            notice,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NoticeDigestRequest {
    #[serde(default)]
    pub notices: Vec<NoticeRecord>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NoticeDigestResponse {
    pub today: NaiveDate,
    pub urgent: usize,
    pub digest: NoticeDigest,
}

/// Router exposing the notice parser and dashboard digest.
pub fn notice_router() -> Router {
    Router::new()
        .route("/api/v1/notices/parse", post(parse_handler))
        .route("/api/v1/notices/digest", post(digest_handler))
}

fn evaluation_date(requested: Option<NaiveDate>) -> NaiveDate {
    requested.unwrap_or_else(|| Local::now().date_naive())
}

pub(crate) async fn parse_handler(
    Json(request): Json<ParseNoticeRequest>,
) -> (StatusCode, Json<ParsedNoticeView>) {
    let today = evaluation_date(request.today);
    let notice = parse_notice_on(request.text.as_deref(), today);
    (StatusCode::OK, Json(ParsedNoticeView::new(notice, today)))
}

pub(crate) async fn digest_handler(
    Json(request): Json<NoticeDigestRequest>,
) -> (StatusCode, Json<NoticeDigestResponse>) {
    let today = evaluation_date(request.today);
    let digest = NoticeDigest::from_records(&request.notices, today);
    tracing::debug!(records = digest.total_records, urgent = digest.urgent(), "notice digest built");

    let body = NoticeDigestResponse {
        today,
        urgent: digest.urgent(),
        digest,
    };
    (StatusCode::OK, Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn read_json_body(response: Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn post_json(uri: &str, payload: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds")
    }

    #[tokio::test]
    async fn parse_route_flattens_notice_fields() {
        let response = notice_router()
            .oneshot(post_json(
                "/api/v1/notices/parse",
                json!({
                    "text": "Intimação eletrônica. Prazo: 15 dias. Data inicial da contagem do prazo: 10/12/2024. Status: ABERTO",
                    "today": "2024-12-23",
                }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["is_notice"], true);
        assert_eq!(payload["period_end"], "2024-12-25");
        assert_eq!(payload["days_remaining"], 2);
        assert_eq!(payload["urgency"], "critical");
        assert_eq!(payload["tone"], "danger");
        assert_eq!(payload["label"], "2 days remaining");
    }

    #[tokio::test]
    async fn parse_route_accepts_missing_text() {
        let response = notice_router()
            .oneshot(post_json("/api/v1/notices/parse", json!({ "today": "2024-12-23" })))
            .await
            .expect("route executes");

        let payload = read_json_body(response).await;
        assert_eq!(payload["is_notice"], false);
        assert_eq!(payload["status"], "unknown");
        assert_eq!(payload["tone"], "neutral");
        assert!(payload.get("label").is_none());
    }

    #[tokio::test]
    async fn digest_route_counts_urgent_notices() {
        let response = notice_router()
            .oneshot(post_json(
                "/api/v1/notices/digest",
                json!({
                    "today": "2024-12-12",
                    "notices": [
                        { "id": "m1", "text": "Intimação. Data final: 14/12/2024. Status: ABERTO" },
                        { "id": "m2", "text": "Intimação. Data final: 17/12/2024. Status: ABERTO" },
                        { "id": "m3", "text": "Intimação. Data final: 20/12/2024. Status: ABERTO" },
                        { "id": "m4", "text": null },
                    ],
                }),
            ))
            .await
            .expect("route executes");

        let payload = read_json_body(response).await;
        assert_eq!(payload["urgent"], 2);
        assert_eq!(payload["digest"]["medium"], 1);
        assert_eq!(payload["digest"]["total_records"], 4);
    }
}
