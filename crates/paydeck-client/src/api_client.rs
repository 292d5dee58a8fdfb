use std::sync::Arc;

use chrono::SecondsFormat;
use serde::Deserialize;

use paydeck_common::{PaymentsPage, ScheduleKey};

use crate::error::{PaydeckError, Result};
use crate::paging::{PageRequest, PageSource};

/// HTTP client for the paydeck server's read endpoints.
pub struct ApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_page(&self, path: &str, params: &[(&str, String)]) -> Result<PaymentsPage> {
        let resp = self
            .client
            .get(self.url(path))
            .query(params)
            .send()
            .map_err(|e| PaydeckError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ErrorResponse>()
                .map(|e| e.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(PaydeckError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<PaymentsPage>()
            .map_err(|e| PaydeckError::Malformed(e.to_string()))
    }

    /// `GET /api/v1/history`, descending by id.
    pub fn history(&self, request: &PageRequest<u64>) -> Result<PaymentsPage> {
        self.get_page("/api/v1/history", &history_params(request))
    }

    /// `GET /api/v1/scheduled`, ascending by `(scheduled_at, id)`.
    pub fn scheduled(&self, request: &PageRequest<ScheduleKey>) -> Result<PaymentsPage> {
        self.get_page("/api/v1/scheduled", &schedule_params(request))
    }
}

/// Query parameters for a history fetch. The sentinel top fetch sends no
/// cursor at all; the server then anchors at the highest ids.
fn history_params(request: &PageRequest<u64>) -> Vec<(&'static str, String)> {
    let mut params = vec![("limit", request.limit().to_string())];
    match *request {
        PageRequest::Top { .. } => {}
        PageRequest::After { key, .. } => params.push(("after", key.to_string())),
        PageRequest::Before { key, .. } => params.push(("before", key.to_string())),
    }
    params
}

/// Query parameters for a schedule fetch. The key travels as two
/// parameters (timestamp and id tiebreak) so the server can apply the
/// lexicographic comparison itself.
fn schedule_params(request: &PageRequest<ScheduleKey>) -> Vec<(&'static str, String)> {
    let mut params = vec![("limit", request.limit().to_string())];
    match *request {
        PageRequest::Top { .. } => {}
        PageRequest::After { key, .. } => {
            params.push(("after", rfc3339(key)));
            params.push(("afterId", key.id.to_string()));
        }
        PageRequest::Before { key, .. } => {
            params.push(("before", rfc3339(key)));
            params.push(("beforeId", key.id.to_string()));
        }
    }
    params
}

fn rfc3339(key: ScheduleKey) -> String {
    key.scheduled_at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// History endpoint as a page source.
pub struct HistorySource {
    client: Arc<ApiClient>,
}

impl HistorySource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl PageSource<u64> for HistorySource {
    fn fetch(&self, request: &PageRequest<u64>) -> Result<PaymentsPage> {
        self.client.history(request)
    }
}

/// Schedule endpoint as a page source.
pub struct ScheduleSource {
    client: Arc<ApiClient>,
}

impl ScheduleSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

impl PageSource<ScheduleKey> for ScheduleSource {
    fn fetch(&self, request: &PageRequest<ScheduleKey>) -> Result<PaymentsPage> {
        self.client.scheduled(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_history_top_sends_only_limit() {
        let params = history_params(&PageRequest::Top { limit: 25 });
        assert_eq!(params, vec![("limit", "25".to_string())]);
    }

    #[test]
    fn test_history_cursor_params() {
        let params = history_params(&PageRequest::After { key: 151, limit: 100 });
        assert_eq!(
            params,
            vec![
                ("limit", "100".to_string()),
                ("after", "151".to_string())
            ]
        );
        let params = history_params(&PageRequest::Before { key: 50, limit: 100 });
        assert_eq!(
            params,
            vec![
                ("limit", "100".to_string()),
                ("before", "50".to_string())
            ]
        );
    }

    #[test]
    fn test_schedule_cursor_params_carry_id_tiebreak() {
        let key = ScheduleKey::new(Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(), 42);
        let params = schedule_params(&PageRequest::After { key, limit: 10 });
        assert_eq!(params[0], ("limit", "10".to_string()));
        assert_eq!(params[1], ("after", "2026-03-01T09:00:00.000000Z".to_string()));
        assert_eq!(params[2], ("afterId", "42".to_string()));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("/api/v1/history"), "http://localhost:8080/api/v1/history");
    }
}
