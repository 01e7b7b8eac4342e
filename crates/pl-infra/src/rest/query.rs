use std::fmt::Display;

use pl_core::ports::QueryError;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::client::RestClient;
use super::error::{map_reqwest_error, map_status_error};

const PREFER_MINIMAL: &str = "return=minimal";
const PREFER_IGNORE_DUPLICATES: &str = "resolution=ignore-duplicates,return=minimal";

/// Table-scoped query builder.
///
/// Filters accumulate with [`TableQuery::eq`] and apply to `select` and
/// `update`. Inserts ignore filters.
pub struct TableQuery<'a> {
    client: &'a RestClient,
    table: String,
    filters: Vec<(String, String)>,
    limit: Option<usize>,
}

impl<'a> TableQuery<'a> {
    pub(crate) fn new(client: &'a RestClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            filters: Vec::new(),
            limit: None,
        }
    }

    /// `column = value`
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value)));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Read matching rows, projecting `columns` (comma separated).
    pub async fn select<T: DeserializeOwned>(&self, columns: &str) -> Result<Vec<T>, QueryError> {
        let mut query = self.filters.clone();
        query.push(("select".to_string(), columns.to_string()));
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }

        let response = self.send(Method::GET, &query, None::<&()>, None).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| QueryError::Decode(e.to_string()))
    }

    /// Append rows. No dedup; uniqueness is up to the store.
    pub async fn insert<T: Serialize>(&self, rows: &[T]) -> Result<(), QueryError> {
        if rows.is_empty() {
            return Ok(());
        }
        self.send(Method::POST, &[], Some(rows), Some(PREFER_MINIMAL))
            .await?;
        Ok(())
    }

    /// Insert rows, silently skipping any that collide on `on_conflict`
    /// (comma-separated unique columns).
    pub async fn upsert_ignore_duplicates<T: Serialize>(
        &self,
        rows: &[T],
        on_conflict: &str,
    ) -> Result<(), QueryError> {
        if rows.is_empty() {
            return Ok(());
        }
        let query = [("on_conflict".to_string(), on_conflict.to_string())];
        self.send(
            Method::POST,
            &query,
            Some(rows),
            Some(PREFER_IGNORE_DUPLICATES),
        )
        .await?;
        Ok(())
    }

    /// Patch matching rows. Refuses to run without at least one filter.
    pub async fn update<P: Serialize>(&self, patch: &P) -> Result<(), QueryError> {
        if self.filters.is_empty() {
            return Err(QueryError::InvalidRequest(format!(
                "refusing unfiltered update on {}",
                self.table
            )));
        }
        self.send(Method::PATCH, &self.filters, Some(patch), Some(PREFER_MINIMAL))
            .await?;
        Ok(())
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        query: &[(String, String)],
        body: Option<&B>,
        prefer: Option<&str>,
    ) -> Result<reqwest::Response, QueryError> {
        debug!(
            method = %method,
            table = %self.table,
            filters = self.filters.len(),
            "store request"
        );

        let mut request = self
            .client
            .http()
            .request(method, self.client.table_url(&self.table))
            .query(query);
        if let Some(prefer) = prefer {
            request = request.header("Prefer", prefer);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = map_status_error(status, &body);
        warn!(table = %self.table, status = %status, error = %err, "store rejected request");
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use pl_core::config::StoreConfig;
    use serde::Deserialize;
    use serde_json::json;
    use std::time::Duration;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: String,
        onboarding_completed: bool,
    }

    fn build_client(url: String) -> RestClient {
        let config = StoreConfig {
            url,
            anon_key: "anon-key".to_string(),
        };
        RestClient::new(&config, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn select_sends_filters_projection_and_auth_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/candidates")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("user_id".into(), "eq.user-1".into()),
                Matcher::UrlEncoded("select".into(), "id,onboarding_completed".into()),
                Matcher::UrlEncoded("limit".into(), "2".into()),
            ]))
            .match_header("apikey", "anon-key")
            .match_header("authorization", "Bearer anon-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":"c1","onboarding_completed":false}]"#)
            .create_async()
            .await;

        let client = build_client(server.url());
        let rows: Vec<Row> = client
            .table("candidates")
            .eq("user_id", "user-1")
            .limit(2)
            .select("id,onboarding_completed")
            .await
            .expect("select should succeed");

        mock.assert_async().await;
        assert_eq!(
            rows,
            vec![Row {
                id: "c1".into(),
                onboarding_completed: false
            }]
        );
    }

    #[tokio::test]
    async fn select_with_malformed_body_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/rest/v1/candidates")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"not":"an array"}"#)
            .create_async()
            .await;

        let client = build_client(server.url());
        let result: Result<Vec<Row>, _> = client.table("candidates").select("id").await;

        assert!(matches!(result, Err(QueryError::Decode(_))));
    }

    #[tokio::test]
    async fn insert_posts_json_array_with_minimal_return() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/rest/v1/candidate_onboarding_steps")
            .match_header("prefer", "return=minimal")
            .match_body(Matcher::Json(json!([
                {"candidate_id": "c1", "step_name": "A", "status": "pending"}
            ])))
            .with_status(201)
            .create_async()
            .await;

        let client = build_client(server.url());
        client
            .table("candidate_onboarding_steps")
            .insert(&[json!({"candidate_id": "c1", "step_name": "A", "status": "pending"})])
            .await
            .expect("insert should succeed");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_insert_issues_no_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = build_client(server.url());
        let rows: Vec<serde_json::Value> = Vec::new();
        client.table("t").insert(&rows).await.unwrap();
        client
            .table("t")
            .upsert_ignore_duplicates(&rows, "a,b")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn upsert_sets_on_conflict_and_ignore_duplicates() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/rest/v1/candidate_onboarding_steps")
            .match_query(Matcher::UrlEncoded(
                "on_conflict".into(),
                "candidate_id,step_name".into(),
            ))
            .match_header("prefer", "resolution=ignore-duplicates,return=minimal")
            .with_status(201)
            .create_async()
            .await;

        let client = build_client(server.url());
        client
            .table("candidate_onboarding_steps")
            .upsert_ignore_duplicates(
                &[json!({"candidate_id": "c1", "step_name": "A", "status": "pending"})],
                "candidate_id,step_name",
            )
            .await
            .expect("upsert should succeed");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_patches_filtered_rows() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", "/rest/v1/candidates")
            .match_query(Matcher::UrlEncoded("id".into(), "eq.c1".into()))
            .match_body(Matcher::PartialJson(json!({"onboarding_completed": true})))
            .with_status(204)
            .create_async()
            .await;

        let client = build_client(server.url());
        client
            .table("candidates")
            .eq("id", "c1")
            .update(&json!({"onboarding_completed": true}))
            .await
            .expect("update should succeed");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unfiltered_update_is_refused_locally() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PATCH", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = build_client(server.url());
        let result = client
            .table("candidates")
            .update(&json!({"onboarding_completed": true}))
            .await;

        assert!(matches!(result, Err(QueryError::InvalidRequest(_))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_maps_to_query_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/rest/v1/candidate_onboarding_steps")
            .with_status(409)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code":"23505","message":"duplicate key","details":null,"hint":null}"#)
            .create_async()
            .await;

        let client = build_client(server.url());
        let err = client
            .table("candidate_onboarding_steps")
            .insert(&[json!({"candidate_id": "c1", "step_name": "A"})])
            .await
            .unwrap_err();

        assert_eq!(
            err,
            QueryError::Rejected {
                status: 409,
                code: Some("23505".into()),
                message: "duplicate key".into(),
            }
        );
    }

    #[tokio::test]
    async fn unreachable_store_is_transport_error() {
        // Port 9 (discard) on localhost is not listening in test environments.
        let client = build_client("http://127.0.0.1:9".to_string());
        let result: Result<Vec<Row>, _> = client.table("candidates").select("id").await;

        assert!(matches!(result, Err(QueryError::Transport(_))));
    }
}
