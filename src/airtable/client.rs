// ABOUTME: HTTP client for the Airtable REST API
// ABOUTME: Attaches bearer auth, classifies statuses, decodes typed payloads, retries 429s

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use super::error::ApiError;
use super::models::{
    Base, BaseList, CreateBaseRequest, CreateRecordsRequest, CreateRecordsResponse,
    CreateTableRequest, CreatedBase, FieldSpec, NewRecord, Record, RecordPage, StarterTable,
    Table, TableList, TableSummary,
};
use super::retry::{parse_retry_after, RetryConfig};

/// Default Airtable API base URL
pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// The record-creation endpoint rejects batches larger than this.
pub const MAX_RECORDS_PER_CREATE: usize = 10;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_url: String,
    pub timeout: Duration,
    pub retry: RetryConfig,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
        }
    }
}

/// Airtable API client
pub struct AirtableClient {
    http: Client,
    base_url: Url,
    retry: RetryConfig,
}

impl AirtableClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.api_url.trim_end_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!(
                "{} cannot carry path segments",
                base_url
            )));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| ApiError::InvalidApiKey)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            http,
            base_url,
            retry: config.retry,
        })
    }

    /// List the bases this API key is authorized to see.
    pub async fn list_bases(&self) -> Result<Vec<Base>, ApiError> {
        let url = self.endpoint(&["meta", "bases"]);
        let list: BaseList = self.request(Method::GET, url, None::<&()>).await?;
        Ok(list.bases)
    }

    /// Create a new base in the given workspace.
    ///
    /// The service requires at least one table, so the request carries the
    /// default starter structure.
    pub async fn create_base(
        &self,
        name: &str,
        workspace_id: &str,
    ) -> Result<CreatedBase, ApiError> {
        let url = self.endpoint(&["meta", "bases"]);
        let payload = CreateBaseRequest {
            name,
            workspace_id,
            tables: vec![StarterTable::default_structure()],
        };
        self.request(Method::POST, url, Some(&payload)).await
    }

    /// Fetch every table in a base together with its field definitions.
    pub async fn get_tables_with_fields(&self, base_id: &str) -> Result<Vec<Table>, ApiError> {
        let url = self.endpoint(&["meta", "bases", base_id, "tables"]);
        let list: TableList = self.request(Method::GET, url, None::<&()>).await?;
        Ok(list.tables)
    }

    /// Fetch the id/name listing of tables in a base.
    pub async fn list_tables(&self, base_id: &str) -> Result<Vec<TableSummary>, ApiError> {
        Ok(self
            .get_tables_with_fields(base_id)
            .await?
            .into_iter()
            .map(|t| TableSummary {
                id: t.id,
                name: t.name,
            })
            .collect())
    }

    /// Fetch one page of records, passing the continuation token back when
    /// following a paged listing.
    pub async fn list_records(
        &self,
        base_id: &str,
        table_name: &str,
        offset: Option<&str>,
    ) -> Result<RecordPage, ApiError> {
        let mut url = self.endpoint(&[base_id, table_name]);
        if let Some(token) = offset {
            url.query_pairs_mut().append_pair("offset", token);
        }
        self.request(Method::GET, url, None::<&()>).await
    }

    /// Create a table with the given projected fields in a base.
    pub async fn create_table(
        &self,
        base_id: &str,
        name: &str,
        fields: &[FieldSpec],
    ) -> Result<Table, ApiError> {
        let url = self.endpoint(&["meta", "bases", base_id, "tables"]);
        let payload = CreateTableRequest { name, fields };
        self.request(Method::POST, url, Some(&payload)).await
    }

    /// Insert one batch of records (at most [`MAX_RECORDS_PER_CREATE`]) into a
    /// table, addressed by table id.
    pub async fn create_records(
        &self,
        base_id: &str,
        table_id: &str,
        records: &[NewRecord],
    ) -> Result<Vec<Record>, ApiError> {
        let url = self.endpoint(&[base_id, table_id]);
        let payload = CreateRecordsRequest { records };
        let response: CreateRecordsResponse =
            self.request(Method::POST, url, Some(&payload)).await?;
        Ok(response.records)
    }

    /// Build an endpoint URL, percent-encoding each path segment (table names
    /// may contain spaces and slashes).
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("base URL validated at construction")
            .pop_if_empty()
            .extend(segments);
        url
    }

    /// Issue a request and decode the JSON body.
    ///
    /// 200/201 is success; 429 is retried with backoff per the retry config;
    /// any other status becomes `ApiError::Http` with the raw body attached.
    async fn request<T, B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut attempt: u32 = 1;
        loop {
            tracing::debug!(%method, %url, attempt, "sending Airtable request");

            let mut request = self.http.request(method.clone(), url.clone());
            if let Some(payload) = body {
                request = request.json(payload);
            }
            let response = request.send().await.map_err(ApiError::Network)?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt >= self.retry.max_attempts {
                    return Err(ApiError::RateLimited { attempts: attempt });
                }
                let retry_after = parse_retry_after(response.headers());
                let delay = self.retry.delay_for(attempt, retry_after);
                tracing::warn!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "throttled by Airtable, backing off"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            if !matches!(status, StatusCode::OK | StatusCode::CREATED) {
                let body = response.text().await.unwrap_or_default();
                return Err(ApiError::Http {
                    status: status.as_u16(),
                    body,
                });
            }

            let text = response.text().await.map_err(ApiError::Network)?;
            return serde_json::from_str(&text).map_err(ApiError::Decode);
        }
    }
}
