use anyhow::{ensure, Context};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{config::Config, errors::AppError, structs::records::RawRecord};

/// 文章資料來源
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn find_many(&self, query: RecordQuery) -> Result<Vec<RawRecord>, AppError>;

    async fn search(&self, query: &str, search_fields: &[&str])
        -> Result<Vec<RawRecord>, AppError>;

    async fn find_by_id(&self, record_id: &str) -> Result<RawRecord, AppError>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum RecordQuery {
    All,
    CategoryContains(String),
}

impl RecordQuery {
    /// 轉成 api 的 where 條件
    pub fn where_clause(&self) -> Option<Value> {
        match self {
            RecordQuery::All => None,
            RecordQuery::CategoryContains(category) => {
                Some(json!({ "category": { "contain": category } }))
            }
        }
    }
}

#[derive(Serialize)]
struct FindManyRequest {
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    where_clause: Option<Value>,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    search_fields: &'a [&'a str],
}

#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<RawRecord>,
}

/// Leapcell table api 的 client
pub struct LeapcellTable {
    client: Client,
    api_key: String,
    table_url: Url,
}

impl LeapcellTable {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let table_url = Url::parse(&format!(
            "{}/api/v1/table/{}/{}",
            config.api_endpoint, config.resource, config.table_id
        ))
        .with_context(|| format!("invalid LEAPCELL_API_ENDPOINT {}", config.api_endpoint))?;
        ensure!(
            !table_url.cannot_be_a_base(),
            "LEAPCELL_API_ENDPOINT must be an http(s) url"
        );

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            table_url,
        })
    }

    /// 每個 segment 各自 percent-encode，不會跳出 table 路徑
    fn records_url(&self, segment: &str) -> Url {
        let mut url = self.table_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("records").push(segment);
        }
        url
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        if self.api_key.is_empty() {
            builder
        } else {
            builder.bearer_auth(&self.api_key)
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let response = self.authorized(builder).send().await?;

        tracing::debug!("table api {} -> {}", response.url(), response.status());

        Ok(response)
    }
}

#[async_trait]
impl RecordSource for LeapcellTable {
    async fn find_many(&self, query: RecordQuery) -> Result<Vec<RawRecord>, AppError> {
        let body = FindManyRequest {
            where_clause: query.where_clause(),
        };

        let response = self
            .send(self.client.post(self.records_url("query")).json(&body))
            .await?;

        Ok(decode::<ListResponse>(response).await?.items)
    }

    async fn search(
        &self,
        query: &str,
        search_fields: &[&str],
    ) -> Result<Vec<RawRecord>, AppError> {
        let body = SearchRequest {
            query,
            search_fields,
        };

        let response = self
            .send(self.client.post(self.records_url("search")).json(&body))
            .await?;

        Ok(decode::<ListResponse>(response).await?.items)
    }

    async fn find_by_id(&self, record_id: &str) -> Result<RawRecord, AppError> {
        // "." 與 ".." 會被 path_segments_mut 忽略
        if matches!(record_id, "" | "." | "..") {
            return Err(AppError::NotFound(record_id.to_string()));
        }

        let url = self.records_url(record_id);
        let response = self.send(self.client.get(url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(record_id.to_string()));
        }

        decode::<Option<RawRecord>>(response)
            .await?
            .ok_or_else(|| AppError::NotFound(record_id.to_string()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if !response.status().is_success() {
        return Err(AppError::InvalidResponse(format!(
            "{} 回傳狀態碼 {}",
            response.url(),
            response.status()
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| AppError::InvalidResponse(err.to_string()))
}
