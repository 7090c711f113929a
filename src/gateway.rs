use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::error::GatewayError;
use crate::models::{
    BackendHealth, CategoryDetail, MonthlyTrend, SummaryItem, Transaction, UploadReceipt,
};
use crate::normalize::{InsightResponse, SummaryResponse, TransactionsResponse, TrendsResponse};

#[derive(Clone, Debug, PartialEq)]
pub enum Endpoint {
    Summary,
    Insight,
    Transactions,
    Upload,
    Health,
    Trends,
    CategoryDetails(String),
}

impl Endpoint {
    fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::Summary => vec!["summary"],
            Endpoint::Insight => vec!["insight"],
            Endpoint::Transactions => vec!["transactions"],
            Endpoint::Upload => vec!["upload"],
            Endpoint::Health => vec!["health"],
            Endpoint::Trends => vec!["trends"],
            Endpoint::CategoryDetails(category) => vec!["category-details", category.as_str()],
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Endpoint::Summary => "Failed to fetch summary",
            Endpoint::Insight => "Failed to fetch insights",
            Endpoint::Transactions => "Failed to fetch transactions",
            Endpoint::Upload => "Upload failed",
            Endpoint::Health => "Failed to reach backend",
            Endpoint::Trends => "Failed to fetch trends",
            Endpoint::CategoryDetails(_) => "Failed to fetch category details",
        }
    }
}

pub fn endpoint_url(base: &str, endpoint: &Endpoint) -> Result<Url, GatewayError> {
    let mut url = Url::parse(base)
        .map_err(|e| GatewayError::Network(format!("Invalid backend URL {}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| GatewayError::Network(format!("Invalid backend URL {}", base)))?
        .pop_if_empty()
        .extend(endpoint.segments());
    Ok(url)
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiRequest {
    Get { endpoint: Endpoint },
    Post { endpoint: Endpoint, body: String },
}

impl ApiRequest {
    pub fn endpoint(&self) -> &Endpoint {
        match self {
            ApiRequest::Get { endpoint } | ApiRequest::Post { endpoint, .. } => endpoint,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport seam. Non-2xx statuses are replies, not errors; only failures to
/// get any answer at all are `Err`.
#[async_trait(?Send)]
pub trait Backend {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, GatewayError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, GatewayError> {
        let fallback = request.endpoint().fallback_message();
        let url = endpoint_url(&self.base_url, request.endpoint())?;

        let response = match &request {
            ApiRequest::Get { .. } => Request::get(url.as_str()).send().await,
            ApiRequest::Post { body, .. } => {
                Request::post(url.as_str())
                    .header("Content-Type", "application/json")
                    .body(body.clone())
                    .map_err(|e| GatewayError::network(e.to_string(), fallback))?
                    .send()
                    .await
            }
        }
        .map_err(|e| GatewayError::network(e.to_string(), fallback))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::debug!("{} answered {}", url, status);
        Ok(ApiReply { status, body })
    }
}

async fn get_ok<B: Backend + ?Sized>(backend: &B, endpoint: Endpoint) -> Result<String, GatewayError> {
    let fallback = endpoint.fallback_message();
    let reply = backend
        .send(ApiRequest::Get { endpoint })
        .await
        .map_err(|e| match e {
            GatewayError::Network(msg) => GatewayError::network(msg, fallback),
            other => other,
        })?;
    if !reply.is_success() {
        log::warn!("{} (HTTP {})", fallback, reply.status);
        return Err(GatewayError::Status {
            status: reply.status,
            message: fallback.to_string(),
        });
    }
    Ok(reply.body)
}

fn decode<T: DeserializeOwned>(body: &str, endpoint: &Endpoint) -> Result<T, GatewayError> {
    serde_json::from_str(body).map_err(|e| {
        log::warn!("unreadable {:?} body: {}", endpoint, e);
        GatewayError::Decode(endpoint.fallback_message().to_string())
    })
}

pub async fn fetch_summary<B: Backend + ?Sized>(backend: &B) -> Result<Vec<SummaryItem>, GatewayError> {
    let body = get_ok(backend, Endpoint::Summary).await?;
    decode::<SummaryResponse>(&body, &Endpoint::Summary).map(SummaryResponse::into_items)
}

pub async fn fetch_insights<B: Backend + ?Sized>(backend: &B) -> Result<Vec<String>, GatewayError> {
    let body = get_ok(backend, Endpoint::Insight).await?;
    decode::<InsightResponse>(&body, &Endpoint::Insight).map(InsightResponse::into_insights)
}

pub async fn fetch_transactions<B: Backend + ?Sized>(
    backend: &B,
) -> Result<Vec<Transaction>, GatewayError> {
    let body = get_ok(backend, Endpoint::Transactions).await?;
    decode::<TransactionsResponse>(&body, &Endpoint::Transactions)
        .map(TransactionsResponse::into_transactions)
}

pub async fn fetch_trends<B: Backend + ?Sized>(backend: &B) -> Result<Vec<MonthlyTrend>, GatewayError> {
    let body = get_ok(backend, Endpoint::Trends).await?;
    decode::<TrendsResponse>(&body, &Endpoint::Trends).map(TrendsResponse::into_trends)
}

pub async fn fetch_category_details<B: Backend + ?Sized>(
    backend: &B,
    category: &str,
) -> Result<CategoryDetail, GatewayError> {
    let endpoint = Endpoint::CategoryDetails(category.to_string());
    let body = get_ok(backend, endpoint.clone()).await?;
    decode(&body, &endpoint)
}

pub async fn fetch_health<B: Backend + ?Sized>(backend: &B) -> Result<BackendHealth, GatewayError> {
    let body = get_ok(backend, Endpoint::Health).await?;
    decode(&body, &Endpoint::Health)
}

/// POSTs an already validated payload. A rejected upload reports the raw
/// response body.
pub async fn upload_transactions<B: Backend + ?Sized>(
    backend: &B,
    payload: &Value,
) -> Result<UploadReceipt, GatewayError> {
    let fallback = Endpoint::Upload.fallback_message();
    let body = serde_json::to_string(payload).map_err(|e| GatewayError::Decode(e.to_string()))?;
    let reply = backend
        .send(ApiRequest::Post {
            endpoint: Endpoint::Upload,
            body,
        })
        .await?;

    if !reply.is_success() {
        let message = if reply.body.trim().is_empty() {
            fallback.to_string()
        } else {
            reply.body
        };
        log::warn!("upload rejected with HTTP {}", reply.status);
        return Err(GatewayError::Status {
            status: reply.status,
            message,
        });
    }

    Ok(serde_json::from_str(&reply.body).unwrap_or_default())
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Answers requests from a queue and records what it was asked.
    #[derive(Default)]
    pub struct ScriptedBackend {
        replies: RefCell<VecDeque<Result<ApiReply, GatewayError>>>,
        pub requests: RefCell<Vec<ApiRequest>>,
    }

    impl ScriptedBackend {
        pub fn with(replies: Vec<Result<ApiReply, GatewayError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                requests: RefCell::default(),
            }
        }

        pub fn ok(body: &str) -> Result<ApiReply, GatewayError> {
            Ok(ApiReply {
                status: 200,
                body: body.to_string(),
            })
        }

        pub fn status(status: u16, body: &str) -> Result<ApiReply, GatewayError> {
            Ok(ApiReply {
                status,
                body: body.to_string(),
            })
        }

        pub fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl Backend for ScriptedBackend {
        async fn send(&self, request: ApiRequest) -> Result<ApiReply, GatewayError> {
            self.requests.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Network("no scripted reply".into())))
        }
    }
}
