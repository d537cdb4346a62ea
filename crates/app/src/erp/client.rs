//! JSON-RPC client for the ERP object model.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{debug, info};

use crate::erp::ErpRpcError;

/// Remote procedure channel into the ERP object model.
#[automock]
#[async_trait]
pub trait ErpRpc: Send + Sync {
    /// Execute `method` on `model` with positional `args` and optional
    /// keyword arguments, returning the raw reply value.
    async fn execute_kw(
        &self,
        model: &str,
        method: &str,
        args: Vec<Value>,
        kwargs: Option<Map<String, Value>>,
    ) -> Result<Value, ErpRpcError>;
}

/// Configuration for connecting to the ERP.
#[derive(Debug, Clone)]
pub struct ErpConfig {
    /// Base address, e.g. `"https://erp.example.com"`.
    pub url: String,

    /// ERP database name.
    pub database: String,

    pub username: String,

    pub password: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// HTTP JSON-RPC client authenticated as a single ERP user.
#[derive(Debug)]
pub struct OdooClient {
    config: ErpConfig,
    uid: i64,
    http: Client,
    next_id: AtomicU64,
}

impl OdooClient {
    /// Authenticate against the ERP and return a ready client.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or when the credentials are refused.
    pub async fn login(config: ErpConfig) -> Result<Self, ErpRpcError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        let mut client = Self {
            config,
            uid: 0,
            http,
            next_id: AtomicU64::new(1),
        };

        let reply = client
            .call(
                "common",
                "login",
                vec![
                    json!(client.config.database),
                    json!(client.config.username),
                    json!(client.config.password),
                ],
            )
            .await?;

        client.uid = reply
            .as_i64()
            .filter(|uid| *uid > 0)
            .ok_or_else(|| ErpRpcError::LoginRefused(client.config.username.clone()))?;

        info!(uid = client.uid, database = %client.config.database, "logged in to ERP");

        Ok(client)
    }

    /// User id granted at login.
    #[must_use]
    pub fn uid(&self) -> i64 {
        self.uid
    }

    async fn call(
        &self,
        service: &str,
        method: &str,
        args: Vec<Value>,
    ) -> Result<Value, ErpRpcError> {
        let url = format!("{}/jsonrpc", self.config.url.trim_end_matches('/'));

        let request = RpcRequest {
            jsonrpc: "2.0",
            method: "call",
            params: RpcParams {
                service,
                method,
                args,
            },
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
        };

        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ErpRpcError::UnexpectedResponse(format!(
                "{service}.{method} failed with status {status}: {text}"
            )));
        }

        let envelope: RpcResponse = response.json().await?;

        envelope.into_result()
    }
}

#[async_trait]
impl ErpRpc for OdooClient {
    async fn execute_kw(
        &self,
        model: &str,
        method: &str,
        args: Vec<Value>,
        kwargs: Option<Map<String, Value>>,
    ) -> Result<Value, ErpRpcError> {
        debug!(model, method, "executing ERP method");

        self.call(
            "object",
            "execute_kw",
            vec![
                json!(self.config.database),
                json!(self.uid),
                json!(self.config.password),
                json!(model),
                json!(method),
                Value::Array(args),
                Value::Object(kwargs.unwrap_or_default()),
            ],
        )
        .await
    }
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'a str,
    method: &'a str,
    params: RpcParams<'a>,
    id: u64,
}

#[derive(Debug, Serialize)]
struct RpcParams<'a> {
    service: &'a str,
    method: &'a str,
    args: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,

    #[serde(default)]
    error: Option<RpcFault>,
}

#[derive(Debug, Deserialize)]
struct RpcFault {
    #[serde(default)]
    message: String,

    #[serde(default)]
    data: Option<RpcFaultData>,
}

#[derive(Debug, Deserialize)]
struct RpcFaultData {
    #[serde(default)]
    message: Option<String>,
}

impl RpcResponse {
    fn into_result(self) -> Result<Value, ErpRpcError> {
        if let Some(fault) = self.error {
            let detail = fault
                .data
                .and_then(|data| data.message)
                .filter(|message| !message.is_empty());

            return Err(ErpRpcError::Fault(detail.unwrap_or(fault.message)));
        }

        Ok(self.result.unwrap_or(Value::Null))
    }
}
