use super::models::*;
use super::{Ledger, LedgerError};
use crate::address::Address;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use reqwest::blocking::{Client, Request};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

const API_TOKEN_HEADER: &str = "X-Algo-API-Token";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the algod v2 REST API.
///
/// A single instance can be shared across calls and threads; it only holds the
/// connection pool, the node URL and the optional API token.
#[derive(Debug, Clone)]
pub struct AlgodClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl AlgodClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, LedgerError> {
        Self::with_timeout(base_url, token, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: &str,
        token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, LedgerError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, path: &str, query: &[(&str, String)]) -> Result<Request, LedgerError> {
        let mut builder = self.client.get(self.url(path)).query(query);
        if let Some(token) = &self.token {
            builder = builder.header(API_TOKEN_HEADER, token);
        }
        Ok(builder.build()?)
    }

    /// Algod's account endpoint only understands `exclude=all|none`, and `all`
    /// drops the asset holdings, so no query is sent.
    fn account_info_request(&self, address: &Address) -> Result<Request, LedgerError> {
        self.request(&format!("/v2/accounts/{}", address), &[])
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, LedgerError> {
        self.send(self.request(path, query)?)
    }

    fn send<T: DeserializeOwned>(&self, request: Request) -> Result<T, LedgerError> {
        let path = request.url().path().to_string();
        debug!("GET {}", request.url());
        let response = self.client.execute(request)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            let message = response.text().unwrap_or_default();
            return Err(LedgerError::NotFound(format!("{}: {}", path, message.trim())));
        }
        if !status.is_success() {
            let message = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LedgerError::Http {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| LedgerError::Decode(format!("{}: {}", path, e)))
    }
}

/// Query value algod expects for a binary box name.
pub fn box_name_query(name: &[u8]) -> String {
    format!("b64:{}", STANDARD.encode(name))
}

impl Ledger for AlgodClient {
    fn account_application_info(
        &self,
        address: &Address,
        app_id: u64,
    ) -> Result<AccountApplicationInfo, LedgerError> {
        self.get(&format!("/v2/accounts/{}/applications/{}", address, app_id), &[])
    }

    fn application_info(&self, app_id: u64) -> Result<Application, LedgerError> {
        self.get(&format!("/v2/applications/{}", app_id), &[])
    }

    fn application_box_by_name(&self, app_id: u64, name: &[u8]) -> Result<BoxValue, LedgerError> {
        self.get(
            &format!("/v2/applications/{}/box", app_id),
            &[("name", box_name_query(name))],
        )
    }

    fn application_boxes(&self, app_id: u64) -> Result<BoxesResponse, LedgerError> {
        self.get(&format!("/v2/applications/{}/boxes", app_id), &[])
    }

    fn account_info(&self, address: &Address) -> Result<Account, LedgerError> {
        self.send(self.account_info_request(address)?)
    }

    fn asset_info(&self, asset_id: u64) -> Result<Asset, LedgerError> {
        self.get(&format!("/v2/assets/{}", asset_id), &[])
    }
}
