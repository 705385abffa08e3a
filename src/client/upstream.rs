use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, Response, StatusCode};
use url::Url;

use super::EmployeeSource;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::{CreateEmployeeInput, DeleteEmployeeRequest, Employee, UpstreamResponse};

const EMPLOYEE_API_PATH: &str = "api/v1/employee";

/// HTTP client for the upstream employee API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: Url,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| AppError::Configuration(format!("Failed to build HTTP client: {}", err)))?;

        Ok(Self {
            http,
            base_url: config.upstream_base_url.clone(),
        })
    }

    fn collection_url(&self) -> Result<Url, AppError> {
        Ok(self.base_url.join(EMPLOYEE_API_PATH)?)
    }

    fn record_url(&self, id: &str) -> Result<Url, AppError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|_| AppError::Configuration(format!("'{}' cannot be used as a base URL", self.base_url)))?
            .push(id);
        Ok(url)
    }
}

async fn ensure_success(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::UpstreamStatus {
        status: status.as_u16(),
        message: if body.is_empty() {
            status.canonical_reason().unwrap_or("unknown status").to_string()
        } else {
            body
        },
    })
}

#[async_trait]
impl EmployeeSource for UpstreamClient {
    async fn fetch_all(&self) -> Result<Vec<Employee>, AppError> {
        let url = self.collection_url()?;
        info!("GET {}", url);

        let response = ensure_success(self.http.get(url).send().await?).await?;
        let body: UpstreamResponse<Vec<Employee>> = response.json().await?;

        match body.data {
            Some(employees) => {
                debug!("Upstream returned {} employees", employees.len());
                Ok(employees)
            }
            None => {
                warn!("No data returned from upstream for fetch_all, using empty list");
                Ok(Vec::new())
            }
        }
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        let url = self.record_url(id)?;
        info!("GET {}", url);

        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            warn!("Employee not found upstream for id: {}", id);
            return Ok(None);
        }

        let body: UpstreamResponse<Employee> = ensure_success(response).await?.json().await?;
        if body.data.is_none() {
            warn!("No data returned from upstream for id: {}", id);
        }
        Ok(body.data)
    }

    async fn create(&self, input: &CreateEmployeeInput) -> Result<Employee, AppError> {
        let url = self.collection_url()?;
        info!("POST {}", url);

        let response = ensure_success(self.http.post(url).json(input).send().await?).await?;
        let body: UpstreamResponse<Employee> = response.json().await?;

        body.data.ok_or_else(|| {
            warn!("No data returned from upstream after employee creation");
            AppError::Upstream("Employee creation failed: no response data".to_string())
        })
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), AppError> {
        let url = self.collection_url()?;
        info!("DELETE {} with name {}", url, name);

        let request = DeleteEmployeeRequest { name: name.to_string() };
        ensure_success(self.http.delete(url).json(&request).send().await?).await?;
        Ok(())
    }
}
