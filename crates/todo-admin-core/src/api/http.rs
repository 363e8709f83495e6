//! HTTP implementation of the API traits over `reqwest`
//!
//! Every call is exactly one request: no retries, no caching, no
//! deduplication.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult};
use super::traits::{AuthApi, ResourceApi, TodoStatusApi};
use crate::config::AppConfig;
use crate::domain::{
    Entity, LoginRequest, LoginResponse, RecordId, RegisterRequest, Resource, Todo,
};
use crate::session::SessionContext;

const REGISTER_PATH: &str = "/api/auth/register";
const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    config: AppConfig,
    session: SessionContext,
}

impl HttpApi {
    pub fn new(config: AppConfig, session: SessionContext) -> Self {
        Self {
            client: Client::new(),
            config,
            session,
        }
    }

    fn collection_url(&self, resource: Resource) -> String {
        self.config.api_url(resource.path())
    }

    fn record_url(&self, resource: Resource, id: RecordId) -> String {
        format!("{}/{}", self.collection_url(resource), id)
    }

    /// Attach the session token when there is one
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header(AUTHORIZATION, token),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await.map_err(|e| {
            log::error!("request failed: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        log::debug!("{} {}", status.as_u16(), response.url());

        if status == StatusCode::UNAUTHORIZED {
            log::warn!("server rejected credentials, clearing session");
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            log::error!("request failed: {} - {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn fetch_json<R: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<R> {
        let response = self.execute(builder).await?;
        response.json::<R>().await.map_err(|e| {
            log::error!("unexpected response body: {}", e);
            ApiError::Decode(e.to_string())
        })
    }
}

#[async_trait(?Send)]
impl<T: Entity> ResourceApi<T> for HttpApi {
    async fn list(&self) -> ApiResult<Vec<T>> {
        let url = self.collection_url(T::RESOURCE);
        log::debug!("GET {}", url);
        self.fetch_json(self.authorized(self.client.get(url))).await
    }

    async fn get(&self, id: RecordId) -> ApiResult<T> {
        let url = self.record_url(T::RESOURCE, id);
        log::debug!("GET {}", url);
        self.fetch_json(self.authorized(self.client.get(url))).await
    }

    async fn create(&self, record: &T) -> ApiResult<T> {
        let url = self.collection_url(T::RESOURCE);
        log::debug!("POST {}", url);
        self.fetch_json(self.authorized(self.client.post(url).json(record)))
            .await
    }

    async fn update(&self, id: RecordId, record: &T) -> ApiResult<T> {
        let url = self.record_url(T::RESOURCE, id);
        log::debug!("PUT {}", url);
        self.fetch_json(self.authorized(self.client.put(url).json(record)))
            .await
    }

    async fn delete(&self, id: RecordId) -> ApiResult<()> {
        let url = self.record_url(T::RESOURCE, id);
        log::debug!("DELETE {}", url);
        self.execute(self.authorized(self.client.delete(url))).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl TodoStatusApi for HttpApi {
    async fn complete(&self, id: RecordId) -> ApiResult<Todo> {
        let url = format!("{}/complete", self.record_url(Resource::Todo, id));
        log::debug!("PATCH {}", url);
        self.fetch_json(self.authorized(self.client.patch(url))).await
    }

    async fn incomplete(&self, id: RecordId) -> ApiResult<Todo> {
        let url = format!("{}/in-complete", self.record_url(Resource::Todo, id));
        log::debug!("PATCH {}", url);
        self.fetch_json(self.authorized(self.client.patch(url))).await
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<String> {
        let url = self.config.api_url(REGISTER_PATH);
        log::debug!("POST {}", url);
        let response = self.execute(self.client.post(url).json(request)).await?;
        response.text().await.map_err(ApiError::from)
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let url = self.config.api_url(LOGIN_PATH);
        log::debug!("POST {}", url);
        self.fetch_json(self.client.post(url).json(request)).await
    }
}
