//! REST client for one resource collection.
//!
//! - `GET    <endpoint>?<params>` lists a page
//! - `POST   <endpoint>`          creates from a draft
//! - `PATCH  <endpoint>/<id>`     updates from a draft
//! - `DELETE <endpoint>/<id>`     deletes
//!
//! Every call maps transport failures, non-2xx statuses and undecodable
//! bodies into [`ApiError`]; nothing here panics.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::http::{Client, RequestBuilder, Response};
use crate::{ApiError, ApiResult, BusinessConfig, ListResponse, QueryParams, Resource};

pub struct ResourceApi<R> {
    config: Arc<BusinessConfig>,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceApi<R> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            _marker: PhantomData,
        }
    }
}

impl<R> std::fmt::Debug for ResourceApi<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceApi")
            .field("api_base_url", &self.config.api_base_url)
            .finish_non_exhaustive()
    }
}

impl<R: Resource> ResourceApi<R> {
    pub fn new(config: Arc<BusinessConfig>) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    pub fn collection_url(&self) -> String {
        self.config.endpoint_url(R::ENDPOINT)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{id}", self.collection_url())
    }

    /// GET `<endpoint>?<params>`
    pub async fn list(&self, params: &QueryParams) -> ApiResult<ListResponse<R>> {
        let response = self
            .prepare(Client::get(self.collection_url()).query(params))
            .send()
            .await?;
        decode(&response)
    }

    /// POST `<endpoint>`
    pub async fn create(&self, draft: &R::Draft) -> ApiResult<R> {
        let request = Client::post(self.collection_url())
            .json(draft)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.prepare(request).send().await?;
        decode(&response)
    }

    /// PATCH `<endpoint>/<id>`
    pub async fn update(&self, id: &str, draft: &R::Draft) -> ApiResult<R> {
        let request = Client::patch(self.item_url(id))
            .json(draft)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.prepare(request).send().await?;
        decode(&response)
    }

    /// DELETE `<endpoint>/<id>`. Any 2xx counts; the body is ignored.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        let response = self
            .prepare(Client::delete(self.item_url(id)))
            .send()
            .await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ApiError::from_response(&response))
        }
    }

    fn prepare(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("accept", "application/json")
            .bearer(self.config.access_token())
            .timeout(self.config.request_timeout)
    }
}

fn decode<T: serde::de::DeserializeOwned>(response: &Response) -> ApiResult<T> {
    if !response.is_success() {
        return Err(ApiError::from_response(response));
    }
    response.json().map_err(|e| ApiError::Decode(e.to_string()))
}
