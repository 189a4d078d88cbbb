use community_types::{
    AddModToCommunity, AddModToCommunityResponse, BlockCommunity, BlockCommunityResponse,
    CommunityResponse, DeleteCommunity, EditCommunity, FollowCommunity, GetCommunityResponse,
    GetSiteResponse, PurgeCommunity, PurgeItemResponse, RemoveCommunity, Sensitive,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::OnceLock;

use crate::error::{ClientError, Result};

const API_PREFIX: &str = "/api/v3";

/// Get the API base URL based on current environment
/// - In development (localhost): talk to the instance backend on port 8536
/// - In production: use same origin (the instance serves the UI)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8536".to_string()
    } else {
        String::new()
    }
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

fn endpoint(path: &str) -> String {
    format!("{}{}{}", api_base(), API_PREFIX, path)
}

async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R> {
    if !response.ok() {
        return Err(ClientError::Http {
            status: response.status(),
        });
    }
    response.json().await.map_err(ClientError::Decode)
}

async fn send_json<B, R>(builder: RequestBuilder, body: &B) -> Result<R>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let response = builder
        .json(body)
        .map_err(ClientError::Request)?
        .send()
        .await
        .map_err(ClientError::Request)?;
    read_json(response).await
}

// ============================================================================
// Reads
// ============================================================================

pub async fn get_site(auth: Option<&Sensitive<String>>) -> Result<GetSiteResponse> {
    let mut request = Request::get(&endpoint("/site"));
    if let Some(auth) = auth {
        request = request.query([("auth", &**auth)]);
    }
    let response = request.send().await.map_err(ClientError::Request)?;
    read_json(response).await
}

pub async fn get_community(
    name: &str,
    auth: Option<&Sensitive<String>>,
) -> Result<GetCommunityResponse> {
    let mut request = Request::get(&endpoint("/community")).query([("name", name)]);
    if let Some(auth) = auth {
        request = request.query([("auth", &**auth)]);
    }
    let response = request.send().await.map_err(ClientError::Request)?;
    read_json(response).await
}

// ============================================================================
// Sidebar actions
// ============================================================================

pub async fn follow_community(form: &FollowCommunity) -> Result<CommunityResponse> {
    send_json(Request::post(&endpoint("/community/follow")), form).await
}

pub async fn block_community(form: &BlockCommunity) -> Result<BlockCommunityResponse> {
    send_json(Request::post(&endpoint("/community/block")), form).await
}

pub async fn delete_community(form: &DeleteCommunity) -> Result<CommunityResponse> {
    send_json(Request::post(&endpoint("/community/delete")), form).await
}

pub async fn remove_community(form: &RemoveCommunity) -> Result<CommunityResponse> {
    send_json(Request::post(&endpoint("/community/remove")), form).await
}

pub async fn purge_community(form: &PurgeCommunity) -> Result<PurgeItemResponse> {
    send_json(Request::post(&endpoint("/admin/purge/community")), form).await
}

pub async fn add_mod_to_community(form: &AddModToCommunity) -> Result<AddModToCommunityResponse> {
    send_json(Request::post(&endpoint("/community/mod")), form).await
}

pub async fn edit_community(form: &EditCommunity) -> Result<CommunityResponse> {
    send_json(Request::put(&endpoint("/community")), form).await
}
