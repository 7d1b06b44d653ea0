use gloo_storage::{LocalStorage, Storage};
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::models::{
    Ack, AddMemberRequest, ApiEnvelope, ApiError, AuthGrant, Community, Content,
    CreateCommunityRequest, MemberRecord, PageMeta, SessionUser, SignInRequest, SignUpRequest,
};

/// Storage key the bearer token is persisted under.
const AUTH_TOKEN_KEY: &str = "authToken";
/// Same-origin by default; overridden at build time for split deployments.
const DEFAULT_BASE_URL: &str = "";

thread_local! {
    static SHARED_CLIENT: OnceCell<WishShareClient> = OnceCell::new();
}

fn default_base_url() -> &'static str {
    option_env!("WISHSHARE_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Lightweight API client for WishShare web interactions.
///
/// Attaches `Authorization: Bearer <token>` from storage to every
/// authenticated call and unwraps the `{status, content, message}` envelope
/// into typed results.
#[derive(Clone, Debug)]
pub struct WishShareClient {
    base_url: String,
    client: Client,
}

impl WishShareClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        WishShareClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(default_base_url())).clone())
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match stored_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Non-2xx bodies still carry the envelope's message when the
            // server produced one.
            let message = response
                .json::<Ack>()
                .await
                .ok()
                .and_then(|ack| ack.message);
            return Err(ApiError::Api {
                status: Some(status.as_u16()),
                message,
            });
        }
        Ok(response)
    }

    async fn unwrap_content<T: DeserializeOwned>(response: Response) -> Result<Content<T>, ApiError> {
        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;

        if !envelope.status {
            return Err(ApiError::Api {
                status: None,
                message: envelope.message,
            });
        }
        envelope
            .content
            .ok_or_else(|| ApiError::Decode("response envelope has no content".to_string()))
    }

    async fn unwrap_ack(response: Response) -> Result<(), ApiError> {
        let ack: Ack = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;

        if ack.status {
            Ok(())
        } else {
            Err(ApiError::Api {
                status: None,
                message: ack.message,
            })
        }
    }

    /// Authenticate with email/password credentials.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<AuthGrant, ApiError> {
        let url = self.api_url("v1/auth/signin");
        let response = Self::send(self.client.post(url).json(request)).await?;
        Ok(Self::unwrap_content::<AuthGrant>(response).await?.data)
    }

    /// Register a new account.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthGrant, ApiError> {
        let url = self.api_url("v1/auth/signup");
        let response = Self::send(self.client.post(url).json(request)).await?;
        Ok(Self::unwrap_content::<AuthGrant>(response).await?.data)
    }

    /// Retrieve the profile belonging to the stored credential.
    pub async fn get_current_user(&self) -> Result<SessionUser, ApiError> {
        let url = self.api_url("v1/auth/me");
        let response = Self::send(self.authorize(self.client.get(url))).await?;
        Ok(Self::unwrap_content::<SessionUser>(response).await?.data)
    }

    /// List one page of communities the current user owns.
    pub async fn list_owned_communities(
        &self,
        page: u32,
    ) -> Result<(Vec<Community>, Option<PageMeta>), ApiError> {
        let url = self.api_url("v1/community/me/owner");
        let response =
            Self::send(self.authorize(self.client.get(url).query(&[("page", page)]))).await?;
        let content = Self::unwrap_content::<Vec<Community>>(response).await?;
        Ok((content.data, content.meta))
    }

    /// List one page of communities the current user has joined.
    pub async fn list_joined_communities(
        &self,
        page: u32,
    ) -> Result<(Vec<Community>, Option<PageMeta>), ApiError> {
        let url = self.api_url("v1/community/me/member");
        let response =
            Self::send(self.authorize(self.client.get(url).query(&[("page", page)]))).await?;
        let content = Self::unwrap_content::<Vec<Community>>(response).await?;
        Ok((content.data, content.meta))
    }

    /// Create a community owned by the current user.
    pub async fn create_community(&self, request: &CreateCommunityRequest) -> Result<(), ApiError> {
        let url = self.api_url("v1/community");
        let response = Self::send(self.authorize(self.client.post(url).json(request))).await?;
        Self::unwrap_ack(response).await
    }

    /// List every member of a community.
    pub async fn list_members(&self, community_id: &str) -> Result<Vec<MemberRecord>, ApiError> {
        let url = self.api_url(&format!("v1/community/{community_id}/members"));
        let response = Self::send(self.authorize(self.client.get(url))).await?;
        Ok(Self::unwrap_content::<Vec<MemberRecord>>(response)
            .await?
            .data)
    }

    /// Add a user to a community with the given role.
    pub async fn add_member(&self, request: &AddMemberRequest) -> Result<(), ApiError> {
        let url = self.api_url("v1/member");
        let response = Self::send(self.authorize(self.client.post(url).json(request))).await?;
        Self::unwrap_ack(response).await
    }

    /// Remove a membership from a community.
    pub async fn remove_member(
        &self,
        community_id: &str,
        member_id: &str,
    ) -> Result<(), ApiError> {
        let url = self.api_url(&format!("v1/member/{community_id}/{member_id}"));
        let response = Self::send(self.authorize(self.client.delete(url))).await?;
        Self::unwrap_ack(response).await
    }
}

/// Read the bearer token persisted by the last successful sign-in.
pub fn stored_token() -> Option<String> {
    LocalStorage::get(AUTH_TOKEN_KEY).ok()
}

/// Persist a freshly granted bearer token.
pub fn store_token(token: &str) {
    if let Err(err) = LocalStorage::set(AUTH_TOKEN_KEY, token) {
        log::error!("failed to persist auth token: {err}");
    }
}

/// Remove the stored credential. Only logout calls this; a failed session
/// restore leaves the token in place.
pub fn delete_token() {
    LocalStorage::delete(AUTH_TOKEN_KEY);
}
