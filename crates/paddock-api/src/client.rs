// Hand-crafted async HTTP client for the paddock platform admin API.
//
// Base path: /api/admin/
// Auth: `Authorization: Bearer <token>` obtained from POST /api/admin/auth/login

use std::sync::{Arc, RwLock};

use reqwest::header::{AUTHORIZATION, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::envelope::{ListPage, MutationAck, RawListEnvelope, RawMutationEnvelope};
use crate::transport::TransportConfig;
use crate::types::SessionInfo;

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    /// Bearer token; populated by `login()` or `with_token()`.
    token: RwLock<Option<SecretString>>,
}

/// Async client for the platform admin API.
///
/// Cheaply cloneable (`Arc` inner); one instance is shared by every list
/// controller and mutation executor of a session. All endpoints answer
/// JSON under `/api/admin/`.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<ClientInner>,
}

impl AdminClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build an unauthenticated client from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: Self::normalize_base_url(base_url)?,
                token: RwLock::new(None),
            }),
        })
    }

    /// Wrap an existing `reqwest::Client` (tests, custom transports).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: Self::normalize_base_url(base_url)?,
                token: RwLock::new(None),
            }),
        })
    }

    /// Seed the client with an already-issued bearer token.
    pub fn with_token(self, token: SecretString) -> Self {
        self.store_token(Some(token));
        self
    }

    /// Build the base URL ending in `/api/admin/`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        if path.ends_with("/api/admin") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/admin/"));
        }
        Ok(url)
    }

    // ── Auth ─────────────────────────────────────────────────────────

    /// Authenticate and store the issued bearer token for later requests.
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<SessionInfo, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }

        let url = self.url("auth/login");
        debug!("POST {url}");

        let resp = self
            .inner
            .http
            .post(url)
            .json(&Body {
                email,
                password: password.expose_secret(),
            })
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let raw = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&raw)
                .ok()
                .and_then(|e| e.message.or(e.error))
                .unwrap_or_else(|| "invalid credentials".into());
            return Err(Error::Authentication { message });
        }

        let info: SessionInfo = self.handle_response(resp).await?;
        self.store_token(Some(SecretString::from(info.token.clone())));
        Ok(info)
    }

    /// Invalidate the server session and drop the stored token.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.url("auth/logout");
        debug!("POST {url}");
        let resp = self.request(reqwest::Method::POST, url)?.send().await?;
        self.store_token(None);
        self.handle_empty(resp).await
    }

    /// Whether a bearer token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .token
            .read()
            .map(|t| t.is_some())
            .unwrap_or(false)
    }

    fn store_token(&self, token: Option<SecretString>) {
        if let Ok(mut guard) = self.inner.token.write() {
            *guard = token;
        }
    }

    // ── URL / request builders ───────────────────────────────────────

    /// Join a relative path (e.g. `"animals"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/api/admin/`, so joining works.
        self.inner
            .base_url
            .join(path)
            .unwrap_or_else(|_| self.inner.base_url.clone())
    }

    /// Start a request with the bearer token attached.
    fn request(&self, method: reqwest::Method, url: Url) -> Result<reqwest::RequestBuilder, Error> {
        let mut builder = self.inner.http.request(method, url);
        let guard = self.inner.token.read().map_err(|_| Error::NotAuthenticated)?;
        if let Some(ref token) = *guard {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|_| Error::NotAuthenticated)?;
            value.set_sensitive(true);
            builder = builder.header(AUTHORIZATION, value);
        }
        Ok(builder)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    /// GET a list endpoint with pre-built query params, normalizing the
    /// response envelope into a `ListPage`.
    ///
    /// `page`/`limit` must mirror the values inside `params`; they seed
    /// the pagination metadata when the server omits an echo.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
        page: u32,
        limit: u32,
    ) -> Result<ListPage<T>, Error> {
        let url = self.url(path);
        debug!("GET {url} params={params:?}");

        let resp = self
            .request(reqwest::Method::GET, url)?
            .query(params)
            .send()
            .await?;
        let env: RawListEnvelope<T> = self.handle_response(resp).await?;
        env.normalize(page, limit)
    }

    /// GET a single record; unwraps the `{success, data}` envelope when
    /// present, otherwise decodes the body directly.
    pub(crate) async fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.request(reqwest::Method::GET, url)?.send().await?;
        let body = self.read_body(resp).await?;

        if let Ok(env) = serde_json::from_str::<RawMutationEnvelope>(&body) {
            if let Some(data) = env.data {
                return serde_json::from_value(data).map_err(|e| Error::Deserialization {
                    message: e.to_string(),
                    body,
                });
            }
        }
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }

    pub(crate) async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<MutationAck, Error> {
        let url = self.url(path);
        debug!("POST {url}");
        let resp = self
            .request(reqwest::Method::POST, url)?
            .json(body)
            .send()
            .await?;
        self.handle_mutation(resp).await
    }

    pub(crate) async fn put<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<MutationAck, Error> {
        let url = self.url(path);
        debug!("PUT {url}");
        let resp = self
            .request(reqwest::Method::PUT, url)?
            .json(body)
            .send()
            .await?;
        self.handle_mutation(resp).await
    }

    pub(crate) async fn patch<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<MutationAck, Error> {
        let url = self.url(path);
        debug!("PATCH {url}");
        let resp = self
            .request(reqwest::Method::PATCH, url)?
            .json(body)
            .send()
            .await?;
        self.handle_mutation(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<MutationAck, Error> {
        let url = self.url(path);
        debug!("DELETE {url}");
        let resp = self.request(reqwest::Method::DELETE, url)?.send().await?;
        self.handle_mutation(resp).await
    }

    /// POST a multipart form (file uploads: slide images, CSV imports).
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<MutationAck, Error> {
        let url = self.url(path);
        debug!("POST {url} (multipart)");
        let resp = self
            .request(reqwest::Method::POST, url)?
            .multipart(form)
            .send()
            .await?;
        self.handle_mutation(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn read_body(&self, resp: reqwest::Response) -> Result<String, Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp.text().await?)
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let body = self.read_body(resp).await?;
        serde_json::from_str(&body).map_err(|e| {
            // Truncate on char boundaries; bodies carry Arabic text.
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    async fn handle_mutation(&self, resp: reqwest::Response) -> Result<MutationAck, Error> {
        let env: RawMutationEnvelope = self.handle_response(resp).await?;
        env.normalize()
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::SessionExpired;
        }

        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            Error::Api {
                status: status.as_u16(),
                message: err
                    .message
                    .or(err.error)
                    .unwrap_or_else(|| status.to_string()),
                code: err.code,
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
                code: None,
            }
        }
    }
}
