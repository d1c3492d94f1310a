use std::fmt;
use std::time::Duration;

use log::debug;
use reqwest::Client as ReqwestClient;
use serde_json::{json, Value};
use url::Url;

use crate::api::backup::BackupApi;
use crate::api::device::DeviceApi;
use crate::api::event::EventApi;
use crate::api::stat::StatApi;
use crate::api::station::StationApi;
use crate::api::wlan::WlanApi;
use crate::models::api_response::decode_envelope;
use crate::models::auth::LoginRequest;
use crate::models::record::Record;
use crate::{ControllerError, ControllerResult};

/// Builder for [`Controller`].
///
/// Provides a fluent API for configuring a controller session, with
/// validation at build time. [`ControllerBuilder::build`] performs the login
/// request, so a built `Controller` is ready to use.
#[derive(Default)]
pub struct ControllerBuilder {
    host: Option<String>,
    controller_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    version: Option<String>,
    site: Option<String>,
    accept_invalid_certs: bool,
    legacy_tls: bool,
    timeout: Option<Duration>,
    http_client: Option<ReqwestClient>,
}

impl ControllerBuilder {
    /// Sets the controller hostname. The base URL becomes
    /// `https://<host>:8443/`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the full controller URL, overriding [`ControllerBuilder::host`].
    pub fn controller_url(mut self, url: impl Into<String>) -> Self {
        self.controller_url = Some(url.into());
        self
    }

    /// Sets the username for authentication.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password for authentication.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the controller API version tag, `"v2"` or `"v3"` (default `"v2"`).
    /// Unrecognized tags are treated as `"v2"`.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the site identifier (default `"default"`). Only `"v3"` paths
    /// include the site.
    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Accept invalid/self-signed TLS certificates. Legacy controllers ship
    /// with a self-signed certificate, so this is commonly needed.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Lowers the minimum negotiated TLS version for old controller firmware
    /// that cannot speak modern TLS. Off by default; prefer the platform's
    /// secure negotiation unless the firmware requires the override.
    pub fn legacy_tls(mut self, legacy: bool) -> Self {
        self.legacy_tls = legacy;
        self
    }

    /// Sets an HTTP request timeout. By default no timeout is configured and
    /// a request the controller never answers blocks indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom reqwest client (e.g., for testing). The client must have
    /// a cookie store enabled, since the session lives in cookies.
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Validates the configuration, constructs the HTTP client and logs in.
    ///
    /// This blocks on network I/O: the login POST is issued before the
    /// `Controller` is returned. The legacy controller does not report login
    /// failures on the login response itself; bad credentials surface as an
    /// envelope error on the first authenticated call.
    pub async fn build(self) -> ControllerResult<Controller> {
        let username = self
            .username
            .ok_or_else(|| ControllerError::ConfigurationError("Username is required".into()))?;
        let password = self
            .password
            .ok_or_else(|| ControllerError::ConfigurationError("Password is required".into()))?;

        let url_str = match (self.controller_url, self.host) {
            (Some(url), _) => url,
            (None, Some(host)) => format!("https://{host}:8443/"),
            (None, None) => {
                return Err(ControllerError::ConfigurationError(
                    "Controller host or URL is required".into(),
                ))
            }
        };
        let mut base_url = Url::parse(&url_str).map_err(|e| {
            ControllerError::ConfigurationError(format!("Invalid controller URL: {e}"))
        })?;
        // relative joins need the trailing slash
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let version = self.version.unwrap_or_else(|| "v2".to_string());
        let site = self.site.unwrap_or_else(|| "default".to_string());
        let api_path = construct_api_path(&version, &site);

        let http_client = match self.http_client {
            Some(custom) => custom,
            None => {
                let mut builder = ReqwestClient::builder()
                    .cookie_store(true)
                    .danger_accept_invalid_certs(self.accept_invalid_certs)
                    .user_agent(concat!("unifi-legacy/", env!("CARGO_PKG_VERSION")));
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if self.legacy_tls {
                    builder = builder.min_tls_version(reqwest::tls::Version::TLS_1_0);
                }
                builder.build().map_err(|e| {
                    ControllerError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?
            }
        };

        let controller = Controller {
            base_url,
            api_path,
            username,
            site,
            http_client,
        };
        controller.login(&password).await?;
        Ok(controller)
    }
}

/// A session against one legacy UniFi controller.
///
/// Owns one cookie-authenticated HTTP session, established at build time.
/// The session is never re-authenticated: once the controller expires it,
/// the next call fails with an envelope error and a new `Controller` must be
/// built. No logout is performed on drop.
///
/// Methods take `&self` and issue exactly one HTTP request each; the client
/// is designed for a single logical caller per instance.
pub struct Controller {
    base_url: Url,
    api_path: String,
    username: String,
    site: String,
    http_client: ReqwestClient,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("base_url", &self.base_url.as_str())
            .field("api_path", &self.api_path)
            .field("username", &self.username)
            .field("site", &self.site)
            .finish()
    }
}

/// Builds the versioned API path prefix: `api/` for `v2` (and anything
/// unrecognized), `api/s/<site>/` for `v3`.
pub(crate) fn construct_api_path(version: &str, site: &str) -> String {
    match version {
        "v3" => format!("api/s/{site}/"),
        _ => "api/".to_string(),
    }
}

impl Controller {
    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::default()
    }

    /// Gets the configured site identifier.
    pub fn site(&self) -> &str {
        &self.site
    }

    async fn login(&self, password: &str) -> ControllerResult<()> {
        debug!("login() as {}", self.username);
        let login_url = self.base_url.join("login")?;
        let form = LoginRequest::new(self.username.clone(), password.to_string());
        let response = self.http_client.post(login_url).form(&form).send().await?;
        // The legacy login endpoint answers with an empty body and the session
        // cookie; the body is read and discarded without validation.
        let _ = response.bytes().await?;
        Ok(())
    }

    /// Issues one request against an API endpoint suffix and decodes the
    /// response envelope. A `payload` is serialized and form-encoded under the
    /// single `json` key and sent via POST; without one the request is a GET.
    pub(crate) async fn read(
        &self,
        suffix: &str,
        payload: Option<Value>,
    ) -> ControllerResult<Value> {
        let url = self.base_url.join(&format!("{}{}", self.api_path, suffix))?;
        debug!("read {}", url);
        let response = match payload {
            Some(value) => {
                let form = [("json", serde_json::to_string(&value)?)];
                self.http_client.post(url).form(&form).send().await?
            }
            None => self.http_client.get(url).send().await?,
        };
        let body: Value = response.error_for_status()?.json().await?;
        decode_envelope(body)
    }

    /// Like [`Controller::read`], but decodes the unwrapped `data` array into
    /// opaque records.
    pub(crate) async fn read_records(
        &self,
        suffix: &str,
        payload: Option<Value>,
    ) -> ControllerResult<Vec<Record>> {
        let data = self.read(suffix, payload).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Issues a per-device command: `{mac, cmd}` POSTed to `cmd/<mgr>`.
    /// The decoded result is discarded; the controller accepts commands for
    /// unknown MACs with a success envelope, so a no-op is indistinguishable
    /// from an applied command.
    pub(crate) async fn mac_cmd(&self, mac: &str, cmd: &str, mgr: &str) -> ControllerResult<()> {
        debug!("mac_cmd({mac}, {cmd})");
        let payload = json!({ "mac": mac, "cmd": cmd });
        self.read(&format!("cmd/{mgr}"), Some(payload)).await?;
        Ok(())
    }

    /// Issues a system-wide command: `{cmd}` POSTed to `cmd/<mgr>`. Returns
    /// the decoded result for commands whose output matters (backup).
    pub(crate) async fn sys_cmd(&self, cmd: &str, mgr: &str) -> ControllerResult<Value> {
        debug!("sys_cmd({cmd})");
        let payload = json!({ "cmd": cmd });
        self.read(&format!("cmd/{mgr}"), Some(payload)).await
    }

    /// Fetches raw bytes from a path relative to the base URL through the
    /// authenticated session. Used for backup downloads.
    pub(crate) async fn read_bytes(&self, relative: &str) -> ControllerResult<Vec<u8>> {
        let url = self.base_url.join(relative)?;
        debug!("read_bytes {}", url);
        let response = self.http_client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Access point operations.
    pub fn devices(&self) -> DeviceApi<'_> {
        DeviceApi::new(self)
    }

    /// Client (station) and user operations.
    pub fn stations(&self) -> StationApi<'_> {
        StationApi::new(self)
    }

    /// WLAN configuration listing.
    pub fn wlans(&self) -> WlanApi<'_> {
        WlanApi::new(self)
    }

    /// Alert and event operations.
    pub fn events(&self) -> EventApi<'_> {
        EventApi::new(self)
    }

    /// Statistics reports.
    pub fn stats(&self) -> StatApi<'_> {
        StatApi::new(self)
    }

    /// Backup creation and retrieval.
    pub fn backups(&self) -> BackupApi<'_> {
        BackupApi::new(self)
    }
}
