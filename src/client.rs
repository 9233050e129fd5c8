// Core Client Implementation

use crate::types::*;
use crate::request_error;
use crate::middleware::{RequestMiddleware, ResponseMiddleware};
use crate::resources::*;
use crate::utils::payload::{error_message_from_body, object_id_from_uri};
use reqwest::{header, Client as HttpClient, Method};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use lazy_static::lazy_static;
use tracing::{debug, info, warn};

/// Result of a request operation
pub type RequestHandlerFuture = Pin<Box<dyn Future<Output = CupiResult<WebCallResult>> + Send>>;

/// Function that answers a request in place of the HTTP transport
type RequestHandlerFn = dyn Fn(WebCallRequest) -> RequestHandlerFuture + Send + Sync + 'static;

/// Trait for mocking the provisioning interface for testing purposes
pub trait MockApiHandler: Send + Sync {
    /// Process a request and return the exchange outcome
    fn process_request(&self, request: WebCallRequest) -> RequestHandlerFuture;
}

lazy_static! {
    static ref CLIENT_CONFIG: Mutex<TlsConfig> = Mutex::new(TlsConfig::default());
    static ref TOTAL_PATTERN: regex::Regex =
        regex::Regex::new(r#"(?:\btotal="|"@total"\s*:\s*"?)(\d+)"#).expect("static regex");
}

/// Default port and path of the provisioning interface
const DEFAULT_PORT: u16 = 8443;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Configuration for TLS
#[derive(Clone, Debug)]
pub struct TlsConfig {
    pub min_tls_version: Option<reqwest::tls::Version>,
    /// Connection ships with a self-signed certificate; turning this off is
    /// common in labs and should be a deliberate choice everywhere else
    pub cert_verification: bool,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            min_tls_version: Some(reqwest::tls::Version::TLS_1_2),
            cert_verification: true,
        }
    }
}

/// Set global TLS configuration for all servers created afterwards
pub fn set_tls_config(config: TlsConfig) {
    if let Ok(mut cfg) = CLIENT_CONFIG.lock() {
        *cfg = config;
    }
}

fn current_tls_config() -> TlsConfig {
    match CLIENT_CONFIG.lock() {
        Ok(guard) => guard.clone(),
        Err(_) => TlsConfig::default(),
    }
}

fn build_http_client(tls_config: &TlsConfig, timeout: Duration) -> CupiResult<HttpClient> {
    let mut builder = HttpClient::builder()
        .timeout(timeout)
        .danger_accept_invalid_certs(!tls_config.cert_verification);

    if let Some(version) = tls_config.min_tls_version {
        builder = builder.min_tls_version(version);
    }

    builder
        .build()
        .map_err(|e| request_error!("Failed to create HTTP client", format!("timeout {:?}", timeout), e))
}

/// Parse and re-serialize a URL so clause text like `(name is x)` is
/// percent-encoded the same way for every transport
fn normalize_url(raw: &str) -> CupiResult<String> {
    url::Url::parse(raw)
        .map(String::from)
        .map_err(|e| CupiError::InvalidParameter(format!("Invalid URL {}: {}", raw, e)))
}

/// A Unity Connection server and the login used against its provisioning
/// interface. Every resource client borrows its transport from here.
#[derive(Clone)]
pub struct ConnectionServer {
    pub(crate) http_client: HttpClient,
    pub(crate) credentials: SecureCredentials,
    pub server_name: String,
    pub base_url: String,
    pub format: ContentFormat,
    pub(crate) tls_config: TlsConfig,
    pub(crate) timeout: Duration,
    pub(crate) request_middleware: Vec<Arc<dyn RequestMiddleware>>,
    pub(crate) response_middleware: Vec<Arc<dyn ResponseMiddleware>>,
    pub(crate) request_handler: Arc<Mutex<Option<Arc<RequestHandlerFn>>>>,
}

impl fmt::Debug for ConnectionServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionServer")
            .field("server_name", &self.server_name)
            .field("base_url", &self.base_url)
            .field("format", &self.format)
            .field("credentials", &self.credentials)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ConnectionServer {
    /// Create a server handle using the global TLS configuration
    pub fn new(
        server_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> CupiResult<Self> {
        Self::with_tls_config(server_name, username, password, current_tls_config())
    }

    /// Create a server handle with a specific TLS configuration
    pub fn with_tls_config(
        server_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        tls_config: TlsConfig,
    ) -> CupiResult<Self> {
        let server_name = server_name.into().trim().to_string();
        let credentials = SecureCredentials::new(username, password);
        if server_name.is_empty() || credentials.is_incomplete() {
            return Err(CupiError::MissingCredentials {
                location: Some(concat!(file!(), ":", line!()).to_string()),
            });
        }

        let http_client = build_http_client(&tls_config, DEFAULT_TIMEOUT)?;
        let base_url = format!("https://{}:{}/vmrest/", server_name, DEFAULT_PORT);
        info!("Connection server configured: {}", base_url);

        Ok(Self {
            http_client,
            credentials,
            server_name,
            base_url,
            format: ContentFormat::default(),
            tls_config,
            timeout: DEFAULT_TIMEOUT,
            request_middleware: Vec::new(),
            response_middleware: Vec::new(),
            request_handler: Arc::new(Mutex::new(None)),
        })
    }

    /// Point at a custom base URL (proxy, test server); a trailing slash is added
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Choose the representation requested from the server
    pub fn with_format(mut self, format: ContentFormat) -> Self {
        self.format = format;
        self
    }

    /// Change the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> CupiResult<Self> {
        if timeout.is_zero() {
            return Err(CupiError::ValidationError("timeout must be greater than 0".into()));
        }
        self.http_client = build_http_client(&self.tls_config, timeout)?;
        self.timeout = timeout;
        Ok(self)
    }

    /// Add middleware that processes requests before they're sent
    pub fn add_request_middleware(mut self, middleware: impl RequestMiddleware + 'static) -> Self {
        self.request_middleware.push(Arc::new(middleware));
        self
    }

    /// Add middleware that processes results after they're received
    pub fn add_response_middleware(mut self, middleware: impl ResponseMiddleware + 'static) -> Self {
        self.response_middleware.push(Arc::new(middleware));
        self
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// Absolute URL for a path relative to the provisioning root
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Set custom request handler for this server
    /// This is useful for testing
    pub fn set_request_handler<F>(&self, handler: F)
    where
        F: Fn(WebCallRequest) -> RequestHandlerFuture + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.request_handler.lock() {
            *guard = Some(Arc::new(handler));
        }
    }

    /// Create a server whose requests are answered by a mock handler
    pub fn with_mock_api(
        server_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        mock_api: Arc<dyn MockApiHandler>,
    ) -> CupiResult<Self> {
        let server = Self::new(server_name, username, password)?;
        server.set_request_handler(move |request: WebCallRequest| mock_api.process_request(request));
        Ok(server)
    }

    /// Issue one request and describe the outcome.
    ///
    /// Transport failures and error statuses come back as a result with
    /// `success == false`. Only middleware and an unparsable URL fail the
    /// call outright.
    pub async fn send_request(&self, request: WebCallRequest) -> CupiResult<WebCallResult> {
        let mut request = request;
        for middleware in &self.request_middleware {
            request = middleware.process_request(request).await?;
        }
        request.url = normalize_url(&request.url)?;

        let handler_opt = {
            if let Ok(guard) = self.request_handler.lock() {
                (*guard).as_ref().map(|handler| handler.clone())
            } else {
                None
            }
        };

        let mut result = match handler_opt {
            Some(handler) => handler(request.clone()).await?,
            None => self.execute_http(&request).await,
        };
        result = result.for_request(&request);

        if result.success {
            if request.method == Method::POST && result.returned_object_id.is_none() {
                result.returned_object_id = object_id_from_uri(&result.response_text);
            }
            if result.total_object_count == 0 {
                if let Some(total) = TOTAL_PATTERN
                    .captures(&result.response_text)
                    .and_then(|c| c[1].parse().ok())
                {
                    result.total_object_count = total;
                }
            }
        }

        for middleware in &self.response_middleware {
            result = middleware.process_response(result).await?;
        }

        if result.success {
            debug!("{} {} -> {}", result.method, result.url, result.status_code);
        } else {
            warn!(
                "{} {} failed: {}",
                result.method,
                result.url,
                sanitize_error_message(&result.error_text)
            );
        }
        Ok(result)
    }

    async fn execute_http(&self, request: &WebCallRequest) -> WebCallResult {
        let mut builder = self
            .http_client
            .request(request.method.clone(), &request.url)
            .basic_auth(self.credentials.username(), Some(self.credentials.password()))
            .header(header::ACCEPT, self.format.accept_header());

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder
                .header(header::CONTENT_TYPE, "application/xml")
                .body(body.clone());
        }

        debug!("Sending {} {}", request.method, request.url);

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                return WebCallResult::failure(0, sanitize_error_message(&e.to_string()));
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                return WebCallResult::failure(
                    status.as_u16(),
                    format!("Failed to read response body: {}", e),
                );
            }
        };

        if status.is_success() {
            WebCallResult::ok(status.as_u16(), text)
        } else {
            let reason = status.canonical_reason().unwrap_or("Unknown status");
            let error_text = match error_message_from_body(&text) {
                Some(detail) => format!("{} {}: {}", status.as_u16(), reason, detail),
                None => format!("{} {}", status.as_u16(), reason),
            };
            WebCallResult::failure(status.as_u16(), error_text).with_response_text(text)
        }
    }

    fn shared(&self) -> Arc<ConnectionServer> {
        Arc::new(self.clone())
    }

    /// Owners of call handlers
    pub fn call_handler_owners(&self) -> CallHandlerOwnerClient {
        CallHandlerOwnerClient::new(self.shared())
    }

    /// Cluster membership and server state
    pub fn cluster(&self) -> ClusterClient {
        ClusterClient::new(self.shared())
    }

    pub fn configuration_values(&self) -> ConfigurationValueClient {
        ConfigurationValueClient::new(self.shared())
    }

    /// PIN and password credentials of users
    pub fn credentials(&self) -> CredentialClient {
        CredentialClient::new(self.shared())
    }

    pub fn distribution_list_members(&self) -> DistributionListMemberClient {
        DistributionListMemberClient::new(self.shared())
    }

    /// Users across every location in the network
    pub fn global_users(&self) -> GlobalUserClient {
        GlobalUserClient::new(self.shared())
    }

    pub fn interview_questions(&self) -> InterviewQuestionClient {
        InterviewQuestionClient::new(self.shared())
    }

    pub fn locations(&self) -> LocationClient {
        LocationClient::new(self.shared())
    }

    /// Mailbox size, quota and folder counts of users
    pub fn mailboxes(&self) -> MailboxInfoClient {
        MailboxInfoClient::new(self.shared())
    }

    pub fn notification_templates(&self) -> NotificationTemplateClient {
        NotificationTemplateClient::new(self.shared())
    }

    pub fn partitions(&self) -> PartitionClient {
        PartitionClient::new(self.shared())
    }

    pub fn phone_system_associations(&self) -> PhoneSystemAssociationClient {
        PhoneSystemAssociationClient::new(self.shared())
    }

    pub fn policies(&self) -> PolicyClient {
        PolicyClient::new(self.shared())
    }

    pub fn port_groups(&self) -> PortGroupClient {
        PortGroupClient::new(self.shared())
    }

    /// Codecs advertised by port groups
    pub fn port_group_codecs(&self) -> PortGroupCodecClient {
        PortGroupCodecClient::new(self.shared())
    }

    pub fn port_group_templates(&self) -> PortGroupTemplateClient {
        PortGroupTemplateClient::new(self.shared())
    }

    pub fn restriction_patterns(&self) -> RestrictionPatternClient {
        RestrictionPatternClient::new(self.shared())
    }

    pub fn rtp_codec_defs(&self) -> RtpCodecDefClient {
        RtpCodecDefClient::new(self.shared())
    }

    pub fn schedule_set_members(&self) -> ScheduleSetMemberClient {
        ScheduleSetMemberClient::new(self.shared())
    }

    pub fn smpp_providers(&self) -> SmppProviderClient {
        SmppProviderClient::new(self.shared())
    }

    pub fn timezones(&self) -> TimeZoneClient {
        TimeZoneClient::new(self.shared())
    }

    pub fn vms_servers(&self) -> VmsServerClient {
        VmsServerClient::new(self.shared())
    }
}
