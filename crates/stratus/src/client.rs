//! Main client implementation for the service bindings

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use stratus_core::Paginator;
use stratus_core::pipeline::SerializePipeline;

use crate::{
    config::{ClientConfig, Credentials, RateLimitConfig, Region},
    error::{Error, Result},
    http::{AwsTransport, ServiceCall, Transport},
    observability::{CallMetadata, RequestTimer},
    operation::{HasMetadata, Operation, decode_output},
    paginate::Paginated,
    services::{
        costexplorer::CostExplorer, ecr::Ecr, elbv2::ElbV2, glue::Glue,
        route53domains::Route53Domains, secretsmanager::SecretsManager, sqs::Sqs,
    },
};

/// Main client for the service bindings.
///
/// One client serves every service. Each call is serialized, handed to the
/// transport once, and its response decoded; retries and signing belong to the
/// transport.
///
/// # Example
///
/// ```rust,no_run
/// use stratus::{Client, config::Credentials};
/// use stratus::services::sqs::ListQueuesRequest;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::builder()
///     .region("us-east-1")
///     .credentials(Credentials::new("AKID...", "secret"))
///     .build()?;
///
/// let queues = client.sqs().list_queues(ListQueuesRequest::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    dispatch: Dispatch,

    // Lazy-initialized service resources
    glue: OnceLock<Glue>,
    route53domains: OnceLock<Route53Domains>,
    sqs: OnceLock<Sqs>,
    ecr: OnceLock<Ecr>,
    elbv2: OnceLock<ElbV2>,
    secrets_manager: OnceLock<SecretsManager>,
    cost_explorer: OnceLock<CostExplorer>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("transport", &self.inner.dispatch.transport.name())
            .finish()
    }
}

impl Client {
    /// Create a client for `region` with explicit credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are empty or the HTTP client
    /// cannot be built.
    pub fn new(region: impl Into<Region>, credentials: Credentials) -> Result<Self> {
        Self::from_config(ClientConfig::new(region, credentials))
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client configured entirely from the environment.
    #[cfg(feature = "env")]
    #[cfg_attr(docsrs, doc(cfg(feature = "env")))]
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Create a client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = AwsTransport::from_config(&config)?;
        Ok(Self::from_transport(Arc::new(transport)))
    }

    /// Create a client over a custom transport.
    ///
    /// Useful for tests and for routing calls through something other than
    /// [`AwsTransport`].
    pub fn from_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                dispatch: Dispatch { transport },
                glue: OnceLock::new(),
                route53domains: OnceLock::new(),
                sqs: OnceLock::new(),
                ecr: OnceLock::new(),
                elbv2: OnceLock::new(),
                secrets_manager: OnceLock::new(),
                cost_explorer: OnceLock::new(),
            }),
        }
    }

    /// Send one operation and decode its response.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use stratus::Client;
    /// # use stratus::services::glue::GetDatabaseRequest;
    /// # async fn example(client: Client) -> stratus::Result<()> {
    /// let request = GetDatabaseRequest::builder().name("sales").build()?;
    /// let database = client.send(request).await?;
    /// println!("{:?}", database.response_metadata.request_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send<O: Operation>(&self, operation: O) -> Result<O::Output> {
        self.inner.dispatch.send(operation).await
    }

    /// Lazily page through a list operation.
    pub fn paginate<O: Paginated>(&self, operation: O) -> Paginator<O::Output, Error> {
        self.inner.dispatch.paginate(operation)
    }

    /// Access the Glue API.
    pub fn glue(&self) -> &Glue {
        self.inner
            .glue
            .get_or_init(|| Glue::new(self.inner.dispatch.clone()))
    }

    /// Access the Route 53 Domains API.
    pub fn route53domains(&self) -> &Route53Domains {
        self.inner
            .route53domains
            .get_or_init(|| Route53Domains::new(self.inner.dispatch.clone()))
    }

    /// Access the SQS API.
    pub fn sqs(&self) -> &Sqs {
        self.inner
            .sqs
            .get_or_init(|| Sqs::new(self.inner.dispatch.clone()))
    }

    /// Access the ECR API.
    pub fn ecr(&self) -> &Ecr {
        self.inner
            .ecr
            .get_or_init(|| Ecr::new(self.inner.dispatch.clone()))
    }

    /// Access the Elastic Load Balancing v2 API.
    pub fn elbv2(&self) -> &ElbV2 {
        self.inner
            .elbv2
            .get_or_init(|| ElbV2::new(self.inner.dispatch.clone()))
    }

    /// Access the Secrets Manager API.
    pub fn secrets_manager(&self) -> &SecretsManager {
        self.inner
            .secrets_manager
            .get_or_init(|| SecretsManager::new(self.inner.dispatch.clone()))
    }

    /// Access the Cost Explorer API.
    pub fn cost_explorer(&self) -> &CostExplorer {
        self.inner
            .cost_explorer
            .get_or_init(|| CostExplorer::new(self.inner.dispatch.clone()))
    }

    /// Get the transport name (for debugging)
    pub fn transport_name(&self) -> &'static str {
        self.inner.dispatch.transport.name()
    }
}

/// Shared send path used by the client and its service resources.
#[derive(Debug, Clone)]
pub(crate) struct Dispatch {
    transport: Arc<dyn Transport>,
}

impl Dispatch {
    pub(crate) async fn send<O: Operation>(&self, mut operation: O) -> Result<O::Output> {
        operation.prepare();
        let service = O::service();
        let call = CallMetadata::new(service.name, O::NAME);
        let timer = RequestTimer::start();
        call.log_start();

        let result = async {
            let input = operation.to_json_value()?;
            let raw = self
                .transport
                .invoke(ServiceCall {
                    service,
                    operation: O::NAME,
                    input,
                })
                .await?;
            decode_output::<O>(&raw)
        }
        .await;

        match &result {
            Ok(output) => {
                let metadata = output.response_metadata();
                call.log_success(metadata.http_status, timer.elapsed(), metadata.retries);
            }
            Err(err) => call.log_error(timer.elapsed(), err),
        }
        result
    }

    pub(crate) fn paginate<O: Paginated>(&self, operation: O) -> Paginator<O::Output, Error> {
        let dispatch = self.clone();
        Paginator::new(
            move |token: Option<String>| {
                let dispatch = dispatch.clone();
                let mut request = operation.clone();
                if let Some(token) = token {
                    request.set_token(token);
                }
                async move { dispatch.send(request).await }
            },
            |page: &O::Output| O::next_token(page),
        )
    }
}

/// Builder for creating a configured Client.
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Set the region.
    pub fn region(mut self, region: impl Into<Region>) -> Self {
        self.config.region = Some(region.into());
        self
    }

    /// Set the signing credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.config.credentials = Some(credentials);
        self
    }

    /// Send every service to this URL (LocalStack, test servers).
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint_url = Some(url.into());
        self
    }

    /// Set the default timeout for requests.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the maximum number of retries.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Route requests through an HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Enable client-side rate limiting.
    pub fn rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.config.rate_limit = Some(rate_limit);
        self
    }

    /// Append to the `user-agent` header.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let (key, value) = crate::config::parse_header(&key.into(), &value.into())?;
        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}
