//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error,
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use actix_web_prom::PrometheusMetrics;
use prlabel_config::Config;
use prlabel_core::{CoreContext, CoreModule};
use prlabel_ghapi_interface::ApiService;
use tracing::info;

use crate::{
    ghapi::MetricsApiService, health::health_check_route, metrics::build_metrics_handler,
    middlewares::VerifySignature, webhook::configure_webhook_handlers, Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// API adapter
    pub api_service: Box<dyn ApiService>,
}

impl AppContext {
    /// Create new app context, counting GitHub API calls.
    pub fn new(config: Config, core_module: CoreModule) -> Self {
        Self {
            config: config.clone(),
            core_module,
            api_service: Box::new(MetricsApiService::new(config)),
        }
    }

    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        core_module: CoreModule,
        api_service: Box<dyn ApiService>,
    ) -> Self {
        Self {
            config,
            core_module,
            api_service,
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
    prometheus: PrometheusMetrics,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context.clone())
        .wrap(prometheus)
        .wrap(Logger::default())
        .service(
            web::scope("/webhook")
                .wrap(VerifySignature::new(&context.config))
                .configure(configure_webhook_handlers),
        )
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on prlabel!" }))
            }),
        )
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            // Display Bad Request response on invalid JSON data
            error::InternalError::from_response(
                "",
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": err.to_string()
                })),
            )
            .into()
        }))
}

/// Run bot server.
pub async fn run_bot_server(context: AppContext) -> Result<()> {
    let address = format!(
        "{}:{}",
        context.config.server.bind_ip, context.config.server.bind_port
    );
    let workers_count = context.config.server.workers_count;

    info!(
        version = %context.config.version,
        address = %address,
        message = "Starting bot server",
    );

    let prometheus = build_metrics_handler()?;
    let context = Data::new(context);
    let mut server =
        HttpServer::new(move || build_actix_app(context.clone(), prometheus.clone()));
    if let Some(workers) = workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(address)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
