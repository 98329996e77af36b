//! Server middlewares.

#![allow(clippy::type_complexity)]

use std::{pin::Pin, rc::Rc};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web::BytesMut,
    Error, HttpMessage,
};
use futures::{
    future::{ok, Ready},
    stream::StreamExt,
    Future,
};
use prlabel_config::Config;
use prlabel_crypto::Signature;
use tracing::warn;

use crate::{
    constants::{GITHUB_SIGNATURE_HEADER, SIGNATURE_PREFIX},
    ServerError,
};

/// Signature verification configuration.
pub struct VerifySignature {
    secret: Option<String>,
}

impl VerifySignature {
    /// Create a new configuration.
    pub fn new(config: &Config) -> Self {
        let secret = if config.server.disable_webhook_signature {
            warn!("Signature verification is disabled. This can be a security concern.");
            None
        } else if config.server.webhook_secret.is_empty() {
            warn!("Environment variable 'BOT_SERVER_WEBHOOK_SECRET' is invalid or not set. Disabling signature verification.");
            None
        } else {
            Some(config.server.webhook_secret.clone())
        };

        Self { secret }
    }
}

impl<S, B> Transform<S, ServiceRequest> for VerifySignature
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<B>;
    type Transform = VerifySignatureMiddleware<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(VerifySignatureMiddleware {
            secret: self.secret.clone(),
            service: Rc::new(service),
        })
    }
}

/// Signature verification middleware.
pub struct VerifySignatureMiddleware<S> {
    secret: Option<String>,
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for VerifySignatureMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;
    type Response = ServiceResponse<B>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let secret = self.secret.clone();

        Box::pin(async move {
            if let (Some(secret), true) = (secret, req.method() == Method::POST) {
                let signature = req
                    .headers()
                    .get(GITHUB_SIGNATURE_HEADER)
                    .ok_or(ServerError::MissingWebhookSignature)?
                    .to_str()
                    .map_err(|_| ServerError::InvalidWebhookSignature)?
                    .strip_prefix(SIGNATURE_PREFIX)
                    .ok_or(ServerError::InvalidWebhookSignature)?
                    .to_owned();

                let mut body = BytesMut::new();
                let mut stream = req.take_payload();
                while let Some(chunk) = stream.next().await {
                    body.extend_from_slice(&chunk.map_err(|_| ServerError::PayloadError)?);
                }

                match Signature(&signature).is_valid(&body, &secret) {
                    Ok(true) => (),
                    Ok(false) | Err(_) => return Err(ServerError::InvalidWebhookSignature.into()),
                }

                // The body stream was consumed, give it back to the handler.
                let (_, mut payload) = actix_http::h1::Payload::create(true);
                payload.unread_data(body.freeze());
                req.set_payload(payload.into());
            }

            svc.call(req).await
        })
    }
}
