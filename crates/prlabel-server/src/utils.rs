//! Webhook utilities module.

use actix_web::web::{Bytes, BytesMut, Payload};
use futures::stream::StreamExt;

use crate::{Result, ServerError};

/// Convert Actix payload to bytes.
pub(crate) async fn convert_payload_to_bytes(payload: &mut Payload) -> Result<Bytes> {
    let mut body = BytesMut::new();

    while let Some(chunk) = payload.next().await {
        body.extend_from_slice(&chunk.map_err(|_| ServerError::PayloadError)?);
    }

    Ok(body.freeze())
}

/// Convert Actix payload to string.
pub(crate) async fn convert_payload_to_string(payload: &mut Payload) -> Result<String> {
    let bytes = convert_payload_to_bytes(payload).await?;
    std::str::from_utf8(&bytes)
        .map(ToOwned::to_owned)
        .map_err(|_| ServerError::PayloadError)
}
