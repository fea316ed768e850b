// src/presentation/http/middleware/auth_gate.rs
use crate::application::{error::ApplicationError, ports::security::TokenError};
use crate::presentation::http::{response::ApiError, state::HttpState};
use axum::{
    body::Body,
    extract::Query,
    http::{Request, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// When `token` repeats, the first occurrence is used.
fn token_from_uri(uri: &Uri) -> Option<String> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;
    pairs
        .into_iter()
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value)
        .filter(|token| !token.is_empty())
}

/// Rejects requests without a valid, unexpired `?token=` before they reach
/// a handler. The verified subject is stored in request extensions.
pub async fn auth_gate(mut req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return ApiError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let verified = match token_from_uri(req.uri()) {
        Some(token) => state.services.token_manager().verify(&token),
        None => Err(TokenError::Missing),
    };

    match verified {
        Ok(subject) => {
            tracing::debug!(username = %subject.username, "token accepted");
            req.extensions_mut().insert(subject);
            next.run(req).await
        }
        Err(err) => {
            let err = ApplicationError::from(err);
            tracing::info!(
                code = err.result_code().code(),
                path = %req.uri().path(),
                "token rejected"
            );
            ApiError::from_error(err).into_response()
        }
    }
}
