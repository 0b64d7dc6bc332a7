//! Authentication context extractor.
//!
//! Resolves whatever bearer credential a request carries into an
//! [`AuthContext`]. Extraction never fails: a missing, malformed, badly
//! signed, or expired token resolves to the anonymous context, and public
//! operations proceed while authenticated-only operations reject later
//! through the guard.

use std::future::{Ready, ready};
use std::sync::Arc;

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};

use feed_core::AuthContext;
use feed_core::ports::TokenService;

/// Extractor wrapper around the per-request [`AuthContext`].
///
/// Use in handlers and gate where needed:
/// ```ignore
/// async fn set_status(auth: Auth, ...) -> AppResult<HttpResponse> {
///     let caller = auth.require_authenticated()?;
///     ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Auth(pub AuthContext);

impl std::ops::Deref for Auth {
    type Target = AuthContext;

    fn deref(&self) -> &AuthContext {
        &self.0
    }
}

fn resolve(req: &HttpRequest) -> AuthContext {
    let Some(token_service) = req.app_data::<web::Data<Arc<dyn TokenService>>>() else {
        tracing::error!("TokenService not found in app data");
        return AuthContext::anonymous();
    };

    let Some(header_value) = req.headers().get(header::AUTHORIZATION) else {
        return AuthContext::anonymous();
    };

    let Ok(header_str) = header_value.to_str() else {
        return AuthContext::anonymous();
    };

    let Some(token) = header_str.strip_prefix("Bearer ") else {
        return AuthContext::anonymous();
    };

    match token_service.verify(token) {
        Ok(claims) => AuthContext::authenticated(claims.user_id),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected bearer token");
            AuthContext::anonymous()
        }
    }
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Auth(resolve(req))))
    }
}
