use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use std::future::Future;
use std::pin::Pin;

use crate::auth::jwt::{self, Identity};

/// The caller's identity, extracted from the auth cookie (or a Bearer
/// header) and trusted verbatim. No store lookup is involved.
pub struct AuthenticatedUser(pub Identity);

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Prefer the `token` cookie the login endpoint sets; fall
            //    back to a Bearer header for non-browser callers.
            let token = match req.cookie("token") {
                Some(cookie) => cookie.value().to_string(),
                None => req
                    .headers()
                    .get("Authorization")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.strip_prefix("Bearer "))
                    .map(str::to_string)
                    .ok_or_else(|| actix_web::error::ErrorUnauthorized("Missing auth token"))?,
            };

            // 2. Get the signing secret from app data.
            let secret = req.app_data::<web::Data<JwtSecret>>().ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("JWT secret not configured")
            })?;

            // 3. Validate the token and hand back the identity it carries.
            let claims = jwt::validate_token(&token, &secret.0)
                .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

            Ok(AuthenticatedUser(claims.identity()))
        })
    }
}

/// Wrapper type to store the JWT secret in Actix app data.
#[derive(Clone)]
pub struct JwtSecret(pub String);
