use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;

use crate::auth::jwt::{self, Identity};
use crate::auth::middleware::JwtSecret;
use crate::config::AppConfig;
use crate::error::ServiceError;

/// Request body for `POST /api/auth/token`. The email is the identity;
/// name and photo ride along for the buyer snapshot on job posts.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
}

/// POST /api/auth/token — mint a 1-hour token for the given identity and
/// set it as an httpOnly cookie.
pub async fn issue_token(
    config: web::Data<AppConfig>,
    secret: web::Data<JwtSecret>,
    body: web::Json<TokenRequest>,
) -> Result<HttpResponse, ServiceError> {
    let body = body.into_inner();
    if body.email.is_empty() {
        return Err(ServiceError::invalid_request("Email is required"));
    }

    let identity = Identity {
        email: body.email,
        name: body.name,
        photo: body.photo,
    };

    let token = jwt::mint_token(&identity, &secret.0)
        .map_err(|e| ServiceError::Internal(format!("Failed to mint token: {e}")))?;

    Ok(HttpResponse::Ok()
        .cookie(auth_cookie(&config, token))
        .json(serde_json::json!({ "success": true })))
}

/// GET /api/auth/logout — clear the auth cookie.
pub async fn logout(config: web::Data<AppConfig>) -> impl Responder {
    let mut cookie = auth_cookie(&config, String::new());
    cookie.make_removal();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(serde_json::json!({ "success": true }))
}

/// Browsers only send the cookie cross-site when it is `Secure` +
/// `SameSite=None`, so those attributes follow the production flag.
fn auth_cookie(config: &AppConfig, value: String) -> Cookie<'static> {
    Cookie::build("token", value)
        .path("/")
        .http_only(true)
        .secure(config.production)
        .same_site(if config.production {
            SameSite::None
        } else {
            SameSite::Strict
        })
        .finish()
}
