use std::env;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Port the HTTP server binds to.
    pub port: String,

    /// Browser origin allowed by CORS. Credentialed requests (the auth
    /// cookie) require a single explicit origin.
    pub client_origin: String,

    /// HS256 secret used to sign and verify auth tokens.
    pub jwt_secret: String,

    /// Production toggles `Secure` + `SameSite=None` on the auth cookie.
    pub production: bool,

    /// When true, bids priced outside the job's [min_price, max_price]
    /// range are rejected. Off by default: the system this replaces never
    /// rejected an out-of-range price, and existing clients rely on that.
    pub enforce_bid_price_range: bool,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Required: JWT_SECRET. Optional: PORT (default 8080), CLIENT_ORIGIN
    /// (default http://localhost:5173), APP_ENV (`production` enables the
    /// production cookie attributes), ENFORCE_BID_PRICE_RANGE.
    pub fn from_env() -> Result<Self, String> {
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        let client_origin =
            env::var("CLIENT_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set in .env file or environment".to_string())?;

        let production = env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        let enforce_bid_price_range = env::var("ENFORCE_BID_PRICE_RANGE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(false);

        Ok(AppConfig {
            port,
            client_origin,
            jwt_secret,
            production,
            enforce_bid_price_range,
        })
    }
}
