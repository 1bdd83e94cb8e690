use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use jobsphere_backend::auth::middleware::JwtSecret;
use jobsphere_backend::config::AppConfig;
use jobsphere_backend::create_pool;
use jobsphere_backend::handlers;
use migration::{Migrator, MigratorTrait};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let db = create_pool().await.expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Connected to database, schema up to date");

    let db_data = web::Data::new(db);
    let config_data = web::Data::new(config.clone());
    let jwt_secret = web::Data::new(JwtSecret(config.jwt_secret.clone()));

    let bind_addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&config.client_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(config_data.clone())
            .app_data(jwt_secret.clone())
            .route("/", web::get().to(handlers::index))
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
