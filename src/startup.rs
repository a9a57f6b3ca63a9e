use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, error::InternalError, http::StatusCode, web, App, HttpServer};
use anyhow::Context;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing_actix_web::TracingLogger;

use crate::{configuration::Settings, menu_generator::MenuGenerator, routes::{create_order, create_product, detail_response, generate_menu, health_check, list_orders, list_products, root, update_order}, utils::{get_connection_pool, DbPool}};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    // Builds the pool, migrates the store, resolves the AI capability and binds the listener.
    // With port 0 the OS picks a free port, reported back in `port`.
    pub async fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let pool = get_connection_pool(&settings.database)
            .context("Failed to build connection pool")?;
        run_migrations(&pool)?;

        let menu_generator = MenuGenerator::from_settings(settings.ai);

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))
            .context("Failed to bind listener")?;
        let port = listener.local_addr()?.port();

        let server = run(listener, pool, menu_generator, settings.application.allowed_origin)?;

        Ok(Application{
            host: settings.application.host,
            port,
            server
        })
    }
}

pub fn run_migrations(pool: &DbPool) -> Result<(), anyhow::Error>{
    let mut conn = pool.get()
        .context("Failed to get connection to run migrations")?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to run migrations")?;

    Ok(())
}

// Malformed bodies are reported like any other contract violation
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| {
            let response = detail_response(StatusCode::UNPROCESSABLE_ENTITY, &err);
            InternalError::from_response(err, response).into()
        })
}

// Unparseable path segments (e.g. a non numeric order id) get the same treatment
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| {
            let response = detail_response(StatusCode::UNPROCESSABLE_ENTITY, &err);
            InternalError::from_response(err, response).into()
        })
}

pub fn run(
    listener: TcpListener,
    pool: DbPool,
    menu_generator: MenuGenerator,
    allowed_origin: String
) -> Result<Server, anyhow::Error>{
    let pool = web::Data::new(pool);
    let menu_generator = web::Data::new(menu_generator);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .app_data(path_config())
            .app_data(pool.clone())
            .app_data(menu_generator.clone())
            .route("/", web::get().to(root))
            .route("/health", web::get().to(health_check))
            .route("/products/", web::post().to(create_product))
            .route("/products/", web::get().to(list_products))
            .route("/orders/", web::post().to(create_order))
            .route("/orders/", web::get().to(list_orders))
            .route("/orders/{order_id}/status", web::patch().to(update_order))
            .route("/ai/generate_menu", web::post().to(generate_menu))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
