pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::create_order::CreateOrderService;
use application::find_order::FindOrderService;
use infrastructure::customer_repo::DieselCustomerRepository;
use infrastructure::order_repo::DieselOrderRepository;
use infrastructure::product_repo::DieselProductRepository;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Concrete service wiring used by the HTTP handlers.
pub type CreateOrderSvc =
    CreateOrderService<DieselOrderRepository, DieselProductRepository, DieselCustomerRepository>;
pub type FindOrderSvc = FindOrderService<DieselOrderRepository>;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::orders::create_order, handlers::orders::get_order),
    components(schemas(
        handlers::orders::CreateOrderRequest,
        handlers::orders::OrderProductRequest,
        handlers::orders::OrderResponse,
        handlers::orders::OrderLineResponse,
    )),
    tags((name = "orders", description = "Order placement and lookup"))
)]
struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool
        .get()
        .expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        let create_order_svc = CreateOrderService::new(
            DieselOrderRepository::new(pool.clone()),
            DieselProductRepository::new(pool.clone()),
            DieselCustomerRepository::new(pool.clone()),
        );
        let find_order_svc = FindOrderService::new(DieselOrderRepository::new(pool.clone()));

        App::new()
            .app_data(web::Data::new(create_order_svc))
            .app_data(web::Data::new(find_order_svc))
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(
                web::scope("/orders")
                    .route("", web::post().to(handlers::orders::create_order))
                    .route("/{id}", web::get().to(handlers::orders::get_order)),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
