pub mod handlers;

pub use handlers::{configure, SignupRequest};

use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};

/// Binds the signup service and runs until shutdown.
pub async fn run(host: &str, port: u16) -> std::io::Result<()> {
    let server = HttpServer::new(|| {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind((host, port))?;

    tracing::info!("Server running on {}:{}", host, port);
    server.run().await
}
