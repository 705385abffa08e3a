use std::io;
use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use employee_facade::client::UpstreamClient;
use employee_facade::config::Config;
use employee_facade::handlers;
use employee_facade::services::EmployeeService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let client = UpstreamClient::new(&config).map_err(io::Error::other)?;
    let service = web::Data::new(EmployeeService::new(Arc::new(client)));

    info!(
        "Starting server at {} (upstream {})",
        config.bind_address, config.upstream_base_url
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(service.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
