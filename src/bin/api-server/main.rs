use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use restaurant_api::config::Config;

mod api;

fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    let state = web::Data::new(api::ApiState::connect(&config.database_url).await?);
    tracing::info!(
        "serving {} at http://{}:{}",
        config.database_url,
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .app_data(state.clone())
            .configure(api::routes)
            .default_service(web::route().to(api::not_found))
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("fail to bind {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
