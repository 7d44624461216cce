use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use lagrange_latency_api::{routes, FallbackOrchestrator, Settings};

// ---------- Server bootstrap ----------
fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env();

    // Sentry must be initialised before the runtime starts.
    let _sentry = settings.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    actix_web::rt::System::new().block_on(serve(settings))
}

async fn serve(settings: Settings) -> std::io::Result<()> {
    let orchestrator = web::Data::new(FallbackOrchestrator::from_settings(&settings));
    let json_limit = settings.json_limit;

    if settings.native_enabled {
        info!(
            "native solver: {} (timeout {:?})",
            settings.lagrange_bin.display(),
            settings.native_timeout
        );
    } else {
        info!("native solver disabled, using in-process solver only");
    }
    info!("Starting server on http://127.0.0.1:{}", settings.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(sentry_actix::Sentry::new())
            .app_data(routes::json_config(json_limit))
            .app_data(orchestrator.clone())
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", settings.port))?
    .run()
    .await
}
