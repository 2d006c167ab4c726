use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tgcn_site::args;
use tgcn_site::config::SiteConfig;
use tgcn_site::controller::pages;
use tgcn_site::model::seo::JsonSeoStore;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tgcn_site=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = args::args_checks();
    let config = SiteConfig::from_env();

    let store = match JsonSeoStore::load(&args.seo_catalog) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("failed to load seo catalog {}: {e}", args.seo_catalog.display());
            std::process::exit(1);
        }
    };

    let bind_addr = format!("{}:{}", args.bind, args.port);
    tracing::info!(run_mode = ?config.run_mode, "listening on http://{bind_addr}");

    let static_dir = args.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(store.clone()))
            .app_data(Data::new(config.clone()))
            .route("/", web::get().to(pages::home))
            .route("/blog", web::get().to(pages::blog))
            .route("/download", web::get().to(pages::download))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/", static_dir.clone())) // og-image, icons, stylesheets
    })
    .bind(bind_addr)?
    .run()
    .await?;
    Ok(())
}
