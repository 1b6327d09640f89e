use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use dotenv::{dotenv, var};
use kasou::index::DEFAULT_TICKER;
use kasou::layout::DashboardLayout;
use kasou::series::{self, Dedup};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod api;

/// Immutable per-process state: the shared outbound client and the layout
/// seeded from the startup fetch.
pub struct AppState {
    pub client: reqwest::Client,
    pub layout: DashboardLayout,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    std::env::set_var("RUST_LOG", "actix_web=debug,kasou=debug");
    dotenv().ok();
    env_logger::init();

    // outbound client for the market data provider
    let client = reqwest::ClientBuilder::new()
        .user_agent(var("USER_AGENT").context("USER_AGENT must be set")?)
        .build()?;

    // seed the dashboard bounds from the default ticker's history; the
    // process has nothing to serve without it
    let seed = kasou::endp::yahoo_finance::fetch(&client, DEFAULT_TICKER).await?;
    let seed = series::normalize(seed, Dedup::Keep);
    let span = series::span(&seed).context("seed series contained no rows")?;
    log::info!(
        "[{DEFAULT_TICKER}] dashboard bounds seeded: {} -> {}",
        span.min,
        span.max
    );

    let state = web::Data::new(AppState {
        client,
        layout: DashboardLayout::seed(DEFAULT_TICKER, span),
    });

    // create API documentation
    use api::dashboard;
    #[derive(OpenApi)]
    #[openapi(paths(dashboard::layout, dashboard::charts))]
    struct ApiDoc;
    let openapi = ApiDoc::openapi();

    // run server
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            // dashboard page
            .service(dashboard::page)
            // api endpoints
            .service(dashboard::layout)
            .service(dashboard::charts)
            // api documentation
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/openapi.json", openapi.clone()))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await?;

    Ok(())
}
