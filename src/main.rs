mod avatar;
mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, service::owner_code::OwnerCodeService, startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;
        let http_client = startup::setup_reqwest_client()?;
        let oauth_client = startup::setup_oauth_client(&config)?;
        let bot_api = startup::setup_bot_api_client(&config)?;

        let owner_code_service = OwnerCodeService::new();
        startup::check_for_owner(&db, &config, &owner_code_service).await?;

        tracing::info!("Starting server, bot API at {}", config.bot_api_url);

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(&config)?
            .with_state(AppState::new(
                db,
                http_client,
                oauth_client,
                owner_code_service,
                bot_api,
                config.discord_user_url.clone(),
            ))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
