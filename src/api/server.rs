use crate::api::routes::assets::assets_routes;
use crate::api::routes::auth::auth_routes;
use crate::api::routes::employees::employees_routes;
use crate::api::routes::repairs::repairs_routes;
use crate::security::auth_middleware::AuthGate;
use crate::store::StoreContext;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{middleware, web::Data, App, HttpServer};
use anyhow::Error;
use log::info;
use std::sync::Arc;

/// Credentials and signing secret fixed at startup.
#[derive(Clone)]
pub struct AuthSettings {
    pub username: String,
    pub password: String,
    pub token_secret: String,
}

pub struct AppState {
    pub store_context: Arc<StoreContext>,
    pub auth: AuthSettings,
}

pub async fn start_server(
    host: &str,
    port: u16,
    store_context: Arc<StoreContext>,
    auth: AuthSettings,
    require_auth: bool,
) -> Result<(), Error> {
    info!("Starting server at http://{}:{}", host, port);
    let app_state = Data::new(AppState {
        store_context,
        auth: auth.clone(),
    });

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .service(auth_routes());

        // Gating is a deployment decision made once at startup; /login stays
        // open either way.
        if require_auth {
            let secret = auth.token_secret.clone();
            app = app
                .service(employees_routes().wrap(AuthGate::new(secret.clone())))
                .service(assets_routes().wrap(AuthGate::new(secret.clone())))
                .service(repairs_routes().wrap(AuthGate::new(secret)));
        } else {
            app = app
                .service(employees_routes())
                .service(assets_routes())
                .service(repairs_routes());
        }

        app
    })
    .bind((host, port))?
    .run()
    .await?;
    Ok(())
}
