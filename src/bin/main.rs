// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - In-memory session store with a periodic idle-session purge
// - Static file serving

#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::dev::Service;
    use actix_web::http::header::SET_COOKIE;
    use actix_web::{web, App, HttpServer};
    use anyhow::Context;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use leptos_meta::MetaTags;
    use quote_cart::web_app::api::logger;
    use quote_cart::web_app::api::session::{self, SessionStore};
    use quote_cart::web_app::api::settings::{self, Settings};
    use quote_cart::web_app::app::App as WebApp;

    // Load .env, then initialize logging
    logger::init_server_logger();

    let app_settings = Settings::from_env();
    tracing::info!(
        "Session cookie '{}', idle sessions expire after {} days",
        app_settings.cookie_name,
        app_settings.session_ttl_days
    );

    settings::init_settings(app_settings.clone());
    session::init_store(SessionStore::new(app_settings.session_ttl()));

    // Drop idle sessions once an hour
    actix_web::rt::spawn(async {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60 * 60));
        loop {
            interval.tick().await;
            if let Some(store) = session::get_store() {
                store.purge_expired(chrono::Utc::now());
            }
        }
    });

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).context("could not read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();
        let request_settings = app_settings.clone();

        App::new()
            // Explicitly handle server functions
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
            // Every request belongs to a session; new visitors get a cookie
            .wrap_fn(move |req, srv| {
                let cookie = session::ensure_request_session(&req, &request_settings);
                let response = srv.call(req);
                async move {
                    let mut res = response.await?;
                    if let Some(value) = cookie {
                        res.headers_mut().append(SET_COOKIE, value);
                    }
                    Ok(res)
                }
            })
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
