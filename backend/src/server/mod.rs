//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::sync::Arc;

use std::future::Future;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::{info, warn};

use typing_backend::Trace;
#[cfg(debug_assertions)]
use typing_backend::doc::ApiDoc;
use typing_backend::domain::ports::FixtureTypingInsights;
use typing_backend::inbound::http::health::{HealthState, live, ready};
use typing_backend::inbound::http::insights::{analyze_mistakes, predict_ligatures};
use typing_backend::inbound::http::{json_config, query_config, route_not_found};
use typing_backend::inbound::http::languages::list_languages;
use typing_backend::inbound::http::state::HttpState;
use typing_backend::inbound::http::typing_results::{
    create_typing_result, list_typing_results, list_typing_results_by_language,
};
use typing_backend::outbound::memory::InMemoryRecordStore;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the handler state around one shared record store.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock = Arc::new(DefaultClock);
    let store = Arc::new(InMemoryRecordStore::new(clock.clone()));
    let state = HttpState::new(store, Arc::new(FixtureTypingInsights), clock)
        .with_default_limit(config.default_limit);
    web::Data::new(state)
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(create_typing_result)
        .service(list_typing_results)
        .service(list_typing_results_by_language)
        .service(predict_ligatures)
        .service(analyze_mistakes)
        .service(list_languages);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(query_config())
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live)
        .default_service(web::to(route_not_found));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Every worker shares the same record store, so results written through
/// one worker are visible to all of them until the process exits.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .disable_signals()
    .bind(config.bind_addr)?
    .run();

    info!(
        bind_addr = %config.bind_addr,
        default_limit = config.default_limit.get(),
        "typing backend listening"
    );
    health_state.mark_ready();
    Ok(server)
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

/// Wait for `trigger`, fail the probes, then stop the server gracefully so
/// in-flight requests finish.
pub async fn drain_on(
    trigger: impl Future<Output = ()>,
    handle: ServerHandle,
    health_state: web::Data<HealthState>,
) {
    trigger.await;
    health_state.begin_draining();
    handle.stop(true).await;
    info!("typing backend stopped");
}

#[cfg(test)]
mod tests {
    //! Tests for server bootstrap and app wiring.

    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    #[fixture]
    fn health_state() -> web::Data<HealthState> {
        web::Data::new(HealthState::new())
    }

    #[rstest]
    #[actix_web::test]
    async fn create_server_marks_ready(health_state: web::Data<HealthState>) {
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("loopback address"));

        let server = create_server(health_state.clone(), config).expect("server binds");

        assert!(health_state.is_ready());
        server.handle().stop(false).await;
    }

    #[rstest]
    #[actix_web::test]
    async fn draining_fails_probes_and_stops_server(health_state: web::Data<HealthState>) {
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("loopback address"));
        let server = create_server(health_state.clone(), config).expect("server binds");
        let handle = server.handle();
        let running = actix_web::rt::spawn(server);

        drain_on(std::future::ready(()), handle, health_state.clone()).await;

        assert!(!health_state.is_alive());
        assert!(!health_state.is_ready());
        running
            .await
            .expect("server task joins")
            .expect("server exits cleanly");
    }

    #[rstest]
    #[actix_web::test]
    async fn app_routes_api_and_probes(health_state: web::Data<HealthState>) {
        health_state.mark_ready();
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("loopback address"));
        let app =
            actix_test::init_service(build_app(health_state, build_http_state(&config))).await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/typing-results")
                .set_json(json!({
                    "language": "hi",
                    "wpm": 30.0,
                    "accuracy": 90.0,
                    "duration": 60,
                    "totalCharacters": 150,
                    "correctCharacters": 135,
                    "incorrectCharacters": 15
                }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::OK);
        assert!(created.headers().contains_key("trace-id"));

        let listed: Vec<Value> = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/typing-results/hi")
                .to_request(),
        )
        .await;
        assert_eq!(listed.len(), 1);

        let probe = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(probe.status(), StatusCode::OK);

        let missing = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/scores").to_request(),
        )
        .await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert!(missing.headers().contains_key("trace-id"));
    }
}
