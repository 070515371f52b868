#[tokio::main]
async fn main() {
    shoplite_observability::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
        tracing::info!("BIND_ADDR not set; defaulting to 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });
    let seed_demo_data = std::env::var("SEED_DEMO_DATA")
        .map(|v| v.parse::<bool>().unwrap_or(true))
        .unwrap_or(true);
    tracing::info!(bind_addr = %bind_addr, seed_demo_data, "starting shoplite-api");

    let app = shoplite_api::app::build_app(shoplite_api::app::AppConfig { seed_demo_data });

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
