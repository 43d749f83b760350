#[tokio::main]
async fn main() {
    stockyard_observability::init();

    let addr = std::env::var("STOCKYARD_ADDR").unwrap_or_else(|_| {
        tracing::warn!("STOCKYARD_ADDR not set; using 127.0.0.1:8080");
        "127.0.0.1:8080".to_string()
    });

    let app = stockyard_web::app::build_app();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
