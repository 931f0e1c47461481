#[tokio::main]
async fn main() {
    if let Err(e) = seasons_api::start_server().await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}
