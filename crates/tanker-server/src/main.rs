use tanker_app::config::Config;

#[tokio::main]
async fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    tanker_server::init_tracing(config.log_json, "info");

    if let Err(e) = tanker_server::serve(config).await {
        tracing::error!(error = %e, "Server stopped");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
