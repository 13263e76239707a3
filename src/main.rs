use tokio::net::TcpListener;

use beacon::config::Config;
use beacon::identity::DeploymentIdentity;
use beacon::routes;
use beacon::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beacon=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env();
    let identity = DeploymentIdentity::new(config.version.clone());
    print_banner(&config, &identity);

    let state = AppState::new(identity);
    let app = routes::router(state);

    let listener = match TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind 0.0.0.0:{}: {e}", config.port);
            std::process::exit(1);
        }
    };

    let actual_port = listener
        .local_addr()
        .expect("failed to get local address")
        .port();
    eprintln!("  \x1b[32m→ listening on 0.0.0.0:{actual_port}\x1b[0m");
    eprintln!();

    axum::serve(listener, app).await.expect("server error");
}

fn print_banner(config: &Config, identity: &DeploymentIdentity) {
    let pkg_version = env!("CARGO_PKG_VERSION");

    eprintln!();
    eprintln!("  \x1b[1;36mbeacon\x1b[0m \x1b[2mv{pkg_version}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[2mversion tag\x1b[0m  {}", identity.version);
    eprintln!("  \x1b[2mcolor\x1b[0m        {}", identity.color.hex());
    eprintln!("  \x1b[2mhostname\x1b[0m     {}", identity.hostname);
    eprintln!("  \x1b[2mport\x1b[0m         {}", config.port);
    eprintln!();
}
