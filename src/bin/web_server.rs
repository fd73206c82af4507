use depot_routes::web::server::{start_server_with_config, ServerConfig};
use std::env;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [port] [network.json]
    let args: Vec<String> = env::args().collect();
    let port = if args.len() > 1 {
        args[1].parse().unwrap_or(3005)
    } else {
        3005
    };

    let config = ServerConfig {
        port,
        network_file: args.get(2).map(PathBuf::from),
        ..Default::default()
    };

    println!("Starting route server...");
    println!("   Port: {}", config.port);
    println!("   Static files: {}", config.static_dir);
    println!("   CORS enabled: {}", config.enable_cors);
    match &config.network_file {
        Some(path) => println!("   Network: {}", path.display()),
        None => println!("   Network: built-in depot network"),
    }
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
