use std::net::SocketAddr;
use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use swarm_actix::common::common::setup_logging;
use swarm_actix::config::structs::configuration::Configuration;
use swarm_actix::http::http::{http_check_host_and_port_used, http_service};
use swarm_actix::http::structs::http_service_data::HttpServiceData;
use swarm_actix::structs::Cli;
use swarm_actix::tracker::structs::torrent_tracker::TorrentTracker;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = Arc::new(TorrentTracker::new(config.clone()));

            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in &config.http_server {
                if !http_server_object.enabled {
                    continue;
                }
                http_check_host_and_port_used(http_server_object.bind_address.clone());
                let address: SocketAddr = match SocketAddr::from_str(&http_server_object.bind_address) {
                    Ok(address) => address,
                    Err(error) => {
                        error!("Invalid bind address {}: {}", http_server_object.bind_address, error);
                        exit(1);
                    }
                };
                let service_data = Arc::new(HttpServiceData {
                    torrent_tracker: tracker.clone(),
                    http_trackers_config: Arc::new(http_server_object.clone()),
                });
                let (handle, server) = http_service(address, service_data).await;
                http_handles.push(handle);
                http_futures.push(tokio::spawn(server));
            }

            if http_handles.is_empty() {
                error!("No enabled HTTP listener configured, exiting...");
                exit(1);
            }

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            for handle in http_handles.iter() {
                handle.stop(true).await;
            }
            if let Err(error) = try_join_all(http_futures).await {
                error!("Errors happened on shutting down HTTP listeners: {error}");
            }

            info!("Goodbye!");
        });

    Ok(())
}
