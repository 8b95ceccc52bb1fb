use std::fs::File;
use std::future::Future;
use std::io::BufReader;
use std::net::{IpAddr, SocketAddr};
use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, error, info};
use crate::common::common::parse_query;
use crate::common::enums::tracker_error::TrackerError;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::http::types::{HttpServiceQueryHashingMapErr, HttpServiceQueryHashingMapOk};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/scrape").route(web::get().to(http_service_scrape)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>,
) -> (ServerHandle, impl Future<Output=Result<(), std::io::Error>>)
{
    let config = data.http_trackers_config.clone();

    if config.ssl {
        info!("[HTTP] Starting server listener with SSL on {}", addr);
        if config.ssl_key.is_empty() || config.ssl_cert.is_empty() {
            error!("[HTTP] No SSL key or SSL certificate given, exiting...");
            exit(1);
        }

        let key_file = &mut BufReader::new(match File::open(config.ssl_key.clone()) {
            Ok(file) => file,
            Err(error) => {
                error!("[HTTP] Unable to open SSL key {}: {}", config.ssl_key, error);
                exit(1);
            }
        });
        let certs_file = &mut BufReader::new(match File::open(config.ssl_cert.clone()) {
            Ok(file) => file,
            Err(error) => {
                error!("[HTTP] Unable to open SSL certificate {}: {}", config.ssl_cert, error);
                exit(1);
            }
        });

        let tls_certs = rustls_pemfile::certs(certs_file)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let tls_key = match rustls_pemfile::pkcs8_private_keys(key_file).next().unwrap() {
            Err(_) => {
                exit(1);
            }
            Ok(data) => {
                data
            }
        };

        let tls_config = rustls::ServerConfig::builder()
            .with_no_client_auth()
            .with_single_cert(tls_certs, rustls::pki_types::PrivateKeyDer::Pkcs8(tls_key))
            .unwrap();

        let server = HttpServer::new(move || {
            App::new()
                .wrap(http_service_cors())
                .configure(http_service_routes(data.clone()))
        })
            .keep_alive(Duration::from_secs(config.keep_alive))
            .client_request_timeout(Duration::from_secs(config.request_timeout))
            .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
            .workers(config.threads as usize)
            .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)
            .unwrap()
            .disable_signals()
            .run();

        return (server.handle(), server);
    }

    info!("[HTTP] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads as usize)
        .bind((addr.ip(), addr.port()))
        .unwrap()
        .disable_signals()
        .run();

    (server.handle(), server)
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(request.clone(), data.clone()).await {
        Ok(ip) => ip,
        Err(result) => {
            return result;
        }
    };

    debug!("[DEBUG] Request from {}: Announce", ip);

    if ip.is_ipv4() {
        data.torrent_tracker.update_stats(StatsEvent::Tcp4AnnouncesHandled, 1);
    } else {
        data.torrent_tracker.update_stats(StatsEvent::Tcp6AnnouncesHandled, 1);
    }

    http_service_announce_handler(request, ip, data.torrent_tracker.clone()).await
}

pub async fn http_service_announce_handler(request: HttpRequest, ip: IpAddr, tracker: Arc<TorrentTracker>) -> HttpResponse
{
    let query_map_result = parse_query(Some(request.query_string().to_string()));
    let query_map = match http_service_query_hashing(query_map_result) {
        Ok(result) => { result }
        Err(err) => { return err; }
    };

    match tracker.handle_announce(ip, query_map) {
        Ok(body) => {
            HttpResponse::Ok().content_type(ContentType::plaintext()).body(body)
        }
        Err(error) => {
            http_service_stats_failure(ip, tracker.clone());
            HttpResponse::Ok().content_type(ContentType::plaintext()).body(TorrentTracker::failure_reason(&error.to_string()))
        }
    }
}

pub async fn http_service_scrape(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(request.clone(), data.clone()).await {
        Ok(ip) => ip,
        Err(result) => {
            return result;
        }
    };

    debug!("[DEBUG] Request from {}: Scrape", ip);

    if ip.is_ipv4() {
        data.torrent_tracker.update_stats(StatsEvent::Tcp4ScrapesHandled, 1);
    } else {
        data.torrent_tracker.update_stats(StatsEvent::Tcp6ScrapesHandled, 1);
    }

    http_service_scrape_handler(request, ip, data.torrent_tracker.clone()).await
}

pub async fn http_service_scrape_handler(request: HttpRequest, ip: IpAddr, tracker: Arc<TorrentTracker>) -> HttpResponse
{
    let query_map_result = parse_query(Some(request.query_string().to_string()));
    let query_map = match http_service_query_hashing(query_map_result) {
        Ok(result) => { result }
        Err(err) => { return err; }
    };

    match tracker.handle_scrape(ip, query_map) {
        Ok(body) => {
            HttpResponse::Ok().content_type(ContentType::plaintext()).body(body)
        }
        Err(error) => {
            http_service_stats_failure(ip, tracker.clone());
            HttpResponse::Ok().content_type(ContentType::plaintext()).body(TorrentTracker::failure_reason(&error.to_string()))
        }
    }
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(request.clone(), data.clone()).await {
        Ok(ip) => ip,
        Err(result) => {
            return result;
        }
    };

    debug!("[DEBUG] Request from {}: 404 Not Found", ip);

    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(TorrentTracker::failure_reason("unknown request"))
}

pub fn http_service_stats_failure(ip: IpAddr, tracker: Arc<TorrentTracker>)
{
    if ip.is_ipv4() {
        tracker.update_stats(StatsEvent::Tcp4Failure, 1);
    } else {
        tracker.update_stats(StatsEvent::Tcp6Failure, 1);
    }
}

pub async fn http_service_stats_log(ip: IpAddr, tracker: Arc<TorrentTracker>)
{
    if ip.is_ipv4() {
        tracker.update_stats(StatsEvent::Tcp4ConnectionsHandled, 1);
    } else {
        tracker.update_stats(StatsEvent::Tcp6ConnectionsHandled, 1);
    }
}

pub async fn http_service_retrieve_remote_ip(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> Result<IpAddr, ()>
{
    let origin_ip = match request.peer_addr() {
        None => {
            return Err(());
        }
        Some(ip) => {
            ip.ip()
        }
    };

    let real_ip_header = data.http_trackers_config.real_ip.clone();
    if real_ip_header.is_empty() {
        return Ok(origin_ip);
    }

    match request.headers().get(real_ip_header) {
        Some(header) => {
            match header.to_str() {
                Ok(value) => {
                    if let Ok(ip) = IpAddr::from_str(value) {
                        Ok(ip)
                    } else {
                        Err(())
                    }
                }
                Err(_) => Err(()),
            }
        }
        None => {
            Ok(origin_ip)
        }
    }
}

pub async fn http_validate_ip(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> Result<IpAddr, HttpResponse>
{
    match http_service_retrieve_remote_ip(request.clone(), data.clone()).await {
        Ok(ip) => {
            http_service_stats_log(ip, data.torrent_tracker.clone()).await;
            Ok(ip)
        }
        Err(_) => {
            Err(HttpResponse::Ok().content_type(ContentType::plaintext()).body(TorrentTracker::failure_reason("unknown origin ip")))
        }
    }
}

pub fn http_service_query_hashing(query_map_result: Result<HttpServiceQueryHashingMapOk, TrackerError>) -> Result<HttpServiceQueryHashingMapOk, HttpServiceQueryHashingMapErr>
{
    match query_map_result {
        Ok(e) => {
            Ok(e)
        }
        Err(e) => {
            Err(HttpResponse::Ok().content_type(ContentType::plaintext()).body(TorrentTracker::failure_reason(&e.to_string())))
        }
    }
}

pub fn http_check_host_and_port_used(bind_address: String) {
    if cfg!(target_os = "windows") {
        match std::net::TcpListener::bind(&bind_address) {
            Ok(e) => e,
            Err(_) => {
                panic!("Unable to bind to {} ! Exiting...", &bind_address);
            }
        };
    }
}
