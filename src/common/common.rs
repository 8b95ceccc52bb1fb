use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::enums::tracker_error::TrackerError;
use crate::config::structs::configuration::Configuration;

/// Parses a raw query string into a map of lowercased keys to the list of
/// percent-decoded byte values given for that key. BitTorrent clients send
/// binary data (info hashes, peer ids) percent-encoded, so values are kept
/// as raw bytes and never forced through UTF-8.
pub fn parse_query(query: Option<String>) -> Result<HashMap<String, Vec<Vec<u8>>>, TrackerError> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    if let Some(raw) = query {
        for query_item in raw.split('&').filter(|item| !item.is_empty()) {
            let (key_raw, value_raw) = match query_item.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (query_item, None),
            };
            let key_name = percent_encoding::percent_decode_str(key_raw).decode_utf8_lossy().to_lowercase();
            if key_name.is_empty() {
                continue;
            }
            let value_data = match value_raw {
                Some(value) => percent_encoding::percent_decode_str(value).collect::<Vec<u8>>(),
                None => vec![],
            };
            queries.entry(key_name).or_default().push(value_data);
        }
    }

    Ok(queries)
}

pub(crate) fn bin2hex(data: &[u8; 20], f: &mut Formatter) -> fmt::Result {
    let mut chars = [0u8; 40];
    binascii::bin2hex(data, &mut chars).expect("failed to hexlify");
    write!(f, "{}", std::str::from_utf8(&chars).unwrap())
}

pub(crate) fn hex_to_nibble(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => 0xFF,
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            panic!("Unknown log level encountered: '{}'", config.log_level.as_str());
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}
