use std::fs::File;
use std::io::Write;
use std::thread::available_parallelism;
use log::info;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;

const CONFIG_PATH: &str = "config.toml";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            tracker_config: TrackerConfig {
                request_interval: 1800,
                auto_register: false,
                peers_returned: 200,
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:6969"),
                    real_ip: String::from("X-Real-IP"),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    threads: available_parallelism().unwrap().get() as u64,
                    ssl: false,
                    ssl_key: String::from(""),
                    ssl_cert: String::from(""),
                }
            ),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e)),
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e)),
        }
    }

    /// Loads `config.toml` from the working directory. When `create` is set
    /// and the file is missing or broken, a default configuration is written
    /// out and returned instead of the error.
    pub fn load_from_file(create: bool) -> Result<Configuration, ConfigurationError> {
        match Configuration::load_file(CONFIG_PATH) {
            Ok(config) => Ok(config),
            Err(error) => {
                if !create {
                    return Err(error);
                }
                let config = Configuration::init();
                let data = toml::to_string(&config).map_err(ConfigurationError::SerializeError)?;
                Configuration::save_file(CONFIG_PATH, data)?;
                info!("created default configuration at {}", CONFIG_PATH);
                Ok(config)
            }
        }
    }
}
