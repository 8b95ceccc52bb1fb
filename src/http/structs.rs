/// Shared state handed to every HTTP route handler.
pub mod http_service_data;
