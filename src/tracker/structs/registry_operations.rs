/// Pipeline stage executing the registry mutations against the peer
/// store: torrent registration and peer register/update/delete/complete.
#[derive(Debug)]
pub struct RegistryOperations;
