use std::path::PathBuf;

use confy::ConfyError;
use roundup_lib::Auth;

pub static BIN_NAME: &str = std::env!("CARGO_PKG_NAME");

pub fn auth() -> Result<Auth, ConfyError> {
    confy::load(BIN_NAME, "auth")
}

pub fn save_auth(auth: &Auth) -> Result<(), ConfyError> {
    confy::store(BIN_NAME, "auth", auth)
}

pub fn auth_path() -> Result<PathBuf, ConfyError> {
    confy::get_configuration_file_path(BIN_NAME, "auth")
}
