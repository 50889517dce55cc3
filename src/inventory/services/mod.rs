mod locator;

pub use locator::{directory_size, resolve_install_dir};
