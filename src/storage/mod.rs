//! Storage for the address book, account snapshots, and configuration.

pub mod address_book;
pub mod atomic;
pub mod config;
pub mod paths;
pub mod snapshot;

pub use address_book::AddressBook;
pub use atomic::write_atomic;
pub use config::{
    Config, ConfigSource, ConfigSources, ENV_BOOK, ENV_CONFIG, ENV_FORMAT, ENV_LIMIT,
    ENV_NO_COLOR, ENV_NO_COLOR_STD, ENV_PRETTY, ResolvedConfig,
};
pub use paths::AppPaths;
pub use snapshot::{AccountSnapshot, load_snapshot};
