pub mod ip;

pub use ip::{is_valid_ipv4, is_valid_prefix};
