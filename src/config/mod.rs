mod settings;

pub use settings::{origin_of, Settings};
