mod error;
mod parser;

pub use {
    error::Error,
    parser::{ConfigParser, parse_config},
};
