mod config;
pub use config::ClientConfig;

mod error;
pub use error::ClientError;

mod connection;
pub use connection::{Connection, HttpConnection};

pub mod queue;

mod client;
pub use client::Marathon;

pub use marathon_model as model;
