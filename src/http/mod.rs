pub mod client;

pub use client::TimedClient;
