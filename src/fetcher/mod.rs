pub mod engine;

pub use engine::FetchEngine;
