pub mod error;
pub mod models;
pub mod mojang_client;
pub mod subtiers_client;

pub use error::ApiError;
pub use mojang_client::MojangClient;
pub use subtiers_client::{RankingClient, SubtiersClient};
