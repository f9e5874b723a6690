pub mod store;
pub mod types;

pub use store::PosterStore;
pub use types::{ImageRef, PosterItem, PosterRecord, Rating};
