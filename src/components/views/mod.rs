pub mod poster_list;

pub use poster_list::PosterListScreen;
