mod poster_row;
mod presenter;
mod screen;

pub use poster_row::{PosterRowRenderer, RowBackground, RowView};
pub use presenter::{PosterListPresenter, SelectionListener, watchlist_text};
pub use screen::PosterListScreen;
