pub mod row_renderer;

pub use row_renderer::RowRenderer;
