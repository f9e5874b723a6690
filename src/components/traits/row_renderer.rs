use crate::components::views::poster_list::RowView;

/// Turns a toolkit-agnostic `RowView` into a row of a concrete UI toolkit.
///
/// The selection state machine only ever produces `RowView`s, so it can be
/// driven and tested without a terminal.
pub trait RowRenderer: Send + Sync {
  type Row;

  /// Renders one row. Must be a pure function of `row`.
  fn render_row(&self, row: &RowView) -> Self::Row;
}
