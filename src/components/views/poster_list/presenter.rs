use std::fmt;

use tracing::{debug, info};

use super::poster_row::RowView;
use crate::posters::{PosterItem, PosterStore};

/// Receives the aggregate "any poster selected" value after every toggle.
pub type SelectionListener = Box<dyn FnMut(bool) + Send + Sync>;

/// Selection state machine over a fixed list of posters.
///
/// The presenter is the only owner allowed to flip a poster's selection flag.
/// Every toggle goes through [`PosterListPresenter::on_row_tapped`], which
/// re-renders the row and reports the new aggregate to the registered listener.
#[derive(Default)]
pub struct PosterListPresenter {
  store: PosterStore,
  listener: Option<SelectionListener>,
}

impl fmt::Debug for PosterListPresenter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PosterListPresenter")
      .field("store", &self.store)
      .field("listener", &self.listener.as_ref().map(|_| "FnMut(bool)"))
      .finish()
  }
}

impl PosterListPresenter {
  pub fn new(store: PosterStore) -> Self {
    PosterListPresenter { store, listener: None }
  }

  /// Replaces the selection listener. Only one listener is held at a time.
  pub fn register_listener<F>(&mut self, listener: F)
  where
    F: FnMut(bool) + Send + Sync + 'static,
  {
    self.listener = Some(Box::new(listener));
  }

  pub fn items(&self) -> &[PosterItem] {
    self.store.items()
  }

  pub fn len(&self) -> usize {
    self.store.len()
  }

  pub fn is_empty(&self) -> bool {
    self.store.is_empty()
  }

  pub fn render(&self, index: usize) -> Option<RowView> {
    self.store.get(index).map(RowView::from)
  }

  pub fn render_all(&self) -> Vec<RowView> {
    self.store.items().iter().map(RowView::from).collect()
  }

  /// Flips the selection of the poster at `index` and notifies the listener.
  ///
  /// Returns the re-rendered row, or `None` when `index` is out of range, in
  /// which case nothing changes and the listener is not called.
  pub fn on_row_tapped(&mut self, index: usize) -> Option<RowView> {
    let item = self.store.get_mut(index)?;
    item.toggle_selected();
    info!("PosterListPresenter: '{}' selected: {}", item.name, item.is_selected());
    let row = RowView::from(&*item);

    let any_selected = self.any_selected();
    if let Some(listener) = self.listener.as_mut() {
      debug!("PosterListPresenter: notifying listener, any selected: {}", any_selected);
      listener(any_selected);
    }
    Some(row)
  }

  pub fn any_selected(&self) -> bool {
    self.store.items().iter().any(PosterItem::is_selected)
  }

  pub fn selected_count(&self) -> usize {
    self.store.items().iter().filter(|item| item.is_selected()).count()
  }

  /// Selected posters in list order.
  pub fn selected_items(&self) -> Vec<&PosterItem> {
    self.store.items().iter().filter(|item| item.is_selected()).collect()
  }
}

/// Names of `items`, one per line, as shown when the selection is confirmed.
pub fn watchlist_text(items: &[&PosterItem]) -> String {
  items.iter().map(|item| item.name.as_str()).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
  use std::sync::{Arc, Mutex};

  use pretty_assertions::assert_eq;

  use super::*;
  use crate::posters::{ImageRef, PosterRecord};

  fn three_posters() -> PosterStore {
    PosterStore::new(vec![
      PosterItem::new("Back to the Future", "Bob Gale", "Sci-fi", ImageRef::new("download"), 4.0_f32),
      PosterItem::new("The Dark Knight", "Christopher Nolan", "Crime", ImageRef::new("download1"), 4.8_f32),
      PosterItem::new("Top Gun", "Tony Scott", "Drama", ImageRef::new("download2"), 3.4_f32),
    ])
  }

  fn recording_presenter(store: PosterStore) -> (PosterListPresenter, Arc<Mutex<Vec<bool>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut presenter = PosterListPresenter::new(store);
    let recorded = calls.clone();
    presenter.register_listener(move |any_selected| recorded.lock().unwrap().push(any_selected));
    (presenter, calls)
  }

  fn selected_names(presenter: &PosterListPresenter) -> Vec<String> {
    presenter.selected_items().iter().map(|item| item.name.clone()).collect()
  }

  #[test]
  fn test_initially_nothing_selected() {
    let (presenter, calls) = recording_presenter(three_posters());

    assert!(presenter.items().iter().all(|item| !item.is_selected()));
    assert!(presenter.selected_items().is_empty());
    assert!(!presenter.any_selected());
    assert!(calls.lock().unwrap().is_empty());
  }

  #[test]
  fn test_tap_selects_and_notifies() {
    let (mut presenter, calls) = recording_presenter(three_posters());

    let row = presenter.on_row_tapped(1).unwrap();

    assert!(row.marker);
    assert!(presenter.items()[1].is_selected());
    assert_eq!(*calls.lock().unwrap(), vec![true]);
    assert_eq!(selected_names(&presenter), vec!["The Dark Knight"]);
  }

  #[test]
  fn test_two_taps_keep_list_order() {
    let (mut presenter, calls) = recording_presenter(three_posters());

    presenter.on_row_tapped(2);
    presenter.on_row_tapped(1);

    assert_eq!(*calls.lock().unwrap(), vec![true, true]);
    assert_eq!(selected_names(&presenter), vec!["The Dark Knight", "Top Gun"]);
    assert_eq!(presenter.selected_count(), 2);
  }

  #[test]
  fn test_double_tap_deselects() {
    let (mut presenter, calls) = recording_presenter(three_posters());

    presenter.on_row_tapped(1);
    let row = presenter.on_row_tapped(1).unwrap();

    assert!(!row.marker);
    assert!(!presenter.items()[1].is_selected());
    assert_eq!(*calls.lock().unwrap(), vec![true, false]);
    assert!(presenter.selected_items().is_empty());
  }

  #[test]
  fn test_deselect_with_others_still_selected_reports_true() {
    let (mut presenter, calls) = recording_presenter(three_posters());

    presenter.on_row_tapped(0);
    presenter.on_row_tapped(2);
    presenter.on_row_tapped(0);

    assert_eq!(*calls.lock().unwrap(), vec![true, true, true]);
    assert_eq!(selected_names(&presenter), vec!["Top Gun"]);
  }

  #[test]
  fn test_toggle_parity() {
    let (mut presenter, _calls) = recording_presenter(three_posters());

    for taps in 1..=6 {
      presenter.on_row_tapped(0);
      assert_eq!(presenter.items()[0].is_selected(), taps % 2 == 1);
    }
  }

  #[test]
  fn test_listener_matches_selected_items_after_every_tap() {
    let (mut presenter, calls) = recording_presenter(PosterStore::sample());

    for index in [3, 7, 3, 0, 9, 7, 0, 9, 5] {
      presenter.on_row_tapped(index);
      let last = *calls.lock().unwrap().last().unwrap();
      assert_eq!(last, !presenter.selected_items().is_empty());

      let expected: Vec<&PosterItem> = presenter.items().iter().filter(|item| item.is_selected()).collect();
      assert_eq!(presenter.selected_items(), expected);
      assert_eq!(presenter.selected_count(), expected.len());
    }
  }

  #[test]
  fn test_out_of_range_tap_is_ignored() {
    let (mut presenter, calls) = recording_presenter(three_posters());

    assert!(presenter.on_row_tapped(3).is_none());
    assert!(calls.lock().unwrap().is_empty());
    assert!(!presenter.any_selected());
  }

  #[test]
  fn test_empty_list() {
    let (mut presenter, calls) = recording_presenter(PosterStore::default());

    assert!(presenter.is_empty());
    assert!(presenter.selected_items().is_empty());
    assert!(presenter.on_row_tapped(0).is_none());
    assert!(calls.lock().unwrap().is_empty());
  }

  #[test]
  fn test_tap_without_listener() {
    let mut presenter = PosterListPresenter::new(three_posters());

    presenter.on_row_tapped(0);

    assert!(presenter.any_selected());
  }

  #[test]
  fn test_register_listener_replaces_previous() {
    let (mut presenter, first) = recording_presenter(three_posters());
    let second = Arc::new(Mutex::new(Vec::new()));
    let recorded = second.clone();
    presenter.register_listener(move |any_selected| recorded.lock().unwrap().push(any_selected));

    presenter.on_row_tapped(0);

    assert!(first.lock().unwrap().is_empty());
    assert_eq!(*second.lock().unwrap(), vec![true]);
  }

  #[test]
  fn test_render_is_pure() {
    let (mut presenter, _calls) = recording_presenter(three_posters());

    assert_eq!(presenter.render(0), presenter.render(0));
    presenter.on_row_tapped(0);
    assert_eq!(presenter.render(0), presenter.render(0));
    assert!(presenter.render(0).unwrap().marker);
    assert_eq!(presenter.render_all().len(), 3);
    assert!(presenter.render(3).is_none());
  }

  #[test]
  fn test_watchlist_text() {
    let store = PosterStore::from_records(vec![
      PosterRecord { name: "Forrest Gump".to_string(), ..PosterRecord::default() },
      PosterRecord { name: "Hangover".to_string(), ..PosterRecord::default() },
      PosterRecord { name: "Top Gun".to_string(), ..PosterRecord::default() },
    ]);
    let mut presenter = PosterListPresenter::new(store);
    presenter.on_row_tapped(0);
    presenter.on_row_tapped(2);

    assert_eq!(watchlist_text(&presenter.selected_items()), "Forrest Gump\nTop Gun");
    assert_eq!(watchlist_text(&[]), "");
  }
}
