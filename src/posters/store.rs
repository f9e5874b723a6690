use tracing::info;

use super::types::{ImageRef, PosterItem, PosterRecord};

/// Fixed, ordered collection of posters. Populated once and never resized.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PosterStore {
  items: Vec<PosterItem>,
}

impl PosterStore {
  pub fn new(items: Vec<PosterItem>) -> Self {
    PosterStore { items }
  }

  pub fn from_records(records: Vec<PosterRecord>) -> Self {
    let items: Vec<PosterItem> = records.into_iter().map(PosterItem::from).collect();
    info!("PosterStore: loaded {} posters from records", items.len());
    PosterStore { items }
  }

  /// Uses `records` when any are configured, otherwise the built in sample data.
  pub fn from_records_or_sample(records: &[PosterRecord]) -> Self {
    if records.is_empty() { Self::sample() } else { Self::from_records(records.to_vec()) }
  }

  pub fn sample() -> Self {
    let sample: [(&str, &str, &str, &str, f32); 10] = [
      ("Back to the Future", "Bob Gale & Robert Zemeckis", "This is a Family/Sci-fi movie.", "download", 4.0),
      ("The Dark Knight", "Jonathan Nolan & Christopher Nolan", "This is a Action/Crime movie.", "download1", 4.8),
      ("Top Gun", "Tony Scott", "This is a Action/Drama movie.", "download2", 3.4),
      ("Hocus Pocus", "David Kirschner & Mick Garris", "This is a Family/Comedy movie.", "download3", 3.5),
      ("Indiana Jones and the Last Crusade", "Steven Spielberg", "This is an Adventure/Action movie.", "download4", 4.5),
      ("The Shawshank Redemption", "Frank Darabont", "This is a Thriller/Crime movie.", "download5", 5.0),
      ("Forrest Gump", "Robert Zemeckis", "This is a Comedy/Romance movie.", "download6", 5.0),
      ("Hangover", "Todd Phillips", "This is a Comedy/Mystery movie.", "download7", 4.5),
      ("The Green Mile", "Frank Darabont", "This is a Crime/Fantasy movie.", "download8", 4.8),
      ("Catch Me If You Can", "Steven Spielberg", "This is a Crime/Comedy movie.", "download9", 4.8),
    ];
    let items = sample
      .into_iter()
      .map(|(name, creator, synopsis, image, rating)| {
        PosterItem::new(name, creator, synopsis, ImageRef::new(image), rating)
      })
      .collect();
    PosterStore { items }
  }

  pub fn items(&self) -> &[PosterItem] {
    &self.items
  }

  pub fn get(&self, index: usize) -> Option<&PosterItem> {
    self.items.get(index)
  }

  pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut PosterItem> {
    self.items.get_mut(index)
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::posters::types::Rating;

  #[test]
  fn test_sample_store() {
    let store = PosterStore::sample();

    assert_eq!(store.len(), 10);
    assert_eq!(store.get(0).map(|p| p.name.as_str()), Some("Back to the Future"));
    assert_eq!(store.get(9).map(|p| p.name.as_str()), Some("Catch Me If You Can"));
    assert!(store.get(10).is_none());
    assert!(store.items().iter().all(|p| !p.is_selected()));
  }

  #[test]
  fn test_from_records_keeps_order_and_clamps() {
    let records = vec![
      PosterRecord { name: "First".to_string(), rating: 9.0, ..PosterRecord::default() },
      PosterRecord { name: "Second".to_string(), rating: -2.0, ..PosterRecord::default() },
    ];
    let store = PosterStore::from_records(records);

    let names: Vec<&str> = store.items().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert_eq!(store.items()[0].rating, Rating::new(5.0));
    assert_eq!(store.items()[1].rating, Rating::new(0.0));
  }

  #[test]
  fn test_from_records_or_sample_falls_back() {
    assert_eq!(PosterStore::from_records_or_sample(&[]), PosterStore::sample());

    let records = vec![PosterRecord { name: "Only".to_string(), ..PosterRecord::default() }];
    assert_eq!(PosterStore::from_records_or_sample(&records).len(), 1);
  }

  #[test]
  fn test_empty_store() {
    let store = PosterStore::default();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
  }
}
