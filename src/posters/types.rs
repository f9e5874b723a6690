use std::fmt;

use serde::{Deserialize, Serialize};

pub const MAX_RATING: f32 = 5.0;

/// Opaque identifier of the artwork shown next to a poster.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(String);

impl ImageRef {
  pub const PLACEHOLDER: &'static str = "placeholder";

  pub fn new(id: impl Into<String>) -> Self {
    let id = id.into();
    if id.trim().is_empty() { ImageRef(Self::PLACEHOLDER.to_string()) } else { ImageRef(id) }
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ImageRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// A rating on the 0 to 5 scale. Out of range values are clamped, NaN becomes 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f32);

impl Rating {
  pub fn new(value: f32) -> Self {
    if value.is_nan() { Rating(0.0) } else { Rating(value.clamp(0.0, MAX_RATING)) }
  }

  pub fn value(self) -> f32 {
    self.0
  }

  /// Number of half stars, rounded to the nearest half step.
  pub fn half_stars(self) -> u8 {
    (self.0 * 2.0).round() as u8
  }

  /// Five glyph star bar, e.g. `★★★½☆` for 3.4.
  pub fn stars(self) -> String {
    let halves = self.half_stars();
    let full = halves / 2;
    let half = halves % 2;
    let empty = MAX_RATING as u8 - full - half;
    let mut stars = String::with_capacity(5 * 3);
    stars.extend(std::iter::repeat_n('★', full as usize));
    stars.extend(std::iter::repeat_n('½', half as usize));
    stars.extend(std::iter::repeat_n('☆', empty as usize));
    stars
  }
}

impl From<f32> for Rating {
  fn from(value: f32) -> Self {
    Rating::new(value)
  }
}

/// Raw poster data as it appears in the config file, before normalisation.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterRecord {
  pub name: String,
  #[serde(default)]
  pub creator: String,
  #[serde(default)]
  pub synopsis: String,
  #[serde(default)]
  pub image: String,
  #[serde(default)]
  pub rating: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PosterItem {
  pub name: String,
  pub creator: String,
  pub synopsis: String,
  pub image: ImageRef,
  pub rating: Rating,
  selected: bool,
}

impl PosterItem {
  pub fn new(
    name: impl Into<String>,
    creator: impl Into<String>,
    synopsis: impl Into<String>,
    image: ImageRef,
    rating: impl Into<Rating>,
  ) -> Self {
    PosterItem {
      name: name.into(),
      creator: creator.into(),
      synopsis: synopsis.into(),
      image,
      rating: rating.into(),
      selected: false,
    }
  }

  pub fn is_selected(&self) -> bool {
    self.selected
  }

  // Only the list presenter flips selection.
  pub(crate) fn toggle_selected(&mut self) {
    self.selected = !self.selected;
  }
}

impl From<PosterRecord> for PosterItem {
  fn from(record: PosterRecord) -> Self {
    PosterItem::new(record.name, record.creator, record.synopsis, ImageRef::new(record.image), record.rating)
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn test_rating_is_clamped() {
    assert_eq!(Rating::new(7.5).value(), 5.0);
    assert_eq!(Rating::new(-1.0).value(), 0.0);
    assert_eq!(Rating::new(f32::NAN).value(), 0.0);
    assert_eq!(Rating::new(3.4).value(), 3.4);
  }

  #[test]
  fn test_rating_stars() {
    assert_eq!(Rating::new(0.0).stars(), "☆☆☆☆☆");
    assert_eq!(Rating::new(3.4).stars(), "★★★½☆");
    assert_eq!(Rating::new(4.0).stars(), "★★★★☆");
    assert_eq!(Rating::new(4.8).stars(), "★★★★★");
    assert_eq!(Rating::new(5.0).stars(), "★★★★★");
  }

  #[test]
  fn test_blank_image_ref_uses_placeholder() {
    assert_eq!(ImageRef::new("  ").as_str(), ImageRef::PLACEHOLDER);
    assert_eq!(ImageRef::new("download3").as_str(), "download3");
  }

  #[test]
  fn test_new_item_is_not_selected() {
    let item = PosterItem::new("Top Gun", "Tony Scott", "Action/Drama", ImageRef::new("download2"), 3.4_f32);
    assert!(!item.is_selected());
  }

  #[test]
  fn test_item_from_record_normalises() {
    let record =
      PosterRecord { name: "Broken".to_string(), rating: 11.0, image: String::new(), ..PosterRecord::default() };
    let item = PosterItem::from(record);

    assert_eq!(item.rating, Rating::new(5.0));
    assert_eq!(item.image, ImageRef::new(ImageRef::PLACEHOLDER));
    assert!(!item.is_selected());
  }
}
