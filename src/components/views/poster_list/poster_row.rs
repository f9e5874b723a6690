use ratatui::{
  style::{Color, Modifier, Style},
  text::{Line, Span, Text},
  widgets::ListItem,
};

use crate::{
  components::traits::RowRenderer,
  config::Config,
  mode::Mode,
  posters::{ImageRef, PosterItem, Rating},
};

/// Terminal lines taken by one rendered poster row.
pub const ROW_HEIGHT: u16 = 3;

const MARKER: &str = "✔ ";
const NO_MARKER: &str = "  ";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RowBackground {
  #[default]
  Default,
  Highlighted,
}

/// Everything a toolkit needs to draw one poster row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
  pub image: ImageRef,
  pub name: String,
  pub creator: String,
  pub synopsis: String,
  pub rating: Rating,
  pub background: RowBackground,
  pub marker: bool,
}

impl From<&PosterItem> for RowView {
  fn from(item: &PosterItem) -> Self {
    let selected = item.is_selected();
    RowView {
      image: item.image.clone(),
      name: item.name.clone(),
      creator: item.creator.clone(),
      synopsis: item.synopsis.clone(),
      rating: item.rating,
      background: if selected { RowBackground::Highlighted } else { RowBackground::Default },
      marker: selected,
    }
  }
}

#[derive(Debug, Clone)]
pub struct PosterRowRenderer {
  row_style: Style,
  selected_style: Style,
  marker_style: Style,
}

impl Default for PosterRowRenderer {
  fn default() -> Self {
    PosterRowRenderer {
      row_style: Style::default().fg(Color::White),
      selected_style: Style::default().fg(Color::Black).bg(Color::LightYellow).add_modifier(Modifier::BOLD),
      marker_style: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    }
  }
}

impl PosterRowRenderer {
  pub fn from_config(config: &Config) -> Self {
    let defaults = PosterRowRenderer::default();
    PosterRowRenderer {
      row_style: config.style(Mode::Posters, "row").unwrap_or(defaults.row_style),
      selected_style: config.style(Mode::Posters, "selected_row").unwrap_or(defaults.selected_style),
      marker_style: config.style(Mode::Posters, "marker").unwrap_or(defaults.marker_style),
    }
  }
}

impl RowRenderer for PosterRowRenderer {
  type Row = ListItem<'static>;

  fn render_row(&self, row: &RowView) -> ListItem<'static> {
    let marker = if row.marker { Span::styled(MARKER, self.marker_style) } else { Span::raw(NO_MARKER) };
    let dim = Style::default().add_modifier(Modifier::DIM);

    let title = Line::from(vec![
      marker,
      Span::styled(row.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
      Span::raw("  "),
      Span::styled(row.rating.stars(), Style::default().fg(Color::Yellow)),
      Span::styled(format!(" {:.1}", row.rating.value()), dim),
    ]);
    let byline = Line::from(vec![
      Span::raw(NO_MARKER),
      Span::raw(row.creator.clone()),
      Span::styled(format!("  [{}]", row.image), dim),
    ]);
    let story = Line::from(vec![
      Span::raw(NO_MARKER),
      Span::styled(row.synopsis.clone(), Style::default().add_modifier(Modifier::ITALIC)),
    ]);

    let style = match row.background {
      RowBackground::Default => self.row_style,
      RowBackground::Highlighted => self.selected_style,
    };
    ListItem::new(Text::from(vec![title, byline, story])).style(style)
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn top_gun() -> PosterItem {
    PosterItem::new("Top Gun", "Tony Scott", "This is a Action/Drama movie.", ImageRef::new("download2"), 3.4_f32)
  }

  #[test]
  fn test_row_view_unselected() {
    let row = RowView::from(&top_gun());

    assert_eq!(row.name, "Top Gun");
    assert_eq!(row.creator, "Tony Scott");
    assert_eq!(row.image.as_str(), "download2");
    assert_eq!(row.background, RowBackground::Default);
    assert!(!row.marker);
  }

  #[test]
  fn test_row_view_selected() {
    let mut item = top_gun();
    item.toggle_selected();
    let row = RowView::from(&item);

    assert_eq!(row.background, RowBackground::Highlighted);
    assert!(row.marker);
  }

  #[test]
  fn test_render_is_idempotent() {
    let renderer = PosterRowRenderer::default();
    let row = RowView::from(&top_gun());

    assert_eq!(renderer.render_row(&row), renderer.render_row(&row));
  }

  #[test]
  fn test_render_unselected() {
    let renderer = PosterRowRenderer::default();
    let rendered = renderer.render_row(&RowView::from(&top_gun()));
    let dim = Style::default().add_modifier(Modifier::DIM);

    assert_eq!(
      rendered,
      ListItem::new(Text::from(vec![
        Line::from_iter([
          Span::raw("  "),
          Span::from("Top Gun").style(Style::default().add_modifier(Modifier::BOLD)),
          Span::raw("  "),
          Span::from("★★★½☆").style(Style::default().fg(Color::Yellow)),
          Span::from(" 3.4").style(dim),
        ]),
        Line::from_iter([Span::raw("  "), Span::raw("Tony Scott"), Span::from("  [download2]").style(dim)]),
        Line::from_iter([
          Span::raw("  "),
          Span::from("This is a Action/Drama movie.").style(Style::default().add_modifier(Modifier::ITALIC)),
        ]),
      ]))
      .style(Style::default().fg(Color::White))
    );
  }

  #[test]
  fn test_render_selected_has_marker_and_highlight() {
    let renderer = PosterRowRenderer::default();
    let mut item = top_gun();
    item.toggle_selected();
    let rendered = renderer.render_row(&RowView::from(&item));
    let dim = Style::default().add_modifier(Modifier::DIM);

    assert_eq!(
      rendered,
      ListItem::new(Text::from(vec![
        Line::from_iter([
          Span::from("✔ ").style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
          Span::from("Top Gun").style(Style::default().add_modifier(Modifier::BOLD)),
          Span::raw("  "),
          Span::from("★★★½☆").style(Style::default().fg(Color::Yellow)),
          Span::from(" 3.4").style(dim),
        ]),
        Line::from_iter([Span::raw("  "), Span::raw("Tony Scott"), Span::from("  [download2]").style(dim)]),
        Line::from_iter([
          Span::raw("  "),
          Span::from("This is a Action/Drama movie.").style(Style::default().add_modifier(Modifier::ITALIC)),
        ]),
      ]))
      .style(Style::default().fg(Color::Black).bg(Color::LightYellow).add_modifier(Modifier::BOLD))
    );

    item.toggle_selected();
    assert_eq!(renderer.render_row(&RowView::from(&item)), renderer.render_row(&RowView::from(&top_gun())));
  }

  #[test]
  fn test_renderer_uses_configured_styles() {
    let mut config = Config::default();
    let mut styles = std::collections::HashMap::new();
    styles.insert("selected_row".to_string(), Style::default().bg(Color::Blue));
    config.styles.insert(Mode::Posters, styles);

    let renderer = PosterRowRenderer::from_config(&config);
    let mut item = top_gun();
    item.toggle_selected();

    let rendered = renderer.render_row(&RowView::from(&item));
    let expected = PosterRowRenderer { selected_style: Style::default().bg(Color::Blue), ..PosterRowRenderer::default() }
      .render_row(&RowView::from(&item));
    assert_eq!(rendered, expected);
  }
}
