use std::{ops::Range, time::Instant};

use color_eyre::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error, info};

use super::{
  poster_row::{PosterRowRenderer, ROW_HEIGHT},
  presenter::{PosterListPresenter, watchlist_text},
};
use crate::{
  action::Action,
  components::{
    Component,
    shared::{InstructionFooter, Toast},
    traits::RowRenderer,
  },
  config::Config,
  mode::Mode,
  posters::PosterStore,
  tui::Frame,
};

/// The single screen: poster list, the confirm control and a toast for the watchlist.
///
/// Selection changes reported by the presenter arrive as `Action::SelectionChanged`
/// and trigger a redraw, which shows or hides the confirm control.
pub struct PosterListScreen {
  presenter: PosterListPresenter,
  renderer: PosterRowRenderer,
  config: Config,
  list_state: ListState,
  // Rendered rows, replaced one at a time as posters are toggled.
  rows: Vec<ListItem<'static>>,
  // Inner list area, rows fully drawn and confirm area from the last draw, used for mouse hit testing.
  list_area: Rect,
  visible_rows: Range<usize>,
  confirm_area: Option<Rect>,
  toast: Toast,
  instruction_footer: InstructionFooter,
}

impl PosterListScreen {
  pub fn new(store: PosterStore) -> Self {
    let cursor = if store.is_empty() { None } else { Some(0) };
    let presenter = PosterListPresenter::new(store);
    let renderer = PosterRowRenderer::default();
    let rows = render_rows(&presenter, &renderer);
    PosterListScreen {
      presenter,
      renderer,
      config: Config::default(),
      list_state: ListState::default().with_selected(cursor),
      rows,
      list_area: Rect::default(),
      visible_rows: 0..0,
      confirm_area: None,
      toast: Toast::default(),
      instruction_footer: InstructionFooter::default(),
    }
  }

  pub fn presenter(&self) -> &PosterListPresenter {
    &self.presenter
  }

  pub fn toast(&self) -> &Toast {
    &self.toast
  }

  pub fn cursor(&self) -> Option<usize> {
    self.list_state.selected()
  }

  /// The confirm control is shown exactly when at least one poster is selected.
  pub fn confirm_visible(&self) -> bool {
    self.presenter.any_selected()
  }

  pub fn select_next(&mut self) {
    let count = self.presenter.len();
    if count == 0 {
      return;
    }
    let next = match self.list_state.selected() {
      Some(current) if current + 1 < count => current + 1,
      _ => 0,
    };
    self.list_state.select(Some(next));
  }

  pub fn select_previous(&mut self) {
    let count = self.presenter.len();
    if count == 0 {
      return;
    }
    let previous = match self.list_state.selected() {
      Some(current) if current > 0 && current < count => current - 1,
      _ => count - 1,
    };
    self.list_state.select(Some(previous));
  }

  fn tap_row(&mut self, index: usize) {
    let Some(row) = self.presenter.on_row_tapped(index) else {
      return;
    };
    if let Some(item) = self.rows.get_mut(index) {
      *item = self.renderer.render_row(&row);
    }
    self.list_state.select(Some(index));
  }

  fn confirm_selection(&mut self) {
    let selected = self.presenter.selected_items();
    if selected.is_empty() {
      info!("PosterListScreen: confirm ignored, nothing selected");
      return;
    }
    info!("PosterListScreen: adding {} posters to the watchlist", selected.len());
    let text = watchlist_text(&selected);
    self.toast.show(text);
  }

  /// Index of the poster row drawn at the given terminal cell, if any.
  fn row_at(&self, column: u16, row: u16) -> Option<usize> {
    if !contains(self.list_area, column, row) {
      return None;
    }
    let index = self.visible_rows.start + usize::from((row - self.list_area.y) / ROW_HEIGHT);
    self.visible_rows.contains(&index).then_some(index)
  }

  fn render_list(&mut self, frame: &mut Frame<'_>, area: Rect) {
    let title = match self.presenter.selected_count() {
      0 => "Posters".to_string(),
      count => format!("Posters ({count} selected)"),
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    self.list_area = block.inner(area);

    let list = List::new(self.rows.clone())
      .block(block)
      .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
      .highlight_symbol("→")
      .repeat_highlight_symbol(true);

    frame.render_stateful_widget(list, area, &mut self.list_state);

    // The list only draws rows that fit completely.
    let offset = self.list_state.offset();
    let capacity = usize::from(self.list_area.height / ROW_HEIGHT);
    self.visible_rows = offset..(offset + capacity).min(self.presenter.len());
  }

  fn render_confirm(&self, frame: &mut Frame<'_>, area: Rect) {
    let label = format!("Add to Watchlist ({})", self.presenter.selected_count());
    let style =
      self.config.style(Mode::Posters, "confirm").unwrap_or(Style::default().fg(Color::Black).bg(Color::LightGreen));
    let button =
      Paragraph::new(label).alignment(Alignment::Center).block(Block::default().borders(Borders::ALL)).style(style);
    frame.render_widget(button, area);
  }
}

fn render_rows(presenter: &PosterListPresenter, renderer: &PosterRowRenderer) -> Vec<ListItem<'static>> {
  presenter.render_all().iter().map(|row| renderer.render_row(row)).collect()
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
  column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

#[async_trait::async_trait]
impl Component for PosterListScreen {
  fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
    self.presenter.register_listener(move |any_selected| {
      if let Err(e) = tx.send(Action::SelectionChanged(any_selected)) {
        error!("Failed to send selection change: {}", e);
      }
    });
    Ok(())
  }

  fn register_config_handler(&mut self, config: Config) -> Result<()> {
    self.renderer = PosterRowRenderer::from_config(&config);
    self.rows = render_rows(&self.presenter, &self.renderer);
    self.config = config;
    Ok(())
  }

  async fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
    let action = match mouse.kind {
      MouseEventKind::Down(MouseButton::Left) => {
        if self.confirm_area.is_some_and(|area| contains(area, mouse.column, mouse.row)) {
          Some(Action::ConfirmSelection)
        } else {
          self.row_at(mouse.column, mouse.row).map(Action::TapRow)
        }
      },
      MouseEventKind::ScrollDown => Some(Action::SelectNext),
      MouseEventKind::ScrollUp => Some(Action::SelectPrevious),
      _ => None,
    };
    Ok(action)
  }

  async fn update(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::SelectNext => {
        self.select_next();
        Ok(Some(Action::Render))
      },
      Action::SelectPrevious => {
        self.select_previous();
        Ok(Some(Action::Render))
      },
      Action::ToggleSelected => Ok(self.cursor().map(Action::TapRow)),
      Action::TapRow(index) => {
        self.tap_row(index);
        Ok(Some(Action::Render))
      },
      Action::SelectionChanged(any_selected) => {
        debug!("PosterListScreen: confirm control visible: {}", any_selected);
        Ok(Some(Action::Render))
      },
      Action::ConfirmSelection => {
        self.confirm_selection();
        Ok(Some(Action::Render))
      },
      Action::Tick => {
        if self.toast.expire(Instant::now()) {
          return Ok(Some(Action::Render));
        }
        Ok(None)
      },
      _ => Ok(None),
    }
  }

  fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> Result<()> {
    let confirm_visible = self.confirm_visible();
    let constraints = if confirm_visible {
      vec![Constraint::Min(ROW_HEIGHT + 2), Constraint::Length(3), Constraint::Length(3)] // List, Confirm, Footer
    } else {
      vec![Constraint::Min(ROW_HEIGHT + 2), Constraint::Length(3)] // List, Footer
    };
    let chunks = Layout::default().direction(Direction::Vertical).constraints(constraints).split(area);

    self.render_list(frame, chunks[0]);

    self.confirm_area = None;
    if confirm_visible {
      self.render_confirm(frame, chunks[1]);
      self.confirm_area = Some(chunks[1]);
    }

    let instructions = self.instruction_footer.instructions(!self.presenter.is_empty(), confirm_visible);
    self.instruction_footer.render(frame, chunks[chunks.len() - 1], instructions);

    self.toast.render(frame, area, self.config.style(Mode::Posters, "toast").unwrap_or_default());
    Ok(())
  }
}
