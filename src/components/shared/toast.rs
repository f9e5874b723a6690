use std::time::{Duration, Instant};

use ratatui::{
  layout::{Alignment, Rect},
  style::Style,
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::info;

use crate::tui::Frame;

/// How long a toast stays up.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A transient message drawn over the bottom of the screen.
#[derive(Debug, Clone)]
pub struct Toast {
  message: Option<String>,
  shown_at: Instant,
  duration: Duration,
}

impl Default for Toast {
  fn default() -> Self {
    Toast::new(TOAST_DURATION)
  }
}

impl Toast {
  pub fn new(duration: Duration) -> Self {
    Toast { message: None, shown_at: Instant::now(), duration }
  }

  pub fn show(&mut self, message: String) {
    info!("Toast: showing {:?}", message);
    self.message = Some(message);
    self.shown_at = Instant::now();
  }

  pub fn message(&self) -> Option<&str> {
    self.message.as_deref()
  }

  pub fn is_visible(&self) -> bool {
    self.message.is_some()
  }

  /// Hides the toast once it has been up for its duration. Returns true if it was hidden.
  pub fn expire(&mut self, now: Instant) -> bool {
    if self.message.is_some() && now.saturating_duration_since(self.shown_at) >= self.duration {
      self.message = None;
      return true;
    }
    false
  }

  pub fn render(&self, frame: &mut Frame<'_>, area: Rect, style: Style) {
    let Some(message) = self.message.as_deref() else {
      return;
    };

    let popup = toast_area(area, message);
    let paragraph = Paragraph::new(message)
      .alignment(Alignment::Center)
      .wrap(Wrap { trim: true })
      .block(Block::default().borders(Borders::ALL))
      .style(style);
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
  }
}

/// Bottom-centred rectangle sized to fit `message`, clipped to `area`.
fn toast_area(area: Rect, message: &str) -> Rect {
  let longest = message.lines().map(|line| line.chars().count()).max().unwrap_or(0);
  let longest = u16::try_from(longest).unwrap_or(u16::MAX);
  let lines = u16::try_from(message.lines().count().max(1)).unwrap_or(u16::MAX);
  let width = longest.saturating_add(4).min(area.width);
  let height = lines.saturating_add(2).min(area.height);
  let x = area.x + (area.width - width) / 2;
  let y = area.y + area.height.saturating_sub(height.saturating_add(4));
  Rect::new(x, y, width, height)
}
