use ratatui::{
  layout::Rect,
  style::{Color, Style},
  widgets::{Block, Borders, Paragraph},
};

use crate::tui::Frame;

#[derive(Debug, Default)]
pub struct InstructionFooter {}

impl InstructionFooter {
  /// Keybinding hints for the poster list, depending on whether anything is selected.
  pub fn instructions(&self, has_rows: bool, any_selected: bool) -> Vec<&'static str> {
    let mut instructions = vec!["q: Quit"];
    if has_rows {
      instructions.push("↑/↓: Move");
      instructions.push("space/click: Toggle");
    }
    if any_selected {
      instructions.push("a: Add to Watchlist");
    }
    instructions
  }

  pub fn render(&self, frame: &mut Frame<'_>, area: Rect, instructions: Vec<&'static str>) {
    if instructions.is_empty() {
      return;
    }

    let text = instructions.join(" | ");
    let paragraph =
      Paragraph::new(text).block(Block::default().borders(Borders::ALL)).style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn test_instructions_without_selection() {
    let footer = InstructionFooter::default();
    assert_eq!(footer.instructions(true, false), vec!["q: Quit", "↑/↓: Move", "space/click: Toggle"]);
  }

  #[test]
  fn test_instructions_with_selection() {
    let footer = InstructionFooter::default();
    assert_eq!(footer.instructions(true, true), vec![
      "q: Quit",
      "↑/↓: Move",
      "space/click: Toggle",
      "a: Add to Watchlist"
    ]);
  }

  #[test]
  fn test_instructions_for_empty_list() {
    let footer = InstructionFooter::default();
    assert_eq!(footer.instructions(false, false), vec!["q: Quit"]);
  }
}
