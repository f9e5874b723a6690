use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
  ConfirmSelection,
  Error(String),
  Quit,
  Render,
  Resize(u16, u16),
  Resume,
  SelectNext,
  SelectPrevious,
  SelectionChanged(bool), // Aggregate "any poster selected", sent after every toggle
  Suspend,
  TapRow(usize),
  Tick,
  ToggleSelected,
}
