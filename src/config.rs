use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, de::Deserializer};
use tracing::{info, warn};

use crate::{action::Action, error::Error, mode::Mode, posters::PosterRecord};

const CONFIG: &str = include_str!("../.config/config.json5");

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub keybindings: KeyBindings,
  #[serde(default)]
  pub styles: Styles,
  #[serde(default)]
  pub posters: Vec<PosterRecord>,
}

impl Config {
  pub fn new() -> Result<Self, Error> {
    let default_config = Self::embedded()?;
    let config_dir = crate::utils::get_config_dir();
    let mut builder = config::Config::builder();

    let config_files = [
      ("config.json5", config::FileFormat::Json5),
      ("config.json", config::FileFormat::Json),
      ("config.yaml", config::FileFormat::Yaml),
      ("config.toml", config::FileFormat::Toml),
      ("config.ini", config::FileFormat::Ini),
    ];
    let mut found_config = false;
    for (file, format) in &config_files {
      let path = config_dir.join(file);
      builder = builder.add_source(config::File::from(path.clone()).format(*format).required(false));
      if path.exists() {
        info!("Config: using {}", path.display());
        found_config = true
      }
    }
    if !found_config {
      warn!("Config: no configuration file found in {}, using defaults", config_dir.display());
    }

    let mut cfg: Self = builder.build()?.try_deserialize()?;
    cfg.merge_defaults(default_config);
    Ok(cfg)
  }

  /// The configuration bundled into the binary.
  pub fn embedded() -> Result<Self, Error> {
    Ok(json5::from_str(CONFIG)?)
  }

  fn merge_defaults(&mut self, default_config: Config) {
    for (mode, default_bindings) in default_config.keybindings.0 {
      let user_bindings = self.keybindings.entry(mode).or_default();
      for (key, cmd) in default_bindings {
        user_bindings.entry(key).or_insert(cmd);
      }
    }
    for (mode, default_styles) in default_config.styles.0 {
      let user_styles = self.styles.entry(mode).or_default();
      for (name, style) in default_styles {
        user_styles.entry(name).or_insert(style);
      }
    }
  }

  pub fn style(&self, mode: Mode, name: &str) -> Option<Style> {
    self.styles.get(&mode).and_then(|styles| styles.get(name)).copied()
  }
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Mode, HashMap<KeyEvent, Action>>);

impl KeyBindings {
  pub fn action_for(&self, mode: Mode, key: &KeyEvent) -> Option<&Action> {
    self.get(&mode)?.get(&KeyEvent::new(key.code, key.modifiers))
  }
}

impl<'de> Deserialize<'de> for KeyBindings {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let parsed_map = HashMap::<Mode, HashMap<String, Action>>::deserialize(deserializer)?;

    let mut keybindings = HashMap::new();
    for (mode, inner_map) in parsed_map {
      let mut converted = HashMap::new();
      for (key_str, cmd) in inner_map {
        let key = parse_key_binding(&key_str).map_err(serde::de::Error::custom)?;
        converted.insert(key, cmd);
      }
      keybindings.insert(mode, converted);
    }

    Ok(KeyBindings(keybindings))
  }
}

/// Parses a binding written as `<ctrl-c>`, `<space>` or `<q>`.
pub fn parse_key_binding(raw: &str) -> Result<KeyEvent, Error> {
  let inner = raw
    .strip_prefix('<')
    .and_then(|s| s.strip_suffix('>'))
    .ok_or_else(|| Error::KeyBinding(raw.to_string()))?;
  parse_key_event(inner)
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, Error> {
  let raw_lower = raw.to_ascii_lowercase();
  let (remaining, modifiers) = extract_modifiers(&raw_lower);
  parse_key_code_with_modifiers(remaining, modifiers).map_err(|_| Error::KeyBinding(raw.to_string()))
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
  let mut modifiers = KeyModifiers::empty();
  let mut current = raw;

  loop {
    match current {
      rest if rest.starts_with("ctrl-") => {
        modifiers.insert(KeyModifiers::CONTROL);
        current = &rest[5..];
      },
      rest if rest.starts_with("alt-") => {
        modifiers.insert(KeyModifiers::ALT);
        current = &rest[4..];
      },
      rest if rest.starts_with("shift-") => {
        modifiers.insert(KeyModifiers::SHIFT);
        current = &rest[6..];
      },
      _ => break,
    };
  }

  (current, modifiers)
}

fn parse_key_code_with_modifiers(raw: &str, mut modifiers: KeyModifiers) -> Result<KeyEvent, ()> {
  let c = match raw {
    "esc" => KeyCode::Esc,
    "enter" => KeyCode::Enter,
    "left" => KeyCode::Left,
    "right" => KeyCode::Right,
    "up" => KeyCode::Up,
    "down" => KeyCode::Down,
    "home" => KeyCode::Home,
    "end" => KeyCode::End,
    "pageup" => KeyCode::PageUp,
    "pagedown" => KeyCode::PageDown,
    "backtab" => {
      modifiers.insert(KeyModifiers::SHIFT);
      KeyCode::BackTab
    },
    "backspace" => KeyCode::Backspace,
    "delete" => KeyCode::Delete,
    "insert" => KeyCode::Insert,
    "tab" => KeyCode::Tab,
    "space" => KeyCode::Char(' '),
    c if c.chars().count() == 1 => {
      let mut c = c.chars().next().ok_or(())?;
      if modifiers.contains(KeyModifiers::SHIFT) {
        c = c.to_ascii_uppercase();
      }
      KeyCode::Char(c)
    },
    _ => return Err(()),
  };
  Ok(KeyEvent::new(c, modifiers))
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<Mode, HashMap<String, Style>>);

impl<'de> Deserialize<'de> for Styles {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let parsed_map = HashMap::<Mode, HashMap<String, String>>::deserialize(deserializer)?;

    let mut styles = HashMap::new();
    for (mode, inner_map) in parsed_map {
      let mut converted = HashMap::new();
      for (name, style) in inner_map {
        converted.insert(name, parse_style(&style).map_err(serde::de::Error::custom)?);
      }
      styles.insert(mode, converted);
    }

    Ok(Styles(styles))
  }
}

/// Parses `"bold yellow on blue"` style strings. Unknown words are an error.
pub fn parse_style(line: &str) -> Result<Style, Error> {
  let (foreground, background) = line.split_at(line.to_ascii_lowercase().find("on ").unwrap_or(line.len()));
  let background = background.strip_prefix("on ").unwrap_or(background);

  let mut style = Style::default();
  for word in foreground.split_whitespace() {
    match word.to_lowercase().as_str() {
      "bold" => style = style.add_modifier(Modifier::BOLD),
      "dim" => style = style.add_modifier(Modifier::DIM),
      "italic" => style = style.add_modifier(Modifier::ITALIC),
      "underline" => style = style.add_modifier(Modifier::UNDERLINED),
      "inverse" => style = style.add_modifier(Modifier::REVERSED),
      color => style = style.fg(parse_color(color).ok_or_else(|| Error::Style(line.to_string()))?),
    }
  }
  if let Some(color) = background.split_whitespace().next() {
    style = style.bg(parse_color(color).ok_or_else(|| Error::Style(line.to_string()))?);
  }
  Ok(style)
}

fn parse_color(s: &str) -> Option<Color> {
  let s = s.trim().to_lowercase();
  if let Some(index) = s.strip_prefix("color") {
    return index.parse::<u8>().ok().map(Color::Indexed);
  }
  if let Some(hex) = s.strip_prefix('#') {
    let value = u32::from_str_radix(hex, 16).ok()?;
    return (hex.len() == 6).then(|| Color::from_u32(value));
  }
  match s.as_str() {
    "black" => Some(Color::Black),
    "red" => Some(Color::Red),
    "green" => Some(Color::Green),
    "yellow" => Some(Color::Yellow),
    "blue" => Some(Color::Blue),
    "magenta" => Some(Color::Magenta),
    "cyan" => Some(Color::Cyan),
    "gray" | "grey" => Some(Color::Gray),
    "darkgray" | "darkgrey" => Some(Color::DarkGray),
    "lightred" => Some(Color::LightRed),
    "lightgreen" => Some(Color::LightGreen),
    "lightyellow" => Some(Color::LightYellow),
    "lightblue" => Some(Color::LightBlue),
    "lightmagenta" => Some(Color::LightMagenta),
    "lightcyan" => Some(Color::LightCyan),
    "white" => Some(Color::White),
    _ => None,
  }
}
