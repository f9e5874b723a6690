use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
  #[arg(
    short,
    long,
    value_name = "FLOAT",
    help = "Tick rate, i.e. number of ticks per second",
    default_value_t = 4.0,
    value_parser = parse_rate
  )]
  pub tick_rate: f64,

  #[arg(
    short,
    long,
    value_name = "FLOAT",
    help = "Frame rate, i.e. number of frames per second",
    default_value_t = 30.0,
    value_parser = parse_rate
  )]
  pub frame_rate: f64,

  #[arg(long, help = "Disable mouse capture, posters can then only be toggled from the keyboard")]
  pub no_mouse: bool,
}

/// Parses a per-second rate. Zero, negative and non-finite rates are rejected.
fn parse_rate(raw: &str) -> Result<f64, String> {
  let rate: f64 = raw.parse().map_err(|e| format!("`{raw}` is not a number: {e}"))?;
  if !rate.is_finite() || rate <= 0.0 {
    return Err(format!("`{raw}` must be a positive number"));
  }
  Ok(rate)
}
