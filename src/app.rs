use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{error, info};

use crate::{
  action::Action,
  cli::Cli,
  components::{Component, PosterListScreen},
  config::Config,
  mode::Mode,
  posters::PosterStore,
  tui::{self, Tui},
};

pub struct App {
  pub config: Config,
  pub tick_rate: f64,
  pub frame_rate: f64,
  pub mouse: bool,
  pub poster_list: Box<dyn Component>,
  pub should_quit: bool,
  pub should_suspend: bool,
  pub mode: Mode,
}

impl App {
  pub fn new(cli: &Cli) -> Result<Self> {
    let config = Config::new()?;
    let store = PosterStore::from_records_or_sample(&config.posters);
    info!("App: starting with {} posters", store.len());
    let poster_list = Box::new(PosterListScreen::new(store));
    Ok(Self {
      config,
      tick_rate: cli.tick_rate,
      frame_rate: cli.frame_rate,
      mouse: !cli.no_mouse,
      poster_list,
      should_quit: false,
      should_suspend: false,
      mode: Mode::default(),
    })
  }

  fn new_tui(&self) -> Result<Tui> {
    Ok(Tui::new()?.tick_rate(self.tick_rate).frame_rate(self.frame_rate).mouse(self.mouse))
  }

  fn render(&mut self, tui: &mut Tui, action_tx: &UnboundedSender<Action>) -> Result<()> {
    tui.draw(|f| {
      if let Err(e) = self.poster_list.draw(f, f.area()) {
        if let Err(send_error) = action_tx.send(Action::Error(format!("Failed to draw: {e:?}"))) {
          error!("Failed to report draw error: {}", send_error);
        }
      }
    })?;
    Ok(())
  }

  pub async fn run(&mut self) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel();

    let mut tui = self.new_tui()?;
    tui.enter()?;

    self.poster_list.register_action_handler(action_tx.clone())?;
    self.poster_list.register_config_handler(self.config.clone())?;

    loop {
      if let Some(e) = tui.next().await {
        match e {
          tui::Event::Quit => action_tx.send(Action::Quit)?,
          tui::Event::Tick => action_tx.send(Action::Tick)?,
          tui::Event::Render => action_tx.send(Action::Render)?,
          tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
          tui::Event::Key(key) => {
            if let Some(action) = self.config.keybindings.action_for(self.mode, &key) {
              info!("Got action: {action:?}");
              action_tx.send(action.clone())?;
            }
          },
          _ => {},
        }

        if let Some(action) = self.poster_list.handle_events(Some(e.clone())).await? {
          action_tx.send(action)?;
        }
      }

      while let Ok(action) = action_rx.try_recv() {
        if action != Action::Tick && action != Action::Render {
          log::debug!("{action:?}");
        }

        match action {
          Action::Quit => self.should_quit = true,
          Action::Suspend => self.should_suspend = true,
          Action::Resume => self.should_suspend = false,
          Action::Error(ref message) => error!("{message}"),
          Action::Resize(w, h) => {
            tui.resize(Rect::new(0, 0, w, h))?;
            self.render(&mut tui, &action_tx)?;
          },
          Action::Render => self.render(&mut tui, &action_tx)?,
          _ => {},
        }
        if let Some(action) = self.poster_list.update(action.clone()).await? {
          action_tx.send(action)?
        };
      }

      if self.should_suspend {
        tui.suspend()?;
        action_tx.send(Action::Resume)?;
        tui = self.new_tui()?;
        tui.enter()?;
      } else if self.should_quit {
        tui.stop()?;
        break;
      }
    }
    tui.exit()?;
    Ok(())
  }
}
