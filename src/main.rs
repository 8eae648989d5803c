use {
  anyhow::Context,
  app::App,
  button::Button,
  command::Command,
  command_dispatch::CommandDispatch,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind},
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  help_view::HelpView,
  options::Options,
  pagination::Pagination,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
  },
  serde::{Deserialize, Serialize},
  snapshot::Snapshot,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env,
    fs::{self, OpenOptions},
    io::{self, IsTerminal, Stdout},
    ops::Range,
    path::PathBuf,
    process,
    sync::Mutex,
    time::{Duration, Instant},
  },
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, warn},
  tracing_subscriber::{EnvFilter, fmt, prelude::*},
  transient_message::TransientMessage,
};

mod app;
mod button;
mod button_list;
mod command;
mod command_dispatch;
mod config;
mod effect;
mod event;
mod help_view;
mod key_binding;
mod logging;
mod options;
mod pagination;
mod snapshot;
mod state;
mod transient_message;

const BASE_INDENT: &str = " ";

const HELP_STATUS: &str = "Press ? or esc to close help";

const HELP_TEXT: &str = "\
Navigation:
  ← / h / p   previous page
  → / l / n   next page
  home / g    first page
  end / G     last page
  1-9         activate the n-th button
              (an ellipsis jumps into the
              hidden pages)

Layout:
  + / -       more or fewer lines per page
  ] / [       more or fewer buttons

Other:
  r           reload the file
  ?           toggle this help
  q / esc     quit
";

const HELP_TITLE: &str = "Help";

const KEYS_STATUS: &str =
  "←/h prev • →/l next • 1-9 jump • +/- page size • ]/[ buttons • r reload • ? help • q quit";

const LOADING_STATUS: &str = "Loading...";

const MAX_BUTTONS: usize = 15;

const TRANSIENT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(3);

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn parse_args() -> Result<PathBuf> {
  let path = env::args()
    .nth(1)
    .map(PathBuf::from)
    .context("usage: paginator <path>")?;

  if !path.is_file() {
    anyhow::bail!("file not found: {}", path.display());
  }

  Ok(path)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

fn run() -> Result {
  let path = parse_args()?;

  logging::init();

  let config = Config::load().context("could not load config")?;

  info!(path = %path.display(), "starting paginator");

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(path, config);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run() {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
