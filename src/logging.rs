use super::*;

fn log_path() -> Result<PathBuf> {
  if let Ok(path) = env::var("PAGINATOR_LOG_FILE") {
    return Ok(PathBuf::from(path));
  }

  Ok(Config::config_dir()?.join("paginator.log"))
}

/// The terminal belongs to the UI, so logs go to a file. When no log file
/// can be opened, logging stays off.
pub(crate) fn init() {
  let Ok(path) = log_path() else {
    return;
  };

  if let Some(parent) = path.parent()
    && fs::create_dir_all(parent).is_err()
  {
    return;
  }

  let Ok(file) = OpenOptions::new().create(true).append(true).open(&path)
  else {
    return;
  };

  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::registry()
    .with(
      fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(Mutex::new(file))
        .with_filter(env_filter),
    )
    .init();

  info!(
    path = %path.display(),
    "logging initialized; override level with RUST_LOG"
  );
}
