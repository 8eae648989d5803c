use super::*;

#[derive(Debug)]
pub(crate) struct Config {
  options: Options,
  path: PathBuf,
}

impl Config {
  pub(crate) fn config_dir() -> Result<PathBuf> {
    let base_dir = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".config")
    } else {
      env::current_dir()?.join(".config")
    };

    Ok(base_dir.join("paginator"))
  }

  fn config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("PAGINATOR_CONFIG_FILE") {
      return Ok(PathBuf::from(path));
    }

    Ok(Self::config_dir()?.join("config.json"))
  }

  pub(crate) fn load() -> Result<Self> {
    Self::load_from(Self::config_path()?)
  }

  pub(crate) fn load_from(path: PathBuf) -> Result<Self> {
    let options = if path.exists() {
      let data = fs::read(&path)
        .with_context(|| format!("could not read {}", path.display()))?;

      if data.is_empty() {
        Options::default()
      } else {
        serde_json::from_slice::<Options>(&data)
          .with_context(|| format!("invalid config file {}", path.display()))?
      }
    } else {
      Options::default()
    };

    info!(path = %path.display(), ?options, "loaded config");

    Ok(Self { options, path })
  }

  pub(crate) fn options(&self) -> Options {
    self.options
  }

  fn persist(&self) -> Result {
    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent)?;
    }

    let serialized = serde_json::to_vec_pretty(&self.options)?;

    fs::write(&self.path, serialized)?;

    debug!(path = %self.path.display(), "saved config");

    Ok(())
  }

  /// Stores the user-adjustable parts of `pagination`. The item count belongs
  /// to whatever file is open, so it is never persisted.
  pub(crate) fn save(&mut self, pagination: &Pagination) -> Result {
    let options = Options {
      num_buttons: pagination.num_buttons(),
      num_items: 0,
      page: pagination.page(),
      page_size: pagination.page_size(),
    };

    if options == self.options {
      return Ok(());
    }

    self.options = options;

    self.persist()
  }
}
