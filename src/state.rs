use super::*;

pub(crate) struct State {
  config: Config,
  help: HelpView,
  items: Vec<String>,
  loaded_once: bool,
  message: String,
  next_request_id: u64,
  pagination: Pagination,
  path: PathBuf,
  pending_effects: Vec<Effect>,
  pending_load: Option<u64>,
  transient_message: Option<TransientMessage>,
}

impl State {
  fn activate_button(&mut self, position: usize) {
    let Some(button) = position
      .checked_sub(1)
      .and_then(|index| self.pagination.buttons().get(index))
      .copied()
    else {
      return;
    };

    self.pagination.set_page(button.page());
  }

  fn adjust_num_buttons(&mut self, grow: bool) -> Result {
    let current = self.pagination.num_buttons();

    let target = if grow {
      current.saturating_add(1).min(MAX_BUTTONS)
    } else {
      current.saturating_sub(1).max(1)
    };

    if target != current {
      self.pagination.set_num_buttons(target);
      self.config.save(&self.pagination)?;
      self.set_transient_message(format!("Showing up to {target} buttons"));
    }

    Ok(())
  }

  fn adjust_page_size(&mut self, grow: bool) -> Result {
    let current = self.pagination.page_size();

    let target = if grow {
      current.saturating_add(1)
    } else {
      current.saturating_sub(1).max(1)
    };

    if target != current {
      self.pagination.set_page_size(target);
      self.config.save(&self.pagination)?;
      self.set_transient_message(format!("{target} lines per page"));
    }

    Ok(())
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        self.config.save(&self.pagination)?;
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => {
        self.help.hide();
        self.restore_status();
      }
      Command::GoPrev => {
        self.pagination.go_prev();
      }
      Command::GoNext => {
        self.pagination.go_next();
      }
      Command::GoStart => {
        self.pagination.go_start();
      }
      Command::GoEnd => {
        self.pagination.go_end();
      }
      Command::ActivateButton(position) => self.activate_button(position),
      Command::LargerPages => self.adjust_page_size(true)?,
      Command::SmallerPages => self.adjust_page_size(false)?,
      Command::MoreButtons => self.adjust_num_buttons(true)?,
      Command::FewerButtons => self.adjust_num_buttons(false)?,
      Command::Reload => self.start_load(),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  fn finish_load(&mut self, request_id: u64, result: Result<Vec<String>>) {
    if self.pending_load != Some(request_id) {
      debug!(request_id, "discarded stale item load");
      return;
    }

    self.pending_load = None;

    match result {
      Ok(items) => {
        info!(
          path = %self.path.display(),
          count = items.len(),
          "loaded items"
        );

        let first_load = !self.loaded_once;

        self.items = items;
        self.loaded_once = true;
        self.pagination.set_num_items(self.items.len());

        if first_load {
          self.pagination.set_page(self.config.options().page);
        }

        self.refresh_status();

        if !first_load {
          self.set_transient_message(format!(
            "Reloaded {} lines",
            self.items.len()
          ));
        }
      }
      Err(error) => {
        warn!(path = %self.path.display(), "could not load items: {error:#}");
        self.refresh_status();
        self.set_transient_message(format!("Could not load file: {error}"));
      }
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::ItemsLoaded { request_id, result } => {
        self.finish_load(request_id, result);
      }
      Event::PaginationChanged(snapshot) => {
        debug!(
          page = snapshot.page,
          num_pages = snapshot.num_pages,
          "pagination changed"
        );

        if self.transient_message.is_none() && !self.help.is_visible() {
          self.message = snapshot.status(self.pagination.num_items());
        }
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.pending_load.is_some()
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(path: PathBuf, config: Config) -> Self {
    let options = config.options();

    let pagination = Pagination::new(Options {
      num_items: 0,
      page: 1,
      ..options
    });

    let mut state = Self {
      config,
      help: HelpView::new(),
      items: Vec::new(),
      loaded_once: false,
      message: String::new(),
      next_request_id: 0,
      pagination,
      path,
      pending_effects: Vec::new(),
      pending_load: None,
      transient_message: None,
    };

    state.start_load();

    state
  }

  pub(crate) fn pagination(&self) -> &Pagination {
    &self.pagination
  }

  pub(crate) fn pagination_mut(&mut self) -> &mut Pagination {
    &mut self.pagination
  }

  fn refresh_status(&mut self) {
    if self.help.is_visible() {
      return;
    }

    self.message = self
      .pagination
      .snapshot()
      .status(self.pagination.num_items());
  }

  /// Rebuilds the status line after the help overlay closes. Anything that
  /// arrived while it was open is shown now.
  fn restore_status(&mut self) {
    match &self.transient_message {
      Some(transient) if !transient.is_expired_at(Instant::now()) => {
        self.message = transient.text().to_string();
      }
      _ => {
        self.transient_message = None;

        if self.pending_load.is_some() {
          self.message = LOADING_STATUS.into();
        } else {
          self.refresh_status();
        }
      }
    }
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    self.transient_message = Some(TransientMessage::new(message.clone()));

    if !self.help.is_visible() {
      self.message = message;
    }
  }

  fn start_load(&mut self) {
    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.pending_load = Some(request_id);

    if !self.help.is_visible() {
      self.message = LOADING_STATUS.into();
    }

    self.pending_effects.push(Effect::LoadItems {
      path: self.path.clone(),
      request_id,
    });
  }

  pub(crate) fn take_pending_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn update_transient_message(&mut self) {
    if self.help.is_visible() {
      return;
    }

    let Some(transient) = &self.transient_message else {
      return;
    };

    let superseded = self.message != transient.text();
    let expired = transient.is_expired_at(Instant::now());

    if superseded {
      self.transient_message = None;
    } else if expired {
      self.transient_message = None;
      self.refresh_status();
    }
  }

  pub(crate) fn visible_items(&self) -> &[String] {
    self.items.get(self.pagination.slice()).unwrap_or_default()
  }
}
