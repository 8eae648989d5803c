use super::*;

pub(crate) struct App {
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn button_bar(pagination: &Pagination) -> Line<'static> {
    let arrow_style = |enabled: bool| {
      if enabled {
        Style::default().fg(Color::White)
      } else {
        Style::default().fg(Color::DarkGray)
      }
    };

    let mut spans = vec![
      Span::raw(BASE_INDENT),
      Span::styled("‹", arrow_style(pagination.has_prev())),
    ];

    for button in pagination.buttons() {
      let style = if button.is_active() {
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD)
      } else if button.is_ellipsis() {
        Style::default().fg(Color::DarkGray)
      } else {
        Style::default().fg(Color::White)
      };

      spans.push(Span::raw(" "));
      spans.push(Span::styled(button.label(), style));
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled("›", arrow_style(pagination.has_next())));

    Line::from(spans)
  }

  fn draw(&self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let pagination = self.state.pagination();
    let slice = pagination.slice();
    let items = self.state.visible_items();

    let list_items: Vec<ListItem> = if items.is_empty() {
      let text = if self.state.is_loading() {
        LOADING_STATUS
      } else {
        "Nothing to show."
      };

      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(text),
      ]))]
    } else {
      let width = pagination.num_items().to_string().len();

      items
        .iter()
        .zip(slice)
        .map(|(item, index)| {
          ListItem::new(Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::styled(
              format!("{:>width$} ", index + 1),
              Style::default().fg(Color::DarkGray),
            ),
            Span::styled(item.clone(), Style::default().fg(Color::White)),
          ]))
        })
        .collect()
    };

    frame.render_widget(List::new(list_items), layout[0]);

    frame
      .render_widget(Paragraph::new(Self::button_bar(pagination)), layout[1]);

    let status = Paragraph::new(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::raw(self.state.message().to_string()),
    ]))
    .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    let keys = Paragraph::new(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::raw(KEYS_STATUS),
    ]))
    .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(keys, layout[3]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&self, effect: Effect) {
    match effect {
      Effect::LoadItems { path, request_id } => {
        let sender = self.event_tx.clone();

        self.handle.spawn(async move {
          let result = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("could not read {}", path.display()))
            .map(|text| text.lines().map(str::to_owned).collect());

          let _ = sender.send(Event::ItemsLoaded { request_id, result });
        });
      }
    }
  }

  pub(crate) fn new(path: PathBuf, config: Config) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let mut state = State::new(path, config);

    let sender = event_tx.clone();

    state.pagination_mut().subscribe(move |snapshot| {
      let _ = sender.send(Event::PaginationChanged(snapshot.clone()));
    });

    Self {
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    for effect in self.state.take_pending_effects() {
      self.execute_effect(effect);
    }

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        key_binding::command_for(key)
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }
        }
        Err(error) => {
          warn!("command failed: {error:#}");
          self.state.clear_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
        }
      }
    }

    Ok(())
  }
}
