//! Pagination state.
//!
//! Holds the four inputs (page, page size, item count, button budget) and
//! keeps a [`Snapshot`] of everything derived from them. Every mutation
//! reclaims the page into range first, then rebuilds the snapshot, then
//! notifies observers if anything they can see changed. All of this
//! happens before the mutator returns.

use super::*;

pub(crate) struct Pagination {
  num_buttons: usize,
  num_items: usize,
  observers: Vec<Box<dyn FnMut(&Snapshot)>>,
  page: usize,
  page_size: usize,
  snapshot: Snapshot,
}

impl Pagination {
  pub(crate) fn buttons(&self) -> &[Button] {
    &self.snapshot.buttons
  }

  fn count_pages(num_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
      0
    } else {
      num_items.div_ceil(page_size)
    }
  }

  fn derive(&self) -> Snapshot {
    let num_pages = self.num_pages();

    let slice = if num_pages == 0 {
      0..0
    } else {
      let start = (self.page - 1) * self.page_size;
      start..start.saturating_add(self.page_size).min(self.num_items)
    };

    Snapshot {
      buttons: button_list::build(self.page, num_pages, self.num_buttons),
      has_next: self.page < num_pages,
      has_prev: self.page > 1,
      num_pages,
      page: self.page,
      slice,
    }
  }

  pub(crate) fn go_end(&mut self) -> usize {
    let num_pages = self.num_pages();
    self.set_page(num_pages);
    num_pages
  }

  pub(crate) fn go_next(&mut self) -> usize {
    if self.has_next() {
      self.set_page(self.page + 1);
    }

    self.page
  }

  pub(crate) fn go_prev(&mut self) -> usize {
    if self.has_prev() {
      self.set_page(self.page - 1);
    }

    self.page
  }

  pub(crate) fn go_start(&mut self) -> usize {
    self.set_page(1);
    1
  }

  pub(crate) fn has_next(&self) -> bool {
    self.snapshot.has_next
  }

  pub(crate) fn has_prev(&self) -> bool {
    self.snapshot.has_prev
  }

  pub(crate) fn new(options: Options) -> Self {
    let mut pagination = Self {
      num_buttons: options.num_buttons,
      num_items: options.num_items,
      observers: Vec::new(),
      page: options.page.max(1),
      page_size: options.page_size,
      snapshot: Snapshot::default(),
    };

    pagination.reclaim();
    pagination.snapshot = pagination.derive();

    debug!(
      page = pagination.page,
      page_size = pagination.page_size,
      num_items = pagination.num_items,
      num_buttons = pagination.num_buttons,
      "created pagination"
    );

    pagination
  }

  pub(crate) fn num_buttons(&self) -> usize {
    self.num_buttons
  }

  pub(crate) fn num_items(&self) -> usize {
    self.num_items
  }

  pub(crate) fn num_pages(&self) -> usize {
    Self::count_pages(self.num_items, self.page_size)
  }

  pub(crate) fn page(&self) -> usize {
    self.page
  }

  pub(crate) fn page_size(&self) -> usize {
    self.page_size
  }

  fn reclaim(&mut self) {
    let last = self.num_pages().max(1);

    if self.page > last {
      debug!(from = self.page, to = last, "reclaimed page");
      self.page = last;
    }
  }

  fn refresh(&mut self) {
    self.reclaim();

    let snapshot = self.derive();

    if snapshot == self.snapshot {
      return;
    }

    self.snapshot = snapshot;

    for observer in &mut self.observers {
      observer(&self.snapshot);
    }
  }

  pub(crate) fn set_num_buttons(&mut self, num_buttons: usize) {
    self.num_buttons = num_buttons;
    self.refresh();
  }

  pub(crate) fn set_num_items(&mut self, num_items: usize) {
    self.num_items = num_items;
    self.refresh();
  }

  /// Navigates to `page` if it exists. Anything outside `1..=num_pages` is
  /// ignored.
  pub(crate) fn set_page(&mut self, page: usize) {
    if page == 0 || page > self.num_pages() {
      debug!(page, num_pages = self.num_pages(), "ignored page change");
      return;
    }

    self.page = page;
    self.refresh();
  }

  pub(crate) fn set_page_size(&mut self, page_size: usize) {
    self.page_size = page_size;
    self.refresh();
  }

  pub(crate) fn slice(&self) -> Range<usize> {
    self.snapshot.slice.clone()
  }

  pub(crate) fn snapshot(&self) -> &Snapshot {
    &self.snapshot
  }

  /// Registers `observer` to be called with the new snapshot after every
  /// mutation that changes it.
  pub(crate) fn subscribe<F>(&mut self, observer: F)
  where
    F: FnMut(&Snapshot) + 'static,
  {
    self.observers.push(Box::new(observer));
  }
}

impl Default for Pagination {
  fn default() -> Self {
    Self::new(Options::default())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::cell::RefCell, std::rc::Rc};

  fn pagination(num_items: usize, page_size: usize) -> Pagination {
    Pagination::new(Options {
      num_items,
      page_size,
      ..Options::default()
    })
  }

  fn recorded(pagination: &mut Pagination) -> Rc<RefCell<Vec<Snapshot>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);

    pagination.subscribe(move |snapshot| {
      sink.borrow_mut().push(snapshot.clone());
    });

    seen
  }

  #[test]
  fn defaults_describe_an_empty_list() {
    let pagination = Pagination::default();

    assert_eq!(pagination.page(), 1);
    assert_eq!(pagination.page_size(), 5);
    assert_eq!(pagination.num_items(), 0);
    assert_eq!(pagination.num_buttons(), 5);
    assert_eq!(pagination.num_pages(), 0);
    assert_eq!(pagination.slice(), 0..0);
    assert!(pagination.buttons().is_empty());
    assert!(!pagination.has_prev());
    assert!(!pagination.has_next());
  }

  #[test]
  fn page_count_rounds_up() {
    let pagination = pagination(47, 5);

    assert_eq!(pagination.num_pages(), 10);
    assert_eq!(pagination.slice(), 0..5);
  }

  #[test]
  fn last_slice_is_cut_at_item_count() {
    let mut pagination = pagination(47, 5);

    assert_eq!(pagination.go_end(), 10);
    assert_eq!(pagination.slice(), 45..47);
  }

  #[test]
  fn zero_page_size_has_no_pages() {
    let mut pagination = pagination(47, 0);

    assert_eq!(pagination.num_pages(), 0);
    assert_eq!(pagination.slice(), 0..0);
    assert!(pagination.buttons().is_empty());

    pagination.set_page(1);
    assert_eq!(pagination.page(), 1);
  }

  #[test]
  fn huge_page_size_does_not_overflow_slice_end() {
    let page_size = usize::MAX / 2 + 1;
    let mut pagination = pagination(usize::MAX, page_size);

    assert_eq!(pagination.num_pages(), 2);
    assert_eq!(pagination.go_end(), 2);
    assert_eq!(pagination.slice(), page_size..usize::MAX);
  }

  #[test]
  fn out_of_range_page_writes_are_ignored() {
    let mut pagination = pagination(47, 5);

    pagination.set_page(4);
    pagination.set_page(0);
    assert_eq!(pagination.page(), 4);

    pagination.set_page(11);
    assert_eq!(pagination.page(), 4);

    pagination.set_page(10);
    assert_eq!(pagination.page(), 10);
  }

  #[test]
  fn construction_clamps_initial_page() {
    let pagination = Pagination::new(Options {
      num_items: 12,
      page: 9,
      page_size: 5,
      ..Options::default()
    });

    assert_eq!(pagination.page(), 3);

    let pagination = Pagination::new(Options {
      page: 0,
      ..Options::default()
    });

    assert_eq!(pagination.page(), 1);
  }

  #[test]
  fn shrinking_items_reclaims_page() {
    let mut pagination = pagination(47, 5);
    pagination.go_end();

    pagination.set_num_items(12);

    assert_eq!(pagination.page(), 3);
    assert_eq!(pagination.slice(), 10..12);
    assert!(!pagination.has_next());
  }

  #[test]
  fn growing_page_size_reclaims_page() {
    let mut pagination = pagination(47, 5);
    pagination.set_page(8);

    pagination.set_page_size(20);

    assert_eq!(pagination.page(), 3);
    assert_eq!(pagination.slice(), 40..47);
  }

  #[test]
  fn emptying_the_list_returns_to_first_page() {
    let mut pagination = pagination(47, 5);
    pagination.set_page(6);

    pagination.set_num_items(0);

    assert_eq!(pagination.page(), 1);
    assert_eq!(pagination.slice(), 0..0);
    assert!(pagination.buttons().is_empty());
  }

  #[test]
  fn shrinking_without_overflow_keeps_page() {
    let mut pagination = pagination(47, 5);
    pagination.set_page(2);

    pagination.set_num_items(30);

    assert_eq!(pagination.page(), 2);
  }

  #[test]
  fn navigation_stops_at_the_edges() {
    let mut pagination = pagination(12, 5);

    assert_eq!(pagination.go_prev(), 1);
    assert_eq!(pagination.go_next(), 2);
    assert_eq!(pagination.go_next(), 3);
    assert!(!pagination.has_next());
    assert_eq!(pagination.go_next(), 3);
    assert_eq!(pagination.go_prev(), 2);
    assert!(pagination.has_prev());
    assert_eq!(pagination.go_start(), 1);
    assert_eq!(pagination.page(), 1);
    assert_eq!(pagination.go_end(), 3);
    assert_eq!(pagination.page(), 3);
  }

  #[test]
  fn go_end_without_pages_keeps_first_page() {
    let mut pagination = Pagination::default();

    assert_eq!(pagination.go_end(), 0);
    assert_eq!(pagination.page(), 1);
    assert_eq!(pagination.go_start(), 1);
  }

  #[test]
  fn buttons_follow_page_changes() {
    let mut pagination = pagination(47, 5);

    assert_eq!(
      pagination.buttons(),
      [
        Button::Page {
          active: true,
          page: 1
        },
        Button::Page {
          active: false,
          page: 2
        },
        Button::Page {
          active: false,
          page: 3
        },
        Button::Ellipsis { page: 6 },
        Button::Page {
          active: false,
          page: 10
        },
      ]
    );

    pagination.go_end();

    let active = pagination
      .buttons()
      .iter()
      .find(|button| button.is_active())
      .map(|button| button.page());

    assert_eq!(active, Some(10));
  }

  #[test]
  fn button_budget_changes_rebuild_the_bar() {
    let mut pagination = pagination(47, 5);

    pagination.set_num_buttons(10);
    assert_eq!(pagination.buttons().len(), 10);
    assert!(!pagination.buttons().iter().any(|button| button.is_ellipsis()));

    pagination.set_num_buttons(0);
    assert_eq!(pagination.buttons().len(), 1);
    assert!(pagination.buttons()[0].is_active());
  }

  #[test]
  fn observers_see_every_visible_change() {
    let mut pagination = pagination(47, 5);
    let seen = recorded(&mut pagination);

    pagination.go_next();
    pagination.set_num_items(3);

    let seen = seen.borrow();

    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].page, 2);
    assert_eq!(seen[0].slice, 5..10);
    assert_eq!(seen[1].page, 1);
    assert_eq!(seen[1].num_pages, 1);
    assert_eq!(seen[1].slice, 0..3);
  }

  #[test]
  fn observers_are_not_called_for_no_ops() {
    let mut pagination = pagination(12, 5);
    let seen = recorded(&mut pagination);

    pagination.go_prev();
    pagination.set_page(1);
    pagination.set_page(99);
    pagination.set_num_items(13);

    assert!(seen.borrow().is_empty());
  }

  #[test]
  fn derived_values_hold_for_every_reachable_state() {
    for num_items in 0..=23 {
      for page_size in 1..=6 {
        let mut pagination = pagination(num_items, page_size);

        loop {
          let snapshot = pagination.snapshot().clone();

          assert_eq!(snapshot.has_prev, pagination.page() > 1);
          assert_eq!(snapshot.has_next, pagination.page() < snapshot.num_pages);
          assert!(snapshot.slice.end <= num_items);
          assert!(snapshot.slice.end - snapshot.slice.start <= page_size);
          assert_eq!(
            snapshot.buttons.len(),
            snapshot.num_pages.min(pagination.num_buttons())
          );

          if !pagination.has_next() {
            break;
          }

          pagination.go_next();
        }
      }
    }
  }
}
