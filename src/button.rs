/// One slot in the page-navigation bar.
///
/// An ellipsis stands for a collapsed run of hidden pages. Its `page` is
/// where a click should jump to, not a number that gets rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Button {
  Ellipsis { page: usize },
  Page { active: bool, page: usize },
}

impl Button {
  pub(crate) fn is_active(self) -> bool {
    matches!(self, Button::Page { active: true, .. })
  }

  pub(crate) fn is_ellipsis(self) -> bool {
    matches!(self, Button::Ellipsis { .. })
  }

  pub(crate) fn label(self) -> String {
    match self {
      Button::Ellipsis { .. } => "…".into(),
      Button::Page { active: true, page } => format!("[{page}]"),
      Button::Page { active: false, page } => page.to_string(),
    }
  }

  pub(crate) fn page(self) -> usize {
    match self {
      Button::Ellipsis { page } | Button::Page { page, .. } => page,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ellipsis_is_never_active() {
    let button = Button::Ellipsis { page: 7 };

    assert!(button.is_ellipsis());
    assert!(!button.is_active());
    assert_eq!(button.page(), 7);
  }

  #[test]
  fn labels_mark_active_page_and_hide_jump_target() {
    assert_eq!(Button::Page { active: true, page: 3 }.label(), "[3]");
    assert_eq!(Button::Page { active: false, page: 4 }.label(), "4");
    assert_eq!(Button::Ellipsis { page: 12 }.label(), "…");
  }
}
