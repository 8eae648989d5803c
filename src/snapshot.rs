use super::*;

/// Everything a renderer needs, derived from the pagination inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Snapshot {
  pub(crate) buttons: Vec<Button>,
  pub(crate) has_next: bool,
  pub(crate) has_prev: bool,
  pub(crate) num_pages: usize,
  pub(crate) page: usize,
  pub(crate) slice: Range<usize>,
}

impl Snapshot {
  pub(crate) fn status(&self, num_items: usize) -> String {
    if self.num_pages == 0 {
      return "no items".into();
    }

    format!(
      "page {}/{} • items {}-{} of {num_items}",
      self.page,
      self.num_pages,
      self.slice.start + 1,
      self.slice.end,
    )
  }
}
