use super::*;

pub(crate) enum Event {
  ItemsLoaded {
    request_id: u64,
    result: Result<Vec<String>>,
  },
  PaginationChanged(Snapshot),
}
