use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  LoadItems { path: PathBuf, request_id: u64 },
}
