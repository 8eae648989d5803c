use super::*;

/// Initial pagination inputs. Missing fields take their defaults and
/// unrecognized fields are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Options {
  pub(crate) num_buttons: usize,
  pub(crate) num_items: usize,
  pub(crate) page: usize,
  pub(crate) page_size: usize,
}

impl Default for Options {
  fn default() -> Self {
    Self {
      num_buttons: 5,
      num_items: 0,
      page: 1,
      page_size: 5,
    }
  }
}
