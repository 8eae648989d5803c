#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  /// Activates the n-th visible button, counting from 1.
  ActivateButton(usize),
  FewerButtons,
  GoEnd,
  GoNext,
  GoPrev,
  GoStart,
  HideHelp,
  LargerPages,
  MoreButtons,
  None,
  Quit,
  Reload,
  ShowHelp,
  SmallerPages,
}
