use super::*;

pub(crate) fn command_for(key: KeyEvent) -> Command {
  match key.code {
    KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
    KeyCode::Char('?') => Command::ShowHelp,
    KeyCode::Left | KeyCode::Char('h' | 'p') => Command::GoPrev,
    KeyCode::Right | KeyCode::Char('l' | 'n') => Command::GoNext,
    KeyCode::Home | KeyCode::Char('g') => Command::GoStart,
    KeyCode::End | KeyCode::Char('G') => Command::GoEnd,
    KeyCode::Char('+' | '=') => Command::LargerPages,
    KeyCode::Char('-') => Command::SmallerPages,
    KeyCode::Char(']') => Command::MoreButtons,
    KeyCode::Char('[') => Command::FewerButtons,
    KeyCode::Char('r' | 'R') => Command::Reload,
    KeyCode::Char(digit @ '1'..='9') => digit
      .to_digit(10)
      .map_or(Command::None, |n| Command::ActivateButton(n as usize)),
    _ => Command::None,
  }
}
