use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Enter,
    Space,
    Esc,
    Home,
    End,
    Next,
    Prev,
    P,
    Q,
    R,
    S,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Down) => Some(Command::Down),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Space),
            (_, KeyCode::Esc) => Some(Command::Esc),
            (_, KeyCode::Home) => Some(Command::Home),
            (_, KeyCode::End) => Some(Command::End),
            (_, KeyCode::Tab) => Some(Command::Next),
            (_, KeyCode::BackTab) => Some(Command::Prev),
            (KeyModifiers::NONE, KeyCode::Char('p')) => Some(Command::P),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Q),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::R),
            (KeyModifiers::NONE, KeyCode::Char('s')) => Some(Command::S),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Command::Quit))]
    #[case(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE), Some(Command::S))]
    #[case(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE), Some(Command::P))]
    #[case(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE), Some(Command::R))]
    #[case(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), Some(Command::Esc))]
    #[case(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), None)]
    #[case(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL), None)]
    fn test_from_key_event(#[case] ev: KeyEvent, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key_event(ev), cmd);
    }
}
