use ratatui::layout::Position;

/// The four inputs the game session accepts from the UI layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameEvent {
    Start,
    Pause,
    Restart,
    /// A click on the board, with the click position relative to the
    /// board's top-left corner and the width of the board as drawn
    Tap {
        offset: Position,
        canvas_width: u16,
    },
}
