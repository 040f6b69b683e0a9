use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return the centered rectangle of [`consts::DISPLAY_SIZE`] within
/// `buffer_area` that everything is drawn inside of.
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a rectangle of size `size` centered within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}

/// Navigation helpers for field-less enums deriving [`enum_map::Enum`]
pub(crate) trait EnumExt: Enum {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 34), Size::new(20, 30), Rect::new(30, 2, 20, 30))]
    #[case(Rect::new(0, 0, 100, 50), Size::new(20, 30), Rect::new(40, 10, 20, 30))]
    #[case(Rect::new(0, 0, 20, 30), Size::new(20, 30), Rect::new(0, 0, 20, 30))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }
}
