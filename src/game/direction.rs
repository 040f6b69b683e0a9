use super::state::Coordinate;

/// The four headings the snake can travel in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the cell one step from `pos` in this direction, or `None` if
    /// the step would leave the coordinate space entirely.  Whether the
    /// resulting cell is legal to occupy is the grid's concern, not ours.
    pub(crate) fn step(self, pos: Coordinate) -> Option<Coordinate> {
        let Coordinate { mut x, mut y } = pos;
        match self {
            Direction::Up => y = y.checked_sub(1)?,
            Direction::Down => y = y.checked_add(1)?,
            Direction::Left => x = x.checked_sub(1)?,
            Direction::Right => x = x.checked_add(1)?,
        }
        Some(Coordinate { x, y })
    }

    /// Is this direction along the vertical axis?
    pub(crate) fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    #[cfg(test)]
    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Coordinate::new(2, 7), Some(Coordinate::new(2, 6)))]
    #[case(Direction::Down, Coordinate::new(2, 7), Some(Coordinate::new(2, 8)))]
    #[case(Direction::Left, Coordinate::new(2, 7), Some(Coordinate::new(1, 7)))]
    #[case(Direction::Right, Coordinate::new(2, 7), Some(Coordinate::new(3, 7)))]
    #[case(Direction::Left, Coordinate::new(1, 5), Some(Coordinate::new(0, 5)))]
    #[case(Direction::Left, Coordinate::new(0, 5), None)]
    #[case(Direction::Up, Coordinate::new(5, 0), None)]
    fn test_step(
        #[case] d: Direction,
        #[case] pos: Coordinate,
        #[case] stepped: Option<Coordinate>,
    ) {
        assert_eq!(d.step(pos), stepped);
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down)]
    #[case(Direction::Down, Direction::Up)]
    #[case(Direction::Left, Direction::Right)]
    #[case(Direction::Right, Direction::Left)]
    fn test_reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
        assert_eq!(d.is_vertical(), r.is_vertical());
    }
}
