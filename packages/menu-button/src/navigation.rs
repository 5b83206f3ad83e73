//! Focus traversal over menu items, skipping disabled ones and wrapping at
//! either end.

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Down,
    Up,
}

impl Direction {
    fn step(self, from: usize, offset: usize, len: usize) -> usize {
        match self {
            Self::Down => (from + offset) % len,
            Self::Up => (from + len - offset % len) % len,
        }
    }
}

/// The next enabled item after `from`, going round at most once.
///
/// `from` itself is the last candidate, so a lone enabled item keeps focus.
pub fn next_enabled(
    len: usize,
    from: usize,
    direction: Direction,
    is_enabled: impl Fn(usize) -> bool,
) -> Option<usize> {
    (1..=len)
        .map(|offset| direction.step(from, offset, len))
        .find(|&index| is_enabled(index))
}

/// The first enabled item, from the top for [`Direction::Down`] and from the
/// bottom for [`Direction::Up`].
pub fn first_enabled(
    len: usize,
    direction: Direction,
    is_enabled: impl Fn(usize) -> bool,
) -> Option<usize> {
    match direction {
        Direction::Down => (0..len).find(|&index| is_enabled(index)),
        Direction::Up => (0..len).rev().find(|&index| is_enabled(index)),
    }
}

#[cfg(test)]
mod tests {
    use super::{first_enabled, next_enabled, Direction};

    fn enabled(flags: &[bool]) -> impl Fn(usize) -> bool + '_ {
        move |index| flags[index]
    }

    #[test]
    fn wraps() {
        let all = [true; 3];
        assert_eq!(next_enabled(3, 0, Direction::Down, enabled(&all)), Some(1));
        assert_eq!(next_enabled(3, 2, Direction::Down, enabled(&all)), Some(0));
        assert_eq!(next_enabled(3, 0, Direction::Up, enabled(&all)), Some(2));
        assert_eq!(next_enabled(3, 1, Direction::Up, enabled(&all)), Some(0));
    }

    #[test]
    fn skips_disabled() {
        let flags = [true, false, true];
        assert_eq!(next_enabled(3, 0, Direction::Down, enabled(&flags)), Some(2));
        assert_eq!(next_enabled(3, 2, Direction::Down, enabled(&flags)), Some(0));
        assert_eq!(next_enabled(3, 2, Direction::Up, enabled(&flags)), Some(0));
        assert_eq!(next_enabled(3, 0, Direction::Up, enabled(&flags)), Some(2));
    }

    #[test]
    fn skips_disabled_across_the_wrap() {
        let flags = [false, true, true, false];
        assert_eq!(next_enabled(4, 2, Direction::Down, enabled(&flags)), Some(1));
        assert_eq!(next_enabled(4, 1, Direction::Up, enabled(&flags)), Some(2));
    }

    #[test]
    fn lone_item_keeps_focus() {
        let flags = [false, true, false];
        assert_eq!(next_enabled(3, 1, Direction::Down, enabled(&flags)), Some(1));
        assert_eq!(next_enabled(3, 1, Direction::Up, enabled(&flags)), Some(1));
    }

    #[test]
    fn exhausted() {
        let flags = [false; 3];
        assert_eq!(next_enabled(3, 0, Direction::Down, enabled(&flags)), None);
        assert_eq!(first_enabled(3, Direction::Down, enabled(&flags)), None);
        assert_eq!(next_enabled(0, 0, Direction::Up, |_| true), None);
    }

    #[test]
    fn first() {
        let flags = [false, true, true, false];
        assert_eq!(first_enabled(4, Direction::Down, enabled(&flags)), Some(1));
        assert_eq!(first_enabled(4, Direction::Up, enabled(&flags)), Some(2));
    }
}
