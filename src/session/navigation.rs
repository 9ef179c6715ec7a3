/// Current question index, kept within `[0, total)`.
///
/// With zero questions the index stays at 0 and every move is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    total: usize,
}

impl Navigator {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.total
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        if !self.is_first() {
            self.current -= 1;
        }
    }

    /// Returns false, leaving the index alone, when `index` is out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.total {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn rewind(&mut self) {
        self.current = 0;
    }

    /// How far through the module the current question is, 1-based.
    pub fn progress_percent(&self) -> f64 {
        if self.total > 0 {
            ((self.current + 1) as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_hold_under_any_walk() {
        let mut nav = Navigator::new(3);
        let moves = [false, false, true, true, true, true, false, true, false, false, false];
        for forward in moves {
            if forward {
                nav.next();
            } else {
                nav.previous();
            }
            assert!(nav.current() < 3);
        }
    }

    #[test]
    fn test_next_stops_at_last() {
        let mut nav = Navigator::new(2);
        nav.next();
        assert!(nav.is_last());
        nav.next();
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_jump_to() {
        let mut nav = Navigator::new(4);
        assert!(nav.jump_to(3));
        assert_eq!(nav.current(), 3);
        assert!(!nav.jump_to(4));
        assert_eq!(nav.current(), 3);
        nav.rewind();
        assert!(nav.is_first());
    }

    #[test]
    fn test_empty_module() {
        let mut nav = Navigator::new(0);
        nav.next();
        nav.previous();
        assert_eq!(nav.current(), 0);
        assert!(!nav.jump_to(0));
        assert_eq!(nav.progress_percent(), 0.0);
    }

    #[test]
    fn test_progress_percent() {
        let mut nav = Navigator::new(4);
        assert_eq!(nav.progress_percent(), 25.0);
        nav.jump_to(3);
        assert_eq!(nav.progress_percent(), 100.0);
    }
}
