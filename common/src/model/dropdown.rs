/// Open/closed flag of the options dropdown.
///
/// Every transition returns whether the flag actually changed, which the
/// component uses as its re-render decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
}

impl DropdownState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        true
    }

    /// Handles a pointer-down anywhere in the document.
    ///
    /// Presses inside the dropdown region are left to the region's own click
    /// handlers. Presses outside close it.
    pub fn pointer_down(&mut self, inside: bool) -> bool {
        if inside {
            return false;
        }
        self.close()
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggles() {
        let mut dropdown = DropdownState::default();
        assert!(!dropdown.is_open());
        dropdown.toggle();
        assert!(dropdown.is_open());
        dropdown.toggle();
        assert!(!dropdown.is_open());
    }

    #[test]
    fn outside_press_closes_open_dropdown() {
        let mut dropdown = DropdownState::default();
        dropdown.toggle();
        assert!(dropdown.pointer_down(false));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn outside_press_on_closed_dropdown_is_a_no_op() {
        let mut dropdown = DropdownState::default();
        assert!(!dropdown.pointer_down(false));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn inside_press_keeps_dropdown_open() {
        let mut dropdown = DropdownState::default();
        dropdown.toggle();
        assert!(!dropdown.pointer_down(true));
        assert!(dropdown.is_open());
    }
}
