/// Open/closed state of the collapsed mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MenuState::Closed;
        menu.close();
        assert_eq!(menu, MenuState::Closed);

        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        menu.close();
        assert_eq!(menu, MenuState::Closed);
    }

    proptest! {
        #[test]
        fn prop_double_toggle_restores(start_open in any::<bool>()) {
            let start = if start_open { MenuState::Open } else { MenuState::Closed };
            let mut menu = start;
            menu.toggle();
            prop_assert_ne!(menu, start);
            menu.toggle();
            prop_assert_eq!(menu, start);
        }
    }
}
