use std::rc::Rc;

use log::warn;
use thiserror::Error;
use yew::functional::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalState {
    /// `last` is the example shown the last time the modal was open.
    Closed { last: usize },
    Open(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("code example {index} does not exist ({len} available)")]
    OutOfRange { index: usize, len: usize },
}

/// Tracks which code example the modal shows and whether it is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExampleSelector {
    state: ModalState,
    len: usize,
}

impl ExampleSelector {
    pub fn new(len: usize) -> Self {
        Self {
            state: ModalState::Closed { last: 0 },
            len,
        }
    }

    /// Opens the modal on `index`. Out-of-range indices leave the state untouched.
    pub fn select(&mut self, index: usize) -> Result<(), SelectError> {
        if index >= self.len {
            return Err(SelectError::OutOfRange { index, len: self.len });
        }
        self.state = ModalState::Open(index);
        Ok(())
    }

    pub fn close(&mut self) {
        if let ModalState::Open(index) = self.state {
            self.state = ModalState::Closed { last: index };
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn selected_index(&self) -> usize {
        match self.state {
            ModalState::Closed { last } => last,
            ModalState::Open(index) => index,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }
}

pub enum ModalAction {
    Select(usize),
    Close,
}

impl Reducible for ExampleSelector {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            ModalAction::Select(index) => {
                if let Err(e) = next.select(index) {
                    warn!("Ignoring selection: {}", e);
                    return self;
                }
            }
            ModalAction::Close => next.close(),
        }

        if next.state() == self.state() {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed_on_first_example() {
        let selector = ExampleSelector::new(4);
        assert_eq!(selector.state(), ModalState::Closed { last: 0 });
        assert_eq!(selector.selected_index(), 0);
        assert!(!selector.is_open());
    }

    #[test]
    fn test_select_opens_every_valid_index() {
        for i in 0..4 {
            let mut selector = ExampleSelector::new(4);
            assert_eq!(selector.select(i), Ok(()));
            assert_eq!(selector.state(), ModalState::Open(i));
        }
    }

    #[test]
    fn test_select_while_open_switches_example() {
        let mut selector = ExampleSelector::new(4);
        selector.select(1).unwrap();
        selector.select(3).unwrap();
        assert_eq!(selector.state(), ModalState::Open(3));
    }

    #[test]
    fn test_select_twice_is_idempotent() {
        let mut once = ExampleSelector::new(4);
        once.select(2).unwrap();

        let mut twice = ExampleSelector::new(4);
        twice.select(2).unwrap();
        twice.select(2).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_close_keeps_last_index() {
        let mut selector = ExampleSelector::new(4);
        selector.select(2).unwrap();
        selector.close();
        assert!(!selector.is_open());
        assert_eq!(selector.selected_index(), 2);

        selector.select(0).unwrap();
        assert_eq!(selector.state(), ModalState::Open(0));
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut selector = ExampleSelector::new(4);
        selector.close();
        assert_eq!(selector.state(), ModalState::Closed { last: 0 });
    }

    #[test]
    fn test_homepage_scenario() {
        let mut selector = ExampleSelector::new(4);
        assert_eq!((selector.selected_index(), selector.is_open()), (0, false));
        selector.select(2).unwrap();
        assert_eq!((selector.selected_index(), selector.is_open()), (2, true));
        selector.close();
        assert_eq!((selector.selected_index(), selector.is_open()), (2, false));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut selector = ExampleSelector::new(4);
        selector.select(1).unwrap();
        assert_eq!(selector.select(4), Err(SelectError::OutOfRange { index: 4, len: 4 }));
        assert_eq!(selector.state(), ModalState::Open(1));
    }

    #[test]
    fn test_empty_selector_never_opens() {
        let mut selector = ExampleSelector::new(0);
        assert!(selector.select(0).is_err());
        assert!(!selector.is_open());
    }

    #[test]
    fn test_reducer_applies_actions() {
        let state = Rc::new(ExampleSelector::new(4));
        let state = state.reduce(ModalAction::Select(2));
        assert_eq!(state.state(), ModalState::Open(2));
        let state = state.reduce(ModalAction::Close);
        assert_eq!(state.state(), ModalState::Closed { last: 2 });
    }

    #[test]
    fn test_reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(ExampleSelector::new(4));
        let rejected = state.clone().reduce(ModalAction::Select(9));
        assert!(Rc::ptr_eq(&state, &rejected));

        let closed = state.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&state, &closed));
    }
}
