//! Navbar chrome state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Navigation menu state: whether the burger menu is expanded.
///
/// The burger control and its target menu both bind their `is-active`
/// class to this flag, so the two can never fall out of step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Burger menu expansion.
    pub menu_open: bool,
}

impl NavState {
    /// Flip the menu open/closed.
    pub fn toggle(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
