//! Interactive session state
//!
//! The maintenance flag is carried here and threaded explicitly through
//! the mode controllers instead of living in process-wide state. It
//! starts off and is not persisted across restarts.

#[derive(Debug, Default, Clone, Copy)]
pub struct Session {
    maintenance: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the kiosk is closed to customers.
    pub fn maintenance(&self) -> bool {
        self.maintenance
    }

    /// Flips the flag and returns the new state.
    pub fn toggle_maintenance(&mut self) -> bool {
        self.maintenance = !self.maintenance;
        self.maintenance
    }
}
