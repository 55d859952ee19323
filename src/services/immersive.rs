#[derive(Debug, Default)]
pub struct ImmersiveMode {
    enabled: bool,
}

impl ImmersiveMode {
    pub fn new() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Records the outcome of a hide/show request. Returns whether the
    /// state actually changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.enabled != enabled;
        self.enabled = enabled;
        changed
    }
}
