/// Outcome counters for one swap or transfer session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub attempted: u32,
    pub confirmed: u32,
    pub unconfirmed: u32,
    pub failed: u32,
}

impl SessionReport {
    pub fn record_confirmed(&mut self) {
        self.attempted += 1;
        self.confirmed += 1;
    }

    pub fn record_unconfirmed(&mut self) {
        self.attempted += 1;
        self.unconfirmed += 1;
    }

    pub fn record_failed(&mut self) {
        self.attempted += 1;
        self.failed += 1;
    }

    pub fn merge(&mut self, other: SessionReport) {
        self.attempted += other.attempted;
        self.confirmed += other.confirmed;
        self.unconfirmed += other.unconfirmed;
        self.failed += other.failed;
    }
}
