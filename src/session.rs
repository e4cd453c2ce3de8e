/// Win/loss tally for the lifetime of the process. Never written to disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    wins: u32,
    losses: u32,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub fn losses(&self) -> u32 {
        self.losses
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }
}
