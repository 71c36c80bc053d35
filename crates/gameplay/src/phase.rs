/// Lifecycle phase of one table.
///
/// `Waiting` accepts the first join; `Betting` collects bets under the
/// window timer; `Playing` covers dealing and turns; `Settling` covers
/// payouts. After settlement the table re-enters `Betting` directly, or
/// dies if no players remain.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Phase {
    Waiting,
    Betting,
    Playing,
    Settling,
}

impl Phase {
    /// True while a round is in flight and seats must not churn.
    pub fn in_round(&self) -> bool {
        matches!(self, Self::Playing | Self::Settling)
    }
    pub fn is_betting(&self) -> bool {
        matches!(self, Self::Betting)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::Betting => write!(f, "betting"),
            Self::Playing => write!(f, "playing"),
            Self::Settling => write!(f, "settling"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_phases() {
        assert!(Phase::Playing.in_round());
        assert!(Phase::Settling.in_round());
        assert!(!Phase::Waiting.in_round());
        assert!(!Phase::Betting.in_round());
    }
}
