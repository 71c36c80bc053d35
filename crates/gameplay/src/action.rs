/// A player's decision on their turn.
///
/// Doubling is only legal while the remaining balance covers the current
/// bet; that check belongs to the table, which sees the ledger. Timing out
/// is not an action: the turn ends as an implicit stand.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Action {
    Hit,
    Stand,
    Double,
}

impl Action {
    /// True if this action draws at least one card.
    pub fn draws(&self) -> bool {
        matches!(self, Self::Hit | Self::Double)
    }
    /// True if this action always ends the turn.
    pub fn terminal(&self) -> bool {
        matches!(self, Self::Stand | Self::Double)
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for Action {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "hit" => Ok(Self::Hit),
            "stand" => Ok(Self::Stand),
            "double" => Ok(Self::Double),
            _ => Err("invalid action type"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        for action in [Action::Hit, Action::Stand, Action::Double] {
            assert_eq!(action, Action::try_from(action.label()).unwrap());
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Action::try_from("HIT").unwrap(), Action::Hit);
        assert_eq!(Action::try_from(" Stand ").unwrap(), Action::Stand);
    }

    #[test]
    fn parse_rejects_junk() {
        assert!(Action::try_from("split").is_err());
        assert!(Action::try_from("").is_err());
    }

    #[test]
    fn double_ends_the_turn() {
        assert!(Action::Double.terminal());
        assert!(Action::Stand.terminal());
        assert!(!Action::Hit.terminal());
    }
}
