use pit_core::*;
use pit_gameplay::Action;
use pit_gameplay::Phase;

/// Errors from parsing raw input into commands.
#[derive(Debug, Clone)]
pub enum ProtocolError {
    UnknownCommand(String),
    InvalidAmount(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(s) => write!(f, "unknown command: {}", s),
            Self::InvalidAmount(s) => write!(f, "invalid bet amount: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Rejections reported back to the offending player.
///
/// Every variant resolves at the point of the offending action with a
/// user-visible message and no state change; none of these ever abort a
/// round in progress.
#[derive(Debug, Clone)]
pub enum TableError {
    SeatedElsewhere,
    AlreadySeated,
    TableFull,
    NotSeated,
    NoTable,
    BettingClosed,
    BetOutOfRange(Chips),
    InsufficientChips,
    NotYourTurn,
    HandInProgress,
    WrongPhase(Phase),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SeatedElsewhere => write!(f, "You're already in a table. Use leave first."),
            Self::AlreadySeated => write!(f, "You're already at this table!"),
            Self::TableFull => write!(f, "Table is full ({}/{} players)", SEATS, SEATS),
            Self::NotSeated => write!(f, "You're not in this table"),
            Self::NoTable => write!(f, "No table in this channel"),
            Self::BettingClosed => write!(f, "Betting not active"),
            Self::BetOutOfRange(_) => {
                write!(f, "Bet must be between {}-{} chips", MIN_BET, MAX_BET)
            }
            Self::InsufficientChips => write!(f, "Insufficient chips"),
            Self::NotYourTurn => write!(f, "It's not your turn"),
            Self::HandInProgress => write!(f, "Wait for the hand to finish"),
            Self::WrongPhase(phase) => write!(f, "Not available while {}", phase),
        }
    }
}

impl std::error::Error for TableError {}

/// A recognized player command token.
///
/// The platform layer resolves identity and channel; the core only sees
/// `(player, command)` pairs per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Join,
    Leave,
    Bet(Chips),
    Play(Action),
    Daily,
    Balance,
}

/// Parses raw player input into commands.
/// Centralizes the protocol layer between the platform's text surface and
/// internal commands; a leading `!` prefix is tolerated.
pub struct Protocol;

impl Protocol {
    pub fn decode(s: &str) -> Result<Command, ProtocolError> {
        let s = s.trim().trim_start_matches('!');
        let mut parts = s.split_whitespace();
        let head = parts.next().unwrap_or_default().to_lowercase();
        match head.as_str() {
            "join" => Ok(Command::Join),
            "leave" => Ok(Command::Leave),
            "daily" => Ok(Command::Daily),
            "balance" => Ok(Command::Balance),
            "bet" => parts
                .next()
                .and_then(|n| n.parse::<Chips>().ok())
                .map(Command::Bet)
                .ok_or_else(|| ProtocolError::InvalidAmount(s.to_string())),
            _ => Action::try_from(head.as_str())
                .map(Command::Play)
                .map_err(|_| ProtocolError::UnknownCommand(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_simple_commands() {
        assert_eq!(Protocol::decode("join").unwrap(), Command::Join);
        assert_eq!(Protocol::decode("leave").unwrap(), Command::Leave);
        assert_eq!(Protocol::decode("daily").unwrap(), Command::Daily);
        assert_eq!(Protocol::decode("balance").unwrap(), Command::Balance);
    }

    #[test]
    fn decode_turn_actions() {
        assert_eq!(Protocol::decode("hit").unwrap(), Command::Play(Action::Hit));
        assert_eq!(
            Protocol::decode("stand").unwrap(),
            Command::Play(Action::Stand)
        );
        assert_eq!(
            Protocol::decode("double").unwrap(),
            Command::Play(Action::Double)
        );
    }

    #[test]
    fn decode_bet_with_amount() {
        assert_eq!(Protocol::decode("bet 100").unwrap(), Command::Bet(100));
    }

    #[test]
    fn decode_tolerates_prefix_and_case() {
        assert_eq!(Protocol::decode("!JOIN").unwrap(), Command::Join);
        assert_eq!(Protocol::decode("!bet 250").unwrap(), Command::Bet(250));
    }

    #[test]
    fn decode_rejects_missing_amount() {
        assert!(Protocol::decode("bet").is_err());
        assert!(Protocol::decode("bet many").is_err());
    }

    #[test]
    fn decode_rejects_unknown() {
        assert!(Protocol::decode("surrender").is_err());
        assert!(Protocol::decode("").is_err());
    }
}
