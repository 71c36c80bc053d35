use pit_core::Arbitrary;

/// A blackjack card reduced to its rank.
///
/// The 13 ranks are bijectively mapped to `0..13` in a single byte
/// (`2 ↔ 0`, ..., `K ↔ 11`, `A ↔ 12`). Suits carry no information in
/// blackjack, so they are never represented.
///
/// # Parsing
///
/// Cards parse from their table notation: `"2"` through `"10"`, `"J"`,
/// `"Q"`, `"K"`, `"A"` (case-insensitive).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Number of distinct ranks.
    pub const COUNT: u8 = 13;
    /// Pip value before any ace adjustment: faces count 10, aces 11.
    pub fn value(&self) -> u8 {
        match self.0 {
            0..=8 => self.0 + 2,
            9..=11 => 10,
            _ => 11,
        }
    }
    /// Aces are the only rank whose value is revisited during valuation.
    pub fn is_ace(&self) -> bool {
        self.0 == 12
    }
}

/// u8 isomorphism
/// each card is mapped to its rank index 0..13
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < Self::COUNT);
        Self(n)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            0..=8 => write!(f, "{}", self.0 + 2),
            9 => write!(f, "J"),
            10 => write!(f, "Q"),
            11 => write!(f, "K"),
            _ => write!(f, "A"),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "J" => Ok(Self(9)),
            "Q" => Ok(Self(10)),
            "K" => Ok(Self(11)),
            "A" => Ok(Self(12)),
            n => n
                .parse::<u8>()
                .ok()
                .filter(|n| (2..=10).contains(n))
                .map(|n| Self(n - 2))
                .ok_or_else(|| format!("not a rank: {}", s)),
        }
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..Self::COUNT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..Card::COUNT {
            assert_eq!(n, u8::from(Card::from(n)));
        }
    }

    #[test]
    fn bijective_str() {
        for n in 0..Card::COUNT {
            let card = Card::from(n);
            assert_eq!(card, Card::try_from(card.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn pip_values() {
        assert_eq!(Card::try_from("2").unwrap().value(), 2);
        assert_eq!(Card::try_from("10").unwrap().value(), 10);
        assert_eq!(Card::try_from("J").unwrap().value(), 10);
        assert_eq!(Card::try_from("Q").unwrap().value(), 10);
        assert_eq!(Card::try_from("K").unwrap().value(), 10);
        assert_eq!(Card::try_from("A").unwrap().value(), 11);
    }

    #[test]
    fn only_aces_flex() {
        assert!(Card::try_from("A").unwrap().is_ace());
        assert!(!Card::try_from("K").unwrap().is_ace());
    }

    #[test]
    fn rejects_junk() {
        assert!(Card::try_from("1").is_err());
        assert!(Card::try_from("11").is_err());
        assert!(Card::try_from("joker").is_err());
    }
}
