//! Playing cards and their position in a fresh 52-card deck
//!
//! The deck is ordered by suit (clubs, diamonds, hearts, spades) and, within a
//! suit, by rank from ace to king:
//!
//! ```text
//! A♣ 2♣ 3♣ ... 10♣ J♣ Q♣ K♣  A♦ ... K♦  A♥ ... K♥  A♠ ... K♠
//! ```

use crate::error::{Result, StringTaskError};
use std::fmt;
use std::str::FromStr;

/// Number of cards in a deck
pub const DECK_SIZE: usize = 52;

const RANKS_PER_SUIT: usize = 13;

/// Card suit, in deck order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// ♣
    Clubs,
    /// ♦
    Diamonds,
    /// ♥
    Hearts,
    /// ♠
    Spades,
}

impl Suit {
    /// All suits in deck order
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// The suit symbol
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Look a suit up by its symbol
    pub fn from_symbol(symbol: char) -> Option<Suit> {
        Suit::ALL.into_iter().find(|suit| suit.symbol() == symbol)
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// Card rank, in deck order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// A
    Ace,
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// 10
    Ten,
    /// J
    Jack,
    /// Q
    Queen,
    /// K
    King,
}

impl Rank {
    /// All ranks in deck order
    pub const ALL: [Rank; RANKS_PER_SUIT] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// The rank token as printed on the card
    pub fn token(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Look a rank up by its token
    pub fn from_token(token: &str) -> Option<Rank> {
        Rank::ALL.into_iter().find(|rank| rank.token() == token)
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// A single playing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Card rank
    pub rank: Rank,
    /// Card suit
    pub suit: Suit,
}

impl Card {
    /// Create a card
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Zero-based position of this card in a fresh deck
    pub fn index(&self) -> usize {
        self.suit.ordinal() * RANKS_PER_SUIT + self.rank.ordinal()
    }

    /// The card at `index` in a fresh deck, or `None` past the last card
    pub fn from_index(index: usize) -> Option<Card> {
        let suit = *Suit::ALL.get(index / RANKS_PER_SUIT)?;
        let rank = Rank::ALL[index % RANKS_PER_SUIT];
        Some(Card::new(rank, suit))
    }
}

impl FromStr for Card {
    type Err = StringTaskError;

    fn from_str(token: &str) -> Result<Self> {
        let invalid = || StringTaskError::InvalidCard(token.to_string());

        let symbol = token.chars().next_back().ok_or_else(invalid)?;
        let suit = Suit::from_symbol(symbol).ok_or_else(invalid)?;
        let rank_token = &token[..token.len() - symbol.len_utf8()];
        let rank = Rank::from_token(rank_token).ok_or_else(invalid)?;

        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// All 52 cards in deck order
pub fn deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
        .collect()
}

/// Returns the zero-based deck position of a card token such as `"10♦"`
///
/// ```
/// use string_tasks::card_index;
/// assert_eq!(card_index("A♣").unwrap(), 0);
/// assert_eq!(card_index("K♠").unwrap(), 51);
/// ```
pub fn card_index(token: &str) -> Result<usize> {
    token.parse::<Card>().map(|card| card.index())
}
