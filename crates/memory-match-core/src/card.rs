use serde::{Deserialize, Serialize};

/// Unique identifier for a card within a single deck.
pub type CardId = u32;

/// The face symbol printed on a card. Two cards in a deck share each type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Diamond,
    Heart,
    Club,
    Spade,
    Star,
    Moon,
    Sun,
    Cloud,
    Tree,
    Flower,
    Key,
    Crown,
}

impl CardType {
    /// Every card type a deck can draw from.
    pub const CATALOG: &[CardType] = &[
        CardType::Diamond,
        CardType::Heart,
        CardType::Club,
        CardType::Spade,
        CardType::Star,
        CardType::Moon,
        CardType::Sun,
        CardType::Cloud,
        CardType::Tree,
        CardType::Flower,
        CardType::Key,
        CardType::Crown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Diamond => "diamond",
            CardType::Heart => "heart",
            CardType::Club => "club",
            CardType::Spade => "spade",
            CardType::Star => "star",
            CardType::Moon => "moon",
            CardType::Sun => "sun",
            CardType::Cloud => "cloud",
            CardType::Tree => "tree",
            CardType::Flower => "flower",
            CardType::Key => "key",
            CardType::Crown => "crown",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single face-down card as handed to the client.
///
/// `flipped` and `matched` are client-side game state. The server always
/// issues them as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub flipped: bool,
    pub matched: bool,
}

impl Card {
    /// Build the two cards of the pair at selection position `ordinal`.
    /// Ids are `2 * ordinal` and `2 * ordinal + 1`.
    pub fn pair(ordinal: u32, card_type: CardType) -> [Card; 2] {
        let first = ordinal * 2;
        [first, first + 1].map(|id| Card {
            id,
            card_type,
            flipped: false,
            matched: false,
        })
    }
}
