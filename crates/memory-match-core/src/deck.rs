use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardType};
use crate::difficulty::Difficulty;

/// A freshly dealt deck plus the time the player has to clear it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub cards: Vec<Card>,
    #[serde(rename = "gameTime")]
    pub game_time: u32,
}

/// Deal a shuffled deck for `difficulty`.
///
/// Draws `pairs` distinct types from [`CardType::CATALOG`] without
/// replacement, emits two cards per type with ids `2i`/`2i+1` in draw order,
/// then shuffles the whole list.
pub fn generate_deck<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Deck {
    let settings = difficulty.settings();

    let mut cards: Vec<Card> = CardType::CATALOG
        .choose_multiple(rng, settings.pairs as usize)
        .zip(0u32..)
        .flat_map(|(&card_type, ordinal)| Card::pair(ordinal, card_type))
        .collect();

    cards.shuffle(rng);

    Deck {
        cards,
        game_time: settings.time_secs,
    }
}
