pub mod decks;
pub mod play;
pub mod quiz;
