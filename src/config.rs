//! Search settings shared by the evaluator and the search engine

use anyhow::{anyhow, Error, Result};

use std::str::FromStr;

use crate::{board::Player, Score};

/// Heuristic values of the patterns found in each alignment window
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Weights {
    /// Per own tile in the center column
    pub center: Score,
    /// A completed alignment
    pub four: Score,
    /// Three own tiles and an empty cell
    pub three: Score,
    /// Two own tiles and two empty cells
    pub two: Score,
    /// Three opponent tiles and an empty cell, usually negative
    pub opponent_three: Score,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            center: 3,
            four: 100,
            three: 5,
            two: 2,
            opponent_three: -4,
        }
    }
}

/// Settings for a game, built once and lent to the engine for each search
#[derive(Copy, Clone, Debug)]
pub struct Config {
    pub weights: Weights,
    /// The side the search maximizes for
    pub maximizer: Player,
}

impl Config {
    pub fn new() -> Self {
        Self {
            weights: Weights::default(),
            maximizer: Player::Two,
        }
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_maximizer(mut self, maximizer: Player) -> Self {
        self.maximizer = maximizer;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// AI strength, as a fixed search depth
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "e" | "easy" => Ok(Difficulty::Easy),
            "2" | "m" | "medium" => Ok(Difficulty::Medium),
            "3" | "h" | "hard" => Ok(Difficulty::Hard),
            other => Err(anyhow!("unknown difficulty '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_maximizes_player_two() {
        let config = Config::default();
        assert_eq!(config.maximizer, Player::Two);
        assert_eq!(config.weights, Weights::default());
    }

    #[test]
    fn builders_replace_fields() {
        let weights = Weights {
            center: 0,
            ..Weights::default()
        };
        let config = Config::new()
            .with_maximizer(Player::One)
            .with_weights(weights);
        assert_eq!(config.maximizer, Player::One);
        assert_eq!(config.weights.center, 0);
        assert_eq!(config.weights.three, 5);
    }

    #[test]
    fn difficulty_parsing() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" M\n".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("3".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn harder_difficulties_search_deeper() {
        assert!(Difficulty::Easy.depth() < Difficulty::Medium.depth());
        assert!(Difficulty::Medium.depth() < Difficulty::Hard.depth());
    }
}
