//! Data-driven game balance
//!
//! The power-up weight table ships with the stock balance data, three zero
//! weights included; edit `tuning.json` to change the odds rather than the
//! code.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sim::PowerUpKind;

/// One row of the weight table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpWeight {
    pub kind: PowerUpKind,
    pub weight: u32,
}

/// Ordered weight table with cumulative-sum bucketing. The draw does not
/// depend on any ambient iteration order: entries are walked as listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpTable {
    pub entries: Vec<PowerUpWeight>,
}

impl PowerUpTable {
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|entry| entry.weight).sum()
    }

    /// Weighted draw: a uniform roll in `[1, total]` mapped through the
    /// running sum. An all-zero table yields nothing.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Option<PowerUpKind> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        let roll = rng.random_range(1..=total);
        let mut cumulative = 0;
        for entry in &self.entries {
            cumulative += entry.weight;
            if roll <= cumulative {
                return Some(entry.kind);
            }
        }
        None
    }
}

impl Default for PowerUpTable {
    fn default() -> Self {
        use PowerUpKind::*;
        let entries = [
            (ExtraLife, 15),
            (IncreasePaddle, 20),
            (DecreasePaddle, 15),
            (SpeedUpBall, 0),
            (SlowBall, 0),
            (PointsMultiplier, 0),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(kind, weight)| PowerUpWeight { kind, weight })
                .collect(),
        }
    }
}

/// Tunable gameplay balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Chance of a power-up drop per destroyed brick
    pub drop_chance: f32,
    pub power_ups: PowerUpTable,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            drop_chance: 0.15,
            power_ups: PowerUpTable::default(),
        }
    }
}

impl Tuning {
    /// Load from a JSON file, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
