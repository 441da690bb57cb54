use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{PlayerId, WicketType};
use crate::rules;

pub trait ScorecardRow {
    fn player(&self) -> PlayerId;
}

/// Scorecard rows keyed by player, kept in first-appearance order.
///
/// Persisted as a plain array of rows; the lookup index is rebuilt on load.
#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard<R> {
    rows: Vec<R>,
    index: HashMap<PlayerId, usize>,
}

impl<R> Default for Scorecard<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<R: ScorecardRow> Scorecard<R> {
    pub fn from_rows(rows: Vec<R>) -> Self {
        let index = rows
            .iter()
            .enumerate()
            .map(|(position, row)| (row.player(), position))
            .collect();
        Self { rows, index }
    }

    pub fn get(&self, player: &PlayerId) -> Option<&R> {
        self.index.get(player).map(|&position| &self.rows[position])
    }

    pub fn get_mut(&mut self, player: &PlayerId) -> Option<&mut R> {
        let position = *self.index.get(player)?;
        Some(&mut self.rows[position])
    }

    pub fn contains(&self, player: &PlayerId) -> bool {
        self.index.contains_key(player)
    }

    /// Returns the player's row, appending a fresh one on first appearance.
    pub fn entry_or_insert_with(&mut self, player: PlayerId, make: impl FnOnce() -> R) -> &mut R {
        let position = match self.index.get(&player) {
            Some(&position) => position,
            None => {
                self.rows.push(make());
                let position = self.rows.len() - 1;
                self.index.insert(player, position);
                position
            }
        };
        &mut self.rows[position]
    }

    pub fn remove(&mut self, player: &PlayerId) -> Option<R> {
        let position = self.index.remove(player)?;
        let row = self.rows.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(row)
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R: Serialize> Serialize for Scorecard<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl<'de, R: Deserialize<'de> + ScorecardRow> Deserialize<'de> for Scorecard<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<R>::deserialize(deserializer)?;
        Ok(Self::from_rows(rows))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingScorecardRow {
    pub player: PlayerId,
    pub runs: i32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: Decimal,
    pub is_out: bool,
    pub how_out: Option<WicketType>,
}

impl BattingScorecardRow {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            runs: 0,
            balls: 0,
            fours: 0,
            sixes: 0,
            strike_rate: Decimal::ZERO,
            is_out: false,
            how_out: None,
        }
    }

    pub fn refresh_strike_rate(&mut self) {
        self.strike_rate = rules::strike_rate(self.runs, self.balls);
    }
}

impl ScorecardRow for BattingScorecardRow {
    fn player(&self) -> PlayerId {
        self.player
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowlingScorecardRow {
    pub player: PlayerId,
    pub balls: u32,
    pub overs: Decimal,
    pub runs: i32,
    pub wickets: u32,
    pub maidens: u32,
    pub economy: Decimal,
}

impl BowlingScorecardRow {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            balls: 0,
            overs: Decimal::ZERO,
            runs: 0,
            wickets: 0,
            maidens: 0,
            economy: Decimal::ZERO,
        }
    }

    pub fn refresh_derived(&mut self) {
        self.overs = rules::overs_from_balls(self.balls);
        self.economy = rules::economy(self.runs, self.balls);
    }
}

impl ScorecardRow for BowlingScorecardRow {
    fn player(&self) -> PlayerId {
        self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn keeps_first_appearance_order() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut card = Scorecard::default();
        card.entry_or_insert_with(b, || BattingScorecardRow::new(b));
        card.entry_or_insert_with(a, || BattingScorecardRow::new(a));
        card.entry_or_insert_with(b, || BattingScorecardRow::new(b)).runs += 3;
        card.entry_or_insert_with(c, || BattingScorecardRow::new(c));

        let order: Vec<_> = card.iter().map(|r| r.player).collect();
        assert_eq!(order, vec![b, a, c]);
        assert_eq!(card.get(&b).map(|r| r.runs), Some(3));
    }

    #[test]
    fn remove_reindexes_later_rows() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut card = Scorecard::default();
        for id in [a, b, c] {
            card.entry_or_insert_with(id, || BowlingScorecardRow::new(id));
        }

        assert!(card.remove(&a).is_some());
        assert_eq!(card.len(), 2);
        assert_eq!(card.get(&c).map(|r| r.player), Some(c));
        assert!(card.remove(&a).is_none());
    }

    #[test]
    fn serializes_as_plain_array() {
        let a = Uuid::new_v4();
        let mut card = Scorecard::default();
        card.entry_or_insert_with(a, || BattingScorecardRow::new(a)).runs = 7;

        let json = serde_json::to_value(&card).unwrap();
        assert!(json.is_array());

        let restored: Scorecard<BattingScorecardRow> = serde_json::from_value(json).unwrap();
        assert_eq!(restored, card);
    }
}
