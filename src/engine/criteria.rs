//! Filter criteria produced by the workspace controls.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Which transactions to keep, seen from the subject.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    All,
    Outgoing,
    Incoming,
}

impl Direction {
    /// Whether an edge flowing in the given direction passes this filter.
    pub fn admits(self, is_outgoing: bool) -> bool {
        match self {
            Direction::All => true,
            Direction::Outgoing => is_outgoing,
            Direction::Incoming => !is_outgoing,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::All => "all",
            Direction::Outgoing => "outgoing",
            Direction::Incoming => "incoming",
        }
    }
}

impl FromStr for Direction {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(Direction::All),
            "outgoing" => Ok(Direction::Outgoing),
            "incoming" => Ok(Direction::Incoming),
            other => Err(GraphError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity types shown when a workspace opens.
pub const DEFAULT_VISIBLE_TYPES: [&str; 2] = ["Person", "Company"];

/// The current state of the graph filter controls.
///
/// `min_amount` is held in whole currency units: extracted amounts are
/// integers, so a fractional threshold is rounded up on the way in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub min_amount: u64,
    pub direction: Direction,
    pub visible_types: BTreeSet<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_amount: 0,
            direction: Direction::All,
            visible_types: DEFAULT_VISIBLE_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edges whose extracted amount is below this are dropped.
    ///
    /// Default: `0`
    pub fn min_amount(mut self, min_amount: u64) -> Self {
        self.min_amount = min_amount;
        self
    }

    /// Like [`FilterCriteria::min_amount`] for a raw control value.
    ///
    /// Fails on negative, `NaN` or infinite input.
    pub fn try_min_amount(self, min_amount: f64) -> Result<Self> {
        if !min_amount.is_finite() || min_amount < 0.0 {
            return Err(GraphError::InvalidMinAmount(min_amount));
        }
        // `as` saturates for values beyond u64::MAX.
        Ok(self.min_amount(min_amount.ceil() as u64))
    }

    /// Default: [`Direction::All`]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Replaces the set of entity types allowed among peers.
    ///
    /// Default: `Person` and `Company`
    pub fn visible_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visible_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_visible(&self, node_type: &str) -> bool {
        self.visible_types.contains(node_type)
    }

    pub fn show_type(&mut self, node_type: impl Into<String>) {
        self.visible_types.insert(node_type.into());
    }

    pub fn hide_type(&mut self, node_type: &str) {
        self.visible_types.remove(node_type);
    }

    /// Flips a type checkbox. Returns whether the type is now visible.
    pub fn toggle_type(&mut self, node_type: &str) -> bool {
        if self.visible_types.remove(node_type) {
            false
        } else {
            self.visible_types.insert(node_type.to_string());
            true
        }
    }
}

/// Range and granularity of the minimum amount slider.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AmountSlider {
    pub min: u64,
    pub max: u64,
    pub step: u64,
}

impl Default for AmountSlider {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100_000,
            step: 5_000,
        }
    }
}

impl AmountSlider {
    /// The range with its ends in order, whichever way round they were set.
    fn bounds(&self) -> (u64, u64) {
        (self.min.min(self.max), self.min.max(self.max))
    }

    /// Clamps `value` into range and rounds it to the nearest step.
    pub fn snap(&self, value: u64) -> u64 {
        let (low, high) = self.bounds();
        let value = value.clamp(low, high);
        if self.step == 0 {
            return value;
        }
        let offset = value - low;
        let remainder = offset % self.step;
        let steps = offset / self.step + u64::from(remainder >= self.step - remainder);
        low.saturating_add(steps.saturating_mul(self.step)).min(high)
    }

    /// Every position the slider can take, from the low end to the high end.
    pub fn positions(&self) -> impl Iterator<Item = u64> {
        let (low, high) = self.bounds();
        let step = usize::try_from(self.step.max(1)).unwrap_or(usize::MAX);
        (low..=high).step_by(step)
    }
}
