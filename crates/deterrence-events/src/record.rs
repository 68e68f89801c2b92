//! Interaction Records
//!
//! One record per executed interaction: both sides' proposals with their
//! expected-value breakdowns, the reconciled pair action, and the resolved
//! outcome. Records are the atomic units of simulation history.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a country, unique and immutable once assigned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CountryId(pub u32);

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "country_{}", self.0)
    }
}

/// A country's independent proposal for a pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionChoice {
    Attack,
    Bargain,
}

/// Expected-value breakdown for one candidate attacker.
///
/// Computed twice per proposal: once over perceived inputs (this one drives
/// the decision) and once over true inputs (bookkeeping only).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvBreakdown {
    /// Probability of the attack succeeding
    pub win_probability: f64,
    /// Value transferred on success, after the gain cap
    pub capped_gain: f64,
    /// Cost paid by the attacker on success
    pub success_cost: f64,
    /// Cost paid by the attacker on failure
    pub failure_cost: f64,
    /// Probability-weighted payoff of attacking
    pub attack_ev: f64,
    /// Deterministic expected payoff of bargaining
    pub bargain_ev: f64,
}

/// One side's proposal together with the numbers behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub country: CountryId,
    pub choice: ActionChoice,
    pub perceived: EvBreakdown,
    pub actual: EvBreakdown,
}

/// The two independent proposals reconciled into one action for the pair.
///
/// Precedence rule: if either side prefers attack, an attack occurs. When
/// both attack, the participant listed first in the schedule strikes first
/// and resolves as the sole attacker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairAction {
    BothBargain,
    OneAttacks(CountryId),
    BothAttack,
}

impl PairAction {
    /// Whether this action resolves as an attack.
    pub fn is_attack(&self) -> bool {
        !matches!(self, PairAction::BothBargain)
    }
}

/// Terminal resolution of an interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionOutcome {
    /// The attack succeeded: the defender is eliminated and its value
    /// (capped) transferred to the attacker, minus the success cost.
    AttackSucceeded {
        attacker: CountryId,
        defender: CountryId,
        transfer: f64,
        cost: f64,
        attacker_value: f64,
    },
    /// The defense held: the attacker pays the failure cost, the defender
    /// loses a fixed share of its value. Nobody is eliminated.
    AttackRepelled {
        attacker: CountryId,
        defender: CountryId,
        attacker_cost: f64,
        defender_loss: f64,
        attacker_value: f64,
        defender_value: f64,
    },
    /// Both sides bargained: a randomized, strictly non-negative surplus
    /// split. Values never decrease.
    BargainStruck {
        first_gain: f64,
        second_gain: f64,
        first_value: f64,
        second_value: f64,
    },
}

impl InteractionOutcome {
    /// The attacker, if this outcome resolved an attack.
    pub fn attacker(&self) -> Option<CountryId> {
        match self {
            InteractionOutcome::AttackSucceeded { attacker, .. }
            | InteractionOutcome::AttackRepelled { attacker, .. } => Some(*attacker),
            InteractionOutcome::BargainStruck { .. } => None,
        }
    }

    /// Whether a country was eliminated by this outcome.
    pub fn eliminated(&self) -> Option<CountryId> {
        match self {
            InteractionOutcome::AttackSucceeded { defender, .. } => Some(*defender),
            _ => None,
        }
    }

    pub fn is_bargain(&self) -> bool {
        matches!(self, InteractionOutcome::BargainStruck { .. })
    }
}

/// A complete interaction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// Unique identifier (e.g., "int_00000042")
    pub record_id: String,
    /// Round in which the interaction executed
    pub round: u32,
    /// Participant listed first in the schedule
    pub first: CountryId,
    /// Participant listed second in the schedule
    pub second: CountryId,
    /// The first participant's proposal
    pub first_proposal: Proposal,
    /// The second participant's proposal
    pub second_proposal: Proposal,
    /// Reconciled action for the pair
    pub action: PairAction,
    /// Resolution outcome
    pub outcome: InteractionOutcome,
}

impl InteractionRecord {
    /// Returns both participant ids in schedule order.
    pub fn participants(&self) -> [CountryId; 2] {
        [self.first, self.second]
    }

    /// Checks whether a specific country took part in this interaction.
    pub fn involves(&self, country: CountryId) -> bool {
        self.first == country || self.second == country
    }

    /// Serializes the record to a JSON line (for JSONL format).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a record from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Generates a record ID with the given sequence number.
pub fn generate_record_id(sequence: u64) -> String {
    format!("int_{:08}", sequence)
}
