use serde::{Deserialize, Serialize};

/// Classic floor-trader pivot levels, each rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotSet {
    pub pp: f64,
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
}

impl PivotSet {
    pub fn price(&self, level: PivotLevel) -> f64 {
        match level {
            PivotLevel::R1 => self.r1,
            PivotLevel::R2 => self.r2,
            PivotLevel::R3 => self.r3,
            PivotLevel::S1 => self.s1,
            PivotLevel::S2 => self.s2,
            PivotLevel::S3 => self.s3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PivotLevel {
    R1,
    R2,
    R3,
    S1,
    S2,
    S3,
}

impl PivotLevel {
    pub const RESISTANCES: [PivotLevel; 3] = [PivotLevel::R1, PivotLevel::R2, PivotLevel::R3];
    pub const SUPPORTS: [PivotLevel; 3] = [PivotLevel::S1, PivotLevel::S2, PivotLevel::S3];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotPosition {
    AbovePivot,
    BelowPivot,
    AtPivot,
}

/// Where a price sits relative to a [`PivotSet`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotClassification {
    pub position: PivotPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_resistance: Option<PivotLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_support: Option<PivotLevel>,
}

/// Pivot levels, the classified current price and the session they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotReport {
    #[serde(flatten)]
    pub pivots: PivotSet,
    pub current_price: f64,
    #[serde(flatten)]
    pub classification: PivotClassification,
    pub reference_date: String,
}
