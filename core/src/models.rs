use serde::{Deserialize, Serialize};

use crate::energy::{
    self, RunningConsts, SwimConsts, WalkingConsts, STEP_LEN_M,
};
use crate::types::WorkoutSummary;

/// Felles råfelt for alle varianter. Konstrueres én gang, muteres aldri.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseRecord {
    pub action: u32,     // skritt/tak
    pub duration_h: f64, // timer, > 0
    pub weight_kg: f64,  // kg
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    pub base: BaseRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Walking {
    pub base: BaseRecord,
    pub height_cm: f64, // > 0, inngår som divisor i kaloriformelen
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    pub base: BaseRecord,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

/// Lukket variantmengde. Hver variant eier sine konstanter og
/// implementerer begge operasjonene (distanse/fart og kalorier) –
/// ingen basis-stub som stille returnerer ingenting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    /// Stabil etikett per variant (ikke brukerinput).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Running(_) => "Løping",
            Self::Walking(_) => "Gange",
            Self::Swimming(_) => "Svømming",
        }
    }

    pub fn base(&self) -> &BaseRecord {
        match self {
            Self::Running(r) => &r.base,
            Self::Walking(w) => &w.base,
            Self::Swimming(s) => &s.base,
        }
    }

    /// Distanse i km. Land-varianter bruker steglengdeformelen,
    /// svømming er basseng-derivert (lengde * antall basseng).
    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Running(r) => energy::distance_km(r.base.action, STEP_LEN_M),
            Self::Walking(w) => energy::distance_km(w.base.action, STEP_LEN_M),
            Self::Swimming(s) => energy::pool_distance_km(s.pool_length_m, s.pool_laps),
        }
    }

    /// Snittfart i km/t (distanse / varighet).
    pub fn mean_speed_kmh(&self) -> f64 {
        energy::mean_speed_kmh(self.distance_km(), self.base().duration_h)
    }

    /// kcal etter variantens empiriske formel.
    pub fn calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self {
            Self::Running(r) => energy::running_calories(
                speed,
                r.base.weight_kg,
                r.base.duration_h,
                &RunningConsts::DEFAULT,
            ),
            Self::Walking(w) => energy::walking_calories(
                speed,
                w.base.weight_kg,
                w.height_cm,
                w.base.duration_h,
                &WalkingConsts::DEFAULT,
            ),
            Self::Swimming(s) => energy::swimming_calories(
                speed,
                s.base.weight_kg,
                s.base.duration_h,
                &SwimConsts::DEFAULT,
            ),
        }
    }

    /// Fullt sammendrag for rapportering. Ren funksjon av recorden.
    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            sport: self.label().to_string(),
            duration_h: self.base().duration_h,
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories: self.calories(),
        }
    }
}
