use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Én rå pakke fra sensoren: aktivitetskode + posisjonelle parametre.
/// Rekkefølgen på `params` er fast per kode (se classify.rs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorPacket {
    pub code: String,     // "SWM" | "RUN" | "WLK"
    pub params: Vec<f64>, // action, duration_h, weight_kg, [ekstra]
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl SensorPacket {
    pub fn new(code: &str, params: Vec<f64>) -> Self {
        Self {
            code: code.to_string(),
            params,
            recorded_at: None,
        }
    }
}

/// Normalisert sammendrag av én økt. Immutabel etter beregning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub sport: String,    // stabil etikett per variant, ikke brukerinput
    pub duration_h: f64,  // timer
    pub distance_km: f64, // km
    pub speed_kmh: f64,   // km/t
    pub calories: f64,    // kcal
}
