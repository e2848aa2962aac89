// Python-laget: tynt bindingslag over classify-pipelinen.
// Feil mappes til PyValueError; ingen beregning skjer her.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use serde::Deserialize;
use serde_json::json;
use serde_path_to_error as spte;

use crate::classify::{classify, classify_batch};
use crate::energy::RoundTo;
use crate::report::render;
use crate::types::SensorPacket;

// ──────────────────────────────────────────────────────────────────────────────
// Tolerant pakke-inngang (aksepter eldre feltnavn fra Python-siden)
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PacketIn {
    #[serde(alias = "workout_type", alias = "type")]
    code: String,
    #[serde(alias = "data")]
    params: Vec<f64>,
    #[serde(default)]
    recorded_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<PacketIn> for SensorPacket {
    fn from(p: PacketIn) -> Self {
        Self {
            code: p.code,
            params: p.params,
            recorded_at: p.recorded_at,
        }
    }
}

/// Klassifiser én pakke og returner (sport, varighet_t, distanse_km,
/// snittfart_kmt, kcal), tall avrundet til 3 desimaler.
#[pyfunction]
fn classify_packet(
    code: String,
    params: Vec<f64>,
) -> PyResult<(String, f64, f64, f64, f64)> {
    let s = classify(&code, &params).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((
        s.sport,
        s.duration_h.round_to(3),
        s.distance_km.round_to(3),
        s.speed_kmh.round_to(3),
        s.calories.round_to(3),
    ))
}

/// Klassifiser én pakke og returner ferdig rendret rapportlinje.
#[pyfunction]
fn render_packet(code: String, params: Vec<f64>) -> PyResult<String> {
    let s = classify(&code, &params).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(render(&s))
}

/// Batch fra JSON: liste av {code, params, recorded_at?}.
/// Returnerer JSON-liste der hver post er {ok: true, summary} eller
/// {ok: false, kind, error} – feil isoleres per pakke.
#[pyfunction]
fn classify_batch_json(packets_json: &str) -> PyResult<String> {
    let de = &mut serde_json::Deserializer::from_str(packets_json);
    let packets: Vec<PacketIn> = spte::deserialize(de).map_err(|e| {
        PyValueError::new_err(format!("ugyldig pakkeliste ved {}: {}", e.path(), e.inner()))
    })?;

    let packets: Vec<SensorPacket> = packets.into_iter().map(Into::into).collect();
    let results: Vec<serde_json::Value> = classify_batch(&packets)
        .into_iter()
        .map(|res| match res {
            Ok(s) => json!({ "ok": true, "summary": s }),
            Err(e) => json!({ "ok": false, "kind": e.kind(), "error": e.to_string() }),
        })
        .collect();

    serde_json::to_string(&results).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
pub fn stridelog_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(classify_packet, m)?)?;
    m.add_function(wrap_pyfunction!(render_packet, m)?)?;
    m.add_function(wrap_pyfunction!(classify_batch_json, m)?)?;
    Ok(())
}
