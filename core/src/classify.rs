// core/src/classify.rs
// Klassifiserings-pipelinen: kode + posisjonelle parametre -> validert
// record -> WorkoutSummary. Tilstandsløs; hver pakke behandles isolert.

use log::{debug, warn};

use crate::errors::ClassifyError;
use crate::metrics::METRICS;
use crate::models::{BaseRecord, Running, Swimming, Walking, Workout};
use crate::types::{SensorPacket, WorkoutSummary};

pub const CODE_SWIMMING: &str = "SWM";
pub const CODE_RUNNING: &str = "RUN";
pub const CODE_WALKING: &str = "WLK";

/// Forventet ariteter per kode: action, duration_h, weight_kg, [ekstra].
const ARITY_RUNNING: usize = 3;
const ARITY_WALKING: usize = 4; // + height_cm
const ARITY_SWIMMING: usize = 5; // + pool_length_m, pool_laps

/// Telleverdier kommer som f64 over grensesnittet, men må være
/// ikke-negative heltall (skritt/tak/bassenglengder).
fn count_param(value: f64, field: &'static str) -> Result<u32, ClassifyError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(ClassifyError::InvalidCount { field, value });
    }
    Ok(value as u32)
}

fn check_arity(
    code: &'static str,
    expected: usize,
    params: &[f64],
) -> Result<(), ClassifyError> {
    if params.len() != expected {
        return Err(ClassifyError::MalformedParameters {
            code,
            expected,
            got: params.len(),
        });
    }
    Ok(())
}

fn base_record(params: &[f64]) -> Result<BaseRecord, ClassifyError> {
    let action = count_param(params[0], "action")?;
    let duration_h = params[1];
    if !(duration_h > 0.0) {
        return Err(ClassifyError::ZeroDuration);
    }
    Ok(BaseRecord {
        action,
        duration_h,
        weight_kg: params[2],
    })
}

/// Bind parametre posisjonelt til riktig variant og valider form.
/// Divisor-felt (varighet, høyde) avvises her, før konstruksjon –
/// formlene skal aldri feile under evaluering.
pub fn read_packet(code: &str, params: &[f64]) -> Result<Workout, ClassifyError> {
    match code {
        CODE_RUNNING => {
            check_arity(CODE_RUNNING, ARITY_RUNNING, params)?;
            Ok(Workout::Running(Running {
                base: base_record(params)?,
            }))
        }
        CODE_WALKING => {
            check_arity(CODE_WALKING, ARITY_WALKING, params)?;
            let base = base_record(params)?;
            let height_cm = params[3];
            if !(height_cm > 0.0) {
                return Err(ClassifyError::ZeroHeight);
            }
            Ok(Workout::Walking(Walking { base, height_cm }))
        }
        CODE_SWIMMING => {
            check_arity(CODE_SWIMMING, ARITY_SWIMMING, params)?;
            let base = base_record(params)?;
            let pool_length_m = params[3];
            let pool_laps = count_param(params[4], "pool_laps")?;
            Ok(Workout::Swimming(Swimming {
                base,
                pool_length_m,
                pool_laps,
            }))
        }
        other => Err(ClassifyError::InvalidActivityCode {
            code: other.to_string(),
        }),
    }
}

/// Hele pipelinen for én pakke: kode + parametre -> sammendrag.
/// Deterministisk; samme input gir bit-identisk output.
pub fn classify(code: &str, params: &[f64]) -> Result<WorkoutSummary, ClassifyError> {
    match read_packet(code, params) {
        Ok(workout) => {
            let summary = workout.summary();
            METRICS.classified(workout.label());
            debug!(
                "klassifisert {}: {:.3} km på {:.3} t",
                summary.sport, summary.distance_km, summary.duration_h
            );
            Ok(summary)
        }
        Err(e) => {
            METRICS.rejected(e.kind());
            Err(e)
        }
    }
}

/// Batch: hver pakke behandles uavhengig, feil isoleres per pakke.
/// Fortsett/avbryt-policy ligger hos kalleren.
pub fn classify_batch(packets: &[SensorPacket]) -> Vec<Result<WorkoutSummary, ClassifyError>> {
    packets
        .iter()
        .map(|p| {
            let res = classify(&p.code, &p.params);
            if let Err(ref e) = res {
                warn!("pakke {:?} avvist: {}", p.code, e);
            }
            res
        })
        .collect()
}
