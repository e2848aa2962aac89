use thiserror::Error;

/// Feil fra klassifisering av én sensorpakke.
/// Hver feil er en permanent avvisning av akkurat den pakken –
/// aldri en streng i stedet for et gyldig resultat.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    #[error("ukjent aktivitetskode: {code:?}")]
    InvalidActivityCode { code: String },

    #[error("feil antall parametre for {code}: forventet {expected}, fikk {got}")]
    MalformedParameters {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("ugyldig telleverdi {value} for {field} (må være heltall >= 0)")]
    InvalidCount { field: &'static str, value: f64 },

    #[error("duration_h må være > 0 (fart og kalorier deler på varighet)")]
    ZeroDuration,

    #[error("height_cm må være > 0 (gange-formelen deler på høyde)")]
    ZeroHeight,
}

impl ClassifyError {
    /// Kort stabil nøkkel for metrics-labels og logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidActivityCode { .. } => "invalid_code",
            Self::MalformedParameters { .. } => "malformed_params",
            Self::InvalidCount { .. } => "invalid_count",
            Self::ZeroDuration => "zero_duration",
            Self::ZeroHeight => "zero_height",
        }
    }
}
