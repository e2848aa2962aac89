use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, Opts, Registry};

/// Tellere for klassifiseringen. Registreres i eget registry slik at
/// et ytre lag kan eksponere dem der det passer.
pub struct Metrics {
    pub registry: Registry,
    packets_classified_total: IntCounterVec,
    packets_rejected_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let packets_classified_total = IntCounterVec::new(
            Opts::new(
                "packets_classified_total",
                "Antall pakker klassifisert, per sport",
            ),
            &["sport"],
        )
        .expect("gyldige counter-opts");

        let packets_rejected_total = IntCounterVec::new(
            Opts::new(
                "packets_rejected_total",
                "Antall pakker avvist, per feiltype",
            ),
            &["kind"],
        )
        .expect("gyldige counter-opts");

        registry
            .register(Box::new(packets_classified_total.clone()))
            .expect("register classified");
        registry
            .register(Box::new(packets_rejected_total.clone()))
            .expect("register rejected");

        Self {
            registry,
            packets_classified_total,
            packets_rejected_total,
        }
    }

    pub fn classified(&self, sport: &str) {
        self.packets_classified_total.with_label_values(&[sport]).inc();
    }

    pub fn rejected(&self, kind: &str) {
        self.packets_rejected_total.with_label_values(&[kind]).inc();
    }

    pub fn classified_count(&self, sport: &str) -> u64 {
        self.packets_classified_total.with_label_values(&[sport]).get()
    }

    pub fn rejected_count(&self, kind: &str) -> u64 {
        self.packets_rejected_total.with_label_values(&[kind]).get()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Global instans brukt av classify-pipelinen.
pub static METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);
