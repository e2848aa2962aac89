use crate::types::WorkoutSummary;

/// Render ett sammendrag som fem felter, tall med 3 desimaler.
/// Tekstformen eies av dette laget; kjernen garanterer bare tallene.
pub fn render(summary: &WorkoutSummary) -> String {
    format!(
        "Type trening: {}; Varighet: {:.3} t; Distanse: {:.3} km; \
         Snittfart: {:.3} km/t; Kalorier: {:.3}.",
        summary.sport,
        summary.duration_h,
        summary.distance_km,
        summary.speed_kmh,
        summary.calories
    )
}

pub fn print_summary(summary: &WorkoutSummary) {
    println!("{}", render(summary));
}
