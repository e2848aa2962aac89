// core/src/energy.rs
// Formel-laget: delt distanse/fart-modell + kaloriformler per variant.
// Alle konstanter er navngitte og immutable; formlene får dem injisert
// slik at de kan testes isolert.

pub const M_IN_KM: f64 = 1000.0;  // meter per km
pub const MIN_IN_H: f64 = 60.0;   // minutter per time
pub const KMH_IN_MS: f64 = 0.278; // km/t -> m/s
pub const CM_IN_M: f64 = 100.0;   // cm per meter
pub const STEP_LEN_M: f64 = 0.65; // steglengde løp/gange (m)

// --- RoundTo trait (offentlig, brukt av report.rs og py-laget) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Empiriske konstanter for løp.
#[derive(Debug, Clone, Copy)]
pub struct RunningConsts {
    pub speed_mult: f64,  // multiplikator på snittfart
    pub speed_shift: f64, // additivt skift
}

impl RunningConsts {
    pub const DEFAULT: Self = Self { speed_mult: 18.0, speed_shift: 1.79 };
}

/// Empiriske konstanter for gange.
#[derive(Debug, Clone, Copy)]
pub struct WalkingConsts {
    pub weight_mult: f64,   // ledd 1: vekt-multiplikator
    pub speed_sq_mult: f64, // ledd 2: multiplikator på v²/høyde
}

impl WalkingConsts {
    pub const DEFAULT: Self = Self { weight_mult: 0.035, speed_sq_mult: 0.029 };
}

/// Empiriske konstanter for svømming.
#[derive(Debug, Clone, Copy)]
pub struct SwimConsts {
    pub speed_shift: f64,  // additivt skift på snittfart
    pub weight_mult: f64,  // vekt-multiplikator
    pub stroke_len_m: f64, // taklengde (m) – for tak-derivert distanse
}

impl SwimConsts {
    pub const DEFAULT: Self = Self { speed_shift: 1.1, weight_mult: 2.0, stroke_len_m: 1.38 };
}

/// Distanse i km fra råtelling (skritt/tak) og lengde per aksjon.
#[inline]
pub fn distance_km(action: u32, action_len_m: f64) -> f64 {
    f64::from(action) * action_len_m / M_IN_KM
}

/// Snittfart i km/t. Forutsetter duration_h > 0 (valideres ved konstruksjon).
#[inline]
pub fn mean_speed_kmh(distance_km: f64, duration_h: f64) -> f64 {
    distance_km / duration_h
}

/// Basseng-derivert distanse i km (svømming bruker IKKE steglengdeformelen).
#[inline]
pub fn pool_distance_km(pool_length_m: f64, pool_laps: u32) -> f64 {
    pool_length_m * f64::from(pool_laps) / M_IN_KM
}

/// kcal for løp: (C1 * fart + C2) * vekt / 1000 * varighet_minutter.
pub fn running_calories(speed_kmh: f64, weight_kg: f64, duration_h: f64, c: &RunningConsts) -> f64 {
    (c.speed_mult * speed_kmh + c.speed_shift) * weight_kg / M_IN_KM * duration_h * MIN_IN_H
}

/// kcal for gange: fart konverteres til m/s, høyde inngår som divisor.
/// Forutsetter height_cm > 0 (valideres ved konstruksjon).
pub fn walking_calories(
    speed_kmh: f64,
    weight_kg: f64,
    height_cm: f64,
    duration_h: f64,
    c: &WalkingConsts,
) -> f64 {
    let speed_ms = speed_kmh * KMH_IN_MS;
    let height_m = height_cm / CM_IN_M;
    (c.weight_mult * weight_kg
        + (speed_ms * speed_ms / height_m) * c.speed_sq_mult * weight_kg)
        * duration_h
        * MIN_IN_H
}

/// kcal for svømming: (fart + S1) * S2 * vekt * varighet_timer.
pub fn swimming_calories(speed_kmh: f64, weight_kg: f64, duration_h: f64, c: &SwimConsts) -> f64 {
    (speed_kmh + c.speed_shift) * c.weight_mult * weight_kg * duration_h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(9.7494_f64.round_to(3), 9.749);
        assert_eq!(9.7496_f64.round_to(3), 9.75);
        assert_eq!(797.805_f64.round_to(0), 798.0);
    }

    #[test]
    fn test_injected_constants() {
        // Doblet multiplikator skal doble fartsleddet
        let base = RunningConsts::DEFAULT;
        let doubled = RunningConsts { speed_mult: 36.0, ..base };
        let a = running_calories(10.0, 75.0, 1.0, &base);
        let b = running_calories(10.0, 75.0, 1.0, &doubled);
        assert!(b > a);
    }
}
