use stridelog_core::energy::{
    distance_km, mean_speed_kmh, pool_distance_km, running_calories, swimming_calories,
    walking_calories, RunningConsts, SwimConsts, WalkingConsts, KMH_IN_MS, STEP_LEN_M,
};

#[test]
fn test_land_distance() {
    // 15000 skritt à 0.65 m = 9.75 km
    assert!((distance_km(15000, STEP_LEN_M) - 9.75).abs() < 1e-12);
    assert_eq!(distance_km(0, STEP_LEN_M), 0.0);
}

#[test]
fn test_mean_speed() {
    assert!((mean_speed_kmh(9.75, 1.0) - 9.75).abs() < 1e-12);
    assert!((mean_speed_kmh(9.75, 0.5) - 19.5).abs() < 1e-12);
}

#[test]
fn test_pool_distance_exact() {
    // Basseng-derivert, IKKE fra action-telling
    assert_eq!(pool_distance_km(25.0, 40), 1.0);
    assert_eq!(pool_distance_km(50.0, 0), 0.0);
}

#[test]
fn test_running_calories_scenario() {
    // RUN [15000, 1, 75]: (18*9.75 + 1.79) * 75 / 1000 * 60 = 797.805
    let speed = mean_speed_kmh(distance_km(15000, STEP_LEN_M), 1.0);
    let kcal = running_calories(speed, 75.0, 1.0, &RunningConsts::DEFAULT);
    assert!((kcal - 797.805).abs() < 1e-9);
    assert!(kcal > 0.0);
}

#[test]
fn test_walking_calories_scenario() {
    // WLK [9000, 1, 75, 180]: fart 5.85 km/t -> 1.6263 m/s
    let speed = mean_speed_kmh(distance_km(9000, STEP_LEN_M), 1.0);
    assert!((speed - 5.85).abs() < 1e-12);

    let kcal = walking_calories(speed, 75.0, 180.0, 1.0, &WalkingConsts::DEFAULT);

    // Samme formel regnet ut for hånd
    let v_ms = 5.85 * KMH_IN_MS;
    let expected = (0.035 * 75.0 + (v_ms * v_ms / 1.8) * 0.029 * 75.0) * 60.0;
    assert!((kcal - expected).abs() < 1e-9);
    assert!((kcal - 349.252).abs() < 1e-3);
}

#[test]
fn test_swimming_calories_scenario() {
    // SWM [720, 1, 80, 25, 40]: fart 1.0 km/t, (1.0+1.1)*2*80*1 = 336.0
    let speed = mean_speed_kmh(pool_distance_km(25.0, 40), 1.0);
    let kcal = swimming_calories(speed, 80.0, 1.0, &SwimConsts::DEFAULT);
    assert!((kcal - 336.0).abs() < 1e-9);
}

#[test]
fn test_calories_positive_for_valid_running_inputs() {
    // kcal > 0 så lenge fart > 0 og vekt > 0
    for &(speed, weight, dur) in &[(0.1, 40.0, 0.25), (9.75, 75.0, 1.0), (25.0, 120.0, 3.0)] {
        let kcal = running_calories(speed, weight, dur, &RunningConsts::DEFAULT);
        assert!(kcal > 0.0, "kcal={kcal} for speed={speed}");
    }
}

#[test]
fn test_swim_stroke_length_constant() {
    // Taklengden fra variantens konstantsett, for tak-derivert distanse
    let c = SwimConsts::DEFAULT;
    assert!((distance_km(720, c.stroke_len_m) - 0.9936).abs() < 1e-12);
}
