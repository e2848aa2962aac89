use stridelog_core::{classify_batch, ClassifyError, SensorPacket};

/// Sensor-eksport som CSV: kode etterfulgt av variabelt antall parametre.
fn packets_from_csv(data: &str) -> Vec<SensorPacket> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_bytes());

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record.expect("gyldig csv-linje");
        let code = record.get(0).unwrap_or_default();
        let params: Vec<f64> = record
            .iter()
            .skip(1)
            .map(|f| f.trim().parse().expect("numerisk parameter"))
            .collect();
        out.push(SensorPacket::new(code, params));
    }
    out
}

#[test]
fn test_batch_from_csv_export() {
    let data = "\
SWM,720,1,80,25,40
RUN,15000,1,75
XYZ,1,2,3
WLK,9000,1,75,180
";
    let packets = packets_from_csv(data);
    let results = classify_batch(&packets);

    assert_eq!(results.len(), 4);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(results[3].is_ok());

    // Én dårlig pakke stopper ikke resten
    assert_eq!(
        results[2],
        Err(ClassifyError::InvalidActivityCode { code: "XYZ".to_string() })
    );

    let swim = results[0].as_ref().unwrap();
    assert_eq!(swim.sport, "Svømming");
    assert!((swim.calories - 336.0).abs() < 1e-9);
}

#[test]
fn test_batch_order_is_stable() {
    let packets = vec![
        SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
    ];
    let results = classify_batch(&packets);
    assert_eq!(results[0].as_ref().unwrap().sport, "Løping");
    assert_eq!(results[1].as_ref().unwrap().sport, "Svømming");
}
