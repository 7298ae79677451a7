use crate::roast::{self, RoastProcess, RoastRecord};

fn sample() -> RoastRecord {
    RoastRecord {
        id: "r1".into(),
        date: "2026-08-25T10:15:00.000Z".into(),
        origin: "Colombia".into(),
        process: RoastProcess::Washed,
        variety: "Caturra".into(),
        altitude: "1800".into(),
        batch: "B-7".into(),
        green_weight: 500.0,
        roasted_weight: 430.0,
        loss_percentage: 14.0,
        machine: "Skywalker V1".into(),
        notes: "first crack at 8:30".into(),
    }
}

#[test]
fn wire_format_uses_camel_case_and_lowercase_process() -> Result<(), anyhow::Error> {
    let json = serde_json::to_value(sample())?;
    assert_eq!(json["greenWeight"], 500.0);
    assert_eq!(json["roastedWeight"], 430.0);
    assert_eq!(json["lossPercentage"], 14.0);
    assert_eq!(json["process"], "washed");
    assert!(json.get("green_weight").is_none());
    Ok(())
}

#[test]
fn record_round_trips_exactly() -> Result<(), anyhow::Error> {
    let original = sample();
    let encoded = serde_json::to_string(&original)?;
    let decoded: RoastRecord = serde_json::from_str(&encoded)?;
    assert_eq!(decoded, original);
    Ok(())
}

#[test]
fn process_parses_and_displays() {
    for p in [RoastProcess::Washed, RoastProcess::Natural, RoastProcess::Honey] {
        let parsed: RoastProcess = p.to_string().parse().expect("round-trip");
        assert_eq!(parsed, p);
    }
    assert!("lavado".parse::<RoastProcess>().is_err());
}

#[test]
fn loss_formula_and_zero_green_weight() {
    assert_eq!(roast::compute_loss(500.0, 375.0), 25.0);
    assert!((roast::compute_loss(500.0, 430.0) - 14.0).abs() < 1e-9);
    assert_eq!(roast::compute_loss(0.0, 430.0), 0.0);

    let mut r = sample();
    r.roasted_weight = 420.0;
    r.recompute_loss();
    assert_eq!(r.loss_percentage, 16.0);
}

#[test]
fn new_record_has_parseable_date_and_unique_id() {
    let a = RoastRecord::new(roast::new_record_id());
    let b = RoastRecord::new(roast::new_record_id());
    assert_ne!(a.id, b.id);
    a.parsed_date().expect("fresh record date parses");
}

#[test]
fn validation_requires_id_and_origin() {
    let mut r = sample();
    assert!(roast::validate(&r).is_ok());

    r.origin.clear();
    assert!(roast::validate(&r).is_err());

    let mut r = sample();
    r.id = "  ".into();
    assert!(roast::validate(&r).is_err());

    let mut r = sample();
    r.green_weight = -1.0;
    assert!(roast::validate(&r).is_err());
}
