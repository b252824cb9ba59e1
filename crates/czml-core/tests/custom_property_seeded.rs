use czml_core::custom::{CustomProperties, CustomValue, IntervalValue};
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Key pool deliberately excludes "interval": an array of objects that all
// carry an interval key decodes as an interval list, so a generated plain
// list using that key would not round-trip. That ambiguity is inherent to
// the wire format, not a codec defect.
const KEYS: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "count", "label", "enabled", "ratio", "tags", "meta",
];

fn random_value(rng: &mut StdRng, depth: usize) -> CustomValue {
    let pick = if depth >= 3 {
        rng.gen_range(0..5)
    } else {
        rng.gen_range(0..7)
    };
    match pick {
        0 => CustomValue::Null,
        1 => CustomValue::Boolean(rng.gen()),
        2 => {
            if rng.gen() {
                CustomValue::Number(rng.gen_range(-1000i64..1000).into())
            } else {
                let n = (rng.gen_range(-1000.0f64..1000.0) * 64.0).round() / 64.0;
                CustomValue::Number(
                    serde_json::Number::from_f64(n).unwrap_or_else(|| 0.into()),
                )
            }
        }
        3 => CustomValue::String(format!("s{}", rng.gen_range(0..10000))),
        4 => CustomValue::String(String::new()),
        5 => {
            let len = rng.gen_range(0..4);
            CustomValue::List((0..len).map(|_| random_value(rng, depth + 1)).collect())
        }
        _ => {
            if rng.gen_range(0..4) == 0 {
                let len = rng.gen_range(1..4);
                CustomValue::Intervals(
                    (0..len)
                        .map(|i| IntervalValue {
                            interval: format!("2020-01-0{}T00:00:00Z/2020-01-0{}T00:00:00Z", i + 1, i + 2),
                            value: random_value(rng, depth + 1),
                        })
                        .collect(),
                )
            } else {
                let len = rng.gen_range(1..5);
                let mut map = IndexMap::new();
                for key in KEYS.iter().take(len) {
                    map.insert(key.to_string(), random_value(rng, depth + 1));
                }
                CustomValue::Object(map)
            }
        }
    }
}

#[test]
fn seeded_custom_trees_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x00c2_714c_2e5a_11d7);
    for case in 0..200 {
        let value = random_value(&mut rng, 0);
        let wire = value.to_json();
        let back = CustomValue::from_json(&wire).expect("generated tree must decode");
        assert_eq!(back, value, "round-trip mismatch at case {case}: {wire}");
    }
}

#[test]
fn seeded_property_maps_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x7e57_ab1e_0001_0002);
    for case in 0..100 {
        let mut props = CustomProperties::new();
        let len = rng.gen_range(1..=KEYS.len());
        for key in KEYS.iter().take(len) {
            props.insert(*key, random_value(&mut rng, 1));
        }
        let wire = props.to_json();
        let back = CustomProperties::from_json(&wire).expect("generated map must decode");
        assert_eq!(back, props, "round-trip mismatch at case {case}");
    }
}
