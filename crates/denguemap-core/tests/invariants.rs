use denguemap_core::{coerce_count, normalize, AggregateTotals, RawRecord, Totals};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = RawRecord> {
    (
        prop::string::string_regex("[ \t]{0,2}[A-Za-z ]{0,12}[ \t]{0,2}").unwrap(),
        prop::string::string_regex("([0-9]{1,6}|[a-z]{1,4}|-?[0-9]{1,3}\\.[0-9]{1,2}|)").unwrap(),
        prop::string::string_regex("([0-9]{1,4}|[a-z]{1,4}|)").unwrap(),
    )
        .prop_map(|(region, cases, deaths)| {
            RawRecord::from_pairs([
                ("Region", region.as_str()),
                ("cases", cases.as_str()),
                ("deaths", deaths.as_str()),
            ])
        })
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(s in ".{0,40}") {
        prop_assert_eq!(normalize(normalize(&s)), normalize(&s));
    }

    #[test]
    fn prop_coercion_is_total(s in ".{0,20}") {
        // Any input at all resolves to some non-negative count.
        let _ = coerce_count(Some(&s));
        let _ = coerce_count(None);
    }

    #[test]
    fn prop_coercion_round_trips_clean_integers(n in 0u64..1_000_000_000) {
        prop_assert_eq!(coerce_count(Some(&n.to_string())), n);
    }

    #[test]
    fn prop_aggregation_is_commutative(
        rows in prop::collection::vec(arb_record(), 0..30),
        seed in any::<u64>()
    ) {
        let mut shuffled = rows.clone();
        // Deterministic Fisher-Yates driven by the seed.
        let mut state = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        for i in (1..shuffled.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            shuffled.swap(i, (state as usize) % (i + 1));
        }

        prop_assert_eq!(
            AggregateTotals::from_records(&rows),
            AggregateTotals::from_records(&shuffled)
        );
    }

    #[test]
    fn prop_aggregation_is_additive(
        a in prop::collection::vec(arb_record(), 0..20),
        b in prop::collection::vec(arb_record(), 0..20)
    ) {
        let combined: Vec<RawRecord> = a.iter().chain(b.iter()).cloned().collect();
        let whole = AggregateTotals::from_records(&combined);

        let mut piecewise = AggregateTotals::from_records(&a);
        piecewise.merge(AggregateTotals::from_records(&b));

        prop_assert_eq!(whole, piecewise);
    }
}

#[test]
fn test_concrete_aggregation_scenario() {
    let rows = vec![
        RawRecord::from_pairs([("Region", " Luzon "), ("cases", "100"), ("deaths", "5")]),
        RawRecord::from_pairs([("Region", "Luzon"), ("cases", "50"), ("deaths", "3")]),
        RawRecord::from_pairs([("Region", "Visayas"), ("cases", "abc"), ("deaths", "")]),
    ];

    let totals = AggregateTotals::from_records(&rows);

    assert_eq!(totals.len(), 2);
    assert_eq!(totals.get("Luzon"), Totals::new(150, 8));
    assert_eq!(totals.get("Visayas"), Totals::new(0, 0));
}

#[test]
fn test_empty_input_yields_empty_aggregate() {
    let totals = AggregateTotals::from_records(&[]);
    assert!(totals.is_empty());
    assert_eq!(totals.get("Luzon"), Totals::ZERO);
}
