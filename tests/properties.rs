//! Randomized operation sequences checked against a brute-force model.
//!
//! The model is a plain `BTreeMap` of params; every aggregate answer the
//! store gives is recomputed from it by a full scan.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use zenpagelayout::*;

#[derive(Clone, Debug)]
enum Op {
    Margins(u8, Margins),
    Align(u8, Alignment),
    Zone(u8, SizeF),
    Remove(u8),
}

fn arb_len() -> impl Strategy<Value = f64> {
    // Small integers make ties frequent.
    (0u8..8).prop_map(|v| v as f64 * 5.0)
}

fn arb_alignment() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Null),
        Just(Alignment::CENTER),
        Just(Alignment::new(VerticalAlignment::Top, HorizontalAlignment::Left)),
        Just(Alignment::new(VerticalAlignment::Bottom, HorizontalAlignment::Right)),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    let page = 0u8..6;
    prop_oneof![
        (page.clone(), arb_len(), arb_len(), arb_len(), arb_len())
            .prop_map(|(p, l, t, r, b)| Op::Margins(p, Margins::new(l, t, r, b))),
        (page.clone(), arb_alignment()).prop_map(|(p, a)| Op::Align(p, a)),
        (page.clone(), arb_len(), arb_len()).prop_map(|(p, w, h)| Op::Zone(p, SizeF::new(w, h))),
        page.prop_map(Op::Remove),
    ]
}

fn apply(settings: &PageSettings<u8>, model: &mut BTreeMap<u8, Params>, op: &Op) {
    let defaults = settings.defaults();
    let seed = Params::new(defaults.hard_margins, RectF::EMPTY, SizeF::ZERO, defaults.alignment);
    match *op {
        Op::Margins(p, m) => {
            settings.set_hard_margins(&p, m);
            model.entry(p).or_insert(seed).hard_margins = m;
        }
        Op::Align(p, a) => {
            settings.set_page_alignment(&p, a);
            model.entry(p).or_insert(seed).alignment = a;
        }
        Op::Zone(p, size) => {
            let rect = RectF::new(0.0, 0.0, size.width, size.height);
            settings.set_content_zone(&p, rect, size);
            let item = model.entry(p).or_insert(seed);
            item.content_rect = rect;
            item.content_size = size;
        }
        Op::Remove(p) => {
            assert_eq!(settings.remove_page(&p), model.remove(&p));
        }
    }
}

fn model_aggregate(model: &BTreeMap<u8, Params>) -> SizeF {
    model
        .values()
        .map(Params::hard_size)
        .fold(SizeF::ZERO, SizeF::max)
}

proptest! {
    #[test]
    fn prop_views_stay_consistent(ops in prop::collection::vec(arb_op(), 0..40)) {
        let settings = PageSettings::new();
        let mut model = BTreeMap::new();
        for op in &ops {
            apply(&settings, &mut model, op);

            let orders = settings.orders();
            let keys: Vec<u8> = model.keys().copied().collect();
            prop_assert_eq!(&orders.by_key, &keys);
            let by_width: BTreeSet<u8> = orders.by_width.iter().copied().collect();
            let by_height: BTreeSet<u8> = orders.by_height.iter().copied().collect();
            prop_assert_eq!(orders.by_width.len(), keys.len());
            prop_assert_eq!(orders.by_height.len(), keys.len());
            prop_assert_eq!(by_width, keys.iter().copied().collect::<BTreeSet<_>>());
            prop_assert_eq!(by_height, keys.iter().copied().collect::<BTreeSet<_>>());
        }
    }

    #[test]
    fn prop_point_queries_match_model(ops in prop::collection::vec(arb_op(), 0..40)) {
        let settings = PageSettings::new();
        let mut model = BTreeMap::new();
        for op in &ops {
            apply(&settings, &mut model, op);
        }
        for p in 0u8..6 {
            prop_assert_eq!(settings.page_params(&p), model.get(&p).copied());
            let expected_margins = model
                .get(&p)
                .map_or(settings.defaults().hard_margins, |m| m.hard_margins);
            prop_assert_eq!(settings.hard_margins(&p), expected_margins);
            let expected_alignment = model
                .get(&p)
                .map_or(settings.defaults().alignment, |m| m.alignment);
            prop_assert_eq!(settings.page_alignment(&p), expected_alignment);
        }
    }

    #[test]
    fn prop_widest_and_tallest_are_maximal(ops in prop::collection::vec(arb_op(), 0..40)) {
        let settings = PageSettings::new();
        let mut model = BTreeMap::new();
        for op in &ops {
            apply(&settings, &mut model, op);
        }

        match (settings.find_widest_page(), settings.find_tallest_page()) {
            (Some(wide), Some(tall)) => {
                let w = model[&wide].hard_width();
                let h = model[&tall].hard_height();
                for (id, params) in &model {
                    prop_assert!(w >= params.hard_width());
                    prop_assert!(h >= params.hard_height());
                    // Ties resolve to the smallest id.
                    if params.hard_width() == w {
                        prop_assert!(wide <= *id);
                    }
                    if params.hard_height() == h {
                        prop_assert!(tall <= *id);
                    }
                }
                prop_assert_eq!(settings.aggregate_hard_size(), SizeF::new(w, h));
            }
            (None, None) => {
                prop_assert!(model.is_empty());
                prop_assert_eq!(settings.aggregate_hard_size(), SizeF::ZERO);
            }
            other => prop_assert!(false, "widest/tallest disagree on emptiness: {:?}", other),
        }
        prop_assert_eq!(settings.aggregate_hard_size(), model_aggregate(&model));
    }

    #[test]
    fn prop_preview_with_current_size_is_identity(ops in prop::collection::vec(arb_op(), 0..40)) {
        let settings = PageSettings::new();
        let mut model = BTreeMap::new();
        for op in &ops {
            apply(&settings, &mut model, op);
        }
        for (id, params) in &model {
            prop_assert_eq!(
                settings.aggregate_hard_size_with(id, params.hard_size()),
                settings.aggregate_hard_size()
            );
        }
    }

    #[test]
    fn prop_preview_of_sole_leader_matches_rescan(
        ops in prop::collection::vec(arb_op(), 1..40),
        w in arb_len(),
        h in arb_len(),
    ) {
        let settings = PageSettings::new();
        let mut model = BTreeMap::new();
        for op in &ops {
            apply(&settings, &mut model, op);
        }
        let Some(wide) = settings.find_widest_page() else {
            return Ok(());
        };
        // Rescan with the widest page's hard width replaced.
        let expected_width = model
            .iter()
            .map(|(id, p)| if *id == wide { w } else { p.hard_width() })
            .fold(0.0, f64::max);
        let preview = settings.aggregate_hard_size_with(&wide, SizeF::new(w, h));
        prop_assert_eq!(preview.width, expected_width);
    }
}
