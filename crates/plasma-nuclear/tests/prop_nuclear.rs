// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Kinetics — Property-Based Tests (proptest) for plasma-nuclear
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for plasma-nuclear using proptest.
//!
//! Covers: term-order invariance, coefficient linearity, parser
//! totality, serialization roundtrip.

use plasma_nuclear::nuclear::{nuclear_reaction_energy, ReactionSpec};
use plasma_nuclear::particle::{BuiltinResolver, ParticleResolver};
use plasma_nuclear::reaction::parse_equation;
use proptest::prelude::*;
use uom::si::energy::megaelectronvolt;

// ── Order Invariance ─────────────────────────────────────────────────

proptest! {
    /// Shuffling species on either side never changes the energy.
    #[test]
    fn reaction_energy_order_invariant(
        reactants in Just(vec![
            "D".to_string(), "T".to_string(), "D".to_string(), "T".to_string(),
        ]).prop_shuffle(),
        products in Just(vec![
            "alpha".to_string(), "n".to_string(), "alpha".to_string(), "n".to_string(),
        ]).prop_shuffle(),
    ) {
        let shuffled = nuclear_reaction_energy(
            &ReactionSpec::from_species(reactants, products),
        ).unwrap();
        let reference = nuclear_reaction_energy(
            &ReactionSpec::from_equation("2D + 2T --> 2alpha + 2n"),
        ).unwrap();
        let diff_mev = (shuffled.get::<megaelectronvolt>()
            - reference.get::<megaelectronvolt>()).abs();
        prop_assert!(diff_mev < 1e-9, "order changed Q by {diff_mev} MeV");
    }

    /// A k-fold coefficient expansion scales the energy k-fold.
    #[test]
    fn coefficient_expansion_linear(k in 1usize..6) {
        let single = nuclear_reaction_energy(
            &ReactionSpec::from_equation("D + T --> alpha + n"),
        ).unwrap().get::<megaelectronvolt>();
        let scaled = nuclear_reaction_energy(
            &ReactionSpec::from_equation(&format!("{k}D + {k}T --> {k}alpha + {k}n")),
        ).unwrap().get::<megaelectronvolt>();
        prop_assert!(
            (scaled - k as f64 * single).abs() < 1e-9,
            "k = {k}: {scaled} MeV vs {} MeV", k as f64 * single,
        );
    }
}

// ── Parser Totality ──────────────────────────────────────────────────

proptest! {
    /// The parser returns an error or a parse, never panics.
    #[test]
    fn parser_never_panics(input in ".{0,64}") {
        let _ = parse_equation(&input);
    }

    /// The resolver returns an error or a record, never panics.
    #[test]
    fn resolver_never_panics(symbol in ".{0,24}", a in proptest::option::of(-4i32..300)) {
        let _ = BuiltinResolver.resolve(&symbol, a);
    }
}

// ── Serialization Roundtrip ──────────────────────────────────────────

proptest! {
    /// ReactionSpec survives a JSON roundtrip.
    #[test]
    fn reaction_spec_roundtrip(equation in "[A-Za-z0-9 +>-]{0,24}") {
        let spec = ReactionSpec::from_equation(equation);
        let json = serde_json::to_string(&spec).unwrap();
        let back: ReactionSpec = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(spec, back);
    }
}

/// ParticleRecord survives a JSON roundtrip for every builtin species.
#[test]
fn particle_record_roundtrip() {
    for symbol in ["p", "n", "e-", "e+", "D", "T", "alpha", "Be-8", "U-238"] {
        let record = BuiltinResolver.resolve(symbol, None).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back, "{symbol}");
    }
}
