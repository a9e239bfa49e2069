// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Kinetics — Particle Resolution
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Particle and nuclide resolution.
//!
//! Maps symbols, element names, and common aliases to rest mass, charge,
//! and mass number. Resolution sits behind [`ParticleResolver`] so the
//! energetics pipeline can run against a stub table in tests;
//! [`BuiltinResolver`] covers the fusion-relevant corner of the nuclide
//! chart.

use plasma_types::constants::{M_ELECTRON_U, M_NEUTRON_U, M_PROTON_U};
use plasma_types::error::{PlasmaError, PlasmaResult};
use serde::{Deserialize, Serialize};

/// Elements known to the builtin table: (symbol, name, Z).
const ELEMENTS: &[(&str, &str, i32)] = &[
    ("H", "hydrogen", 1),
    ("He", "helium", 2),
    ("Be", "beryllium", 4),
    ("C", "carbon", 6),
    ("Na", "sodium", 11),
    ("Mg", "magnesium", 12),
    ("Th", "thorium", 90),
    ("U", "uranium", 92),
];

/// Nuclide atomic masses, AME evaluation: (Z, A, atomic mass [u]).
const ISOTOPES: &[(i32, i32, f64)] = &[
    (1, 1, 1.00782503207),
    (1, 2, 2.01410177812),
    (1, 3, 3.01604928199),
    (2, 3, 3.01602932008),
    (2, 4, 4.00260325413),
    (4, 8, 8.005305102),
    (6, 12, 12.0),
    (11, 23, 22.98976928087),
    (12, 23, 22.99412421),
    (90, 234, 234.04360124),
    (92, 238, 238.05078826),
];

/// A resolved particle. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleRecord {
    /// Canonical symbol, e.g. `"He-4"`, `"e-"`.
    pub symbol: String,
    /// Rest mass [u]. Bare-nucleus mass for nuclides.
    pub mass_u: f64,
    /// Charge number in units of e. Equals Z for nuclides.
    pub charge_number: i32,
    /// Mass number A (0 for leptons).
    pub mass_number: i32,
}

/// Lookup boundary to the particle/isotope database.
///
/// Implementations are read-only and must support concurrent lookups.
pub trait ParticleResolver {
    /// Resolve a symbol, name, or alias to a particle record.
    ///
    /// `mass_number` selects the nuclide when `symbol` names a bare
    /// element; it must not repeat a mass number already carried by the
    /// symbol itself.
    fn resolve(&self, symbol: &str, mass_number: Option<i32>) -> PlasmaResult<ParticleRecord>;
}

/// Const-table resolver over [`ELEMENTS`] and [`ISOTOPES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinResolver;

impl ParticleResolver for BuiltinResolver {
    fn resolve(&self, symbol: &str, mass_number: Option<i32>) -> PlasmaResult<ParticleRecord> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(PlasmaError::UnknownParticle("empty symbol".into()));
        }
        if let Some(a) = mass_number {
            if a <= 0 {
                return Err(PlasmaError::InvalidArgument(format!(
                    "mass number must be a positive integer, got {a}"
                )));
            }
        }
        if let Some(record) = nucleon_or_lepton(symbol) {
            if mass_number.is_some() {
                return Err(PlasmaError::InvalidArgument(format!(
                    "{symbol} does not take a mass number"
                )));
            }
            return Ok(record);
        }
        let (element, embedded) = match nuclide_alias(symbol) {
            Some((element, a)) => (element, Some(a)),
            None => split_nuclide_symbol(symbol)?,
        };
        let a = match (embedded, mass_number) {
            (Some(a), None) | (None, Some(a)) => a,
            (Some(_), Some(_)) => {
                return Err(PlasmaError::InvalidArgument(format!(
                    "mass number given both in {symbol:?} and as an argument"
                )))
            }
            (None, None) => return Err(PlasmaError::AmbiguousParticle(symbol.to_string())),
        };
        nuclide(element, a, symbol)
    }
}

/// Elementary particles and free nucleons, matched before any element
/// lookup so `"e-"` never reaches the hyphen splitter.
fn nucleon_or_lepton(symbol: &str) -> Option<ParticleRecord> {
    let (canonical, mass_u, charge_number, mass_number) = match symbol {
        "p" | "proton" => ("p", M_PROTON_U, 1, 1),
        "n" | "neutron" => ("n", M_NEUTRON_U, 0, 1),
        "e-" | "electron" | "beta-" => ("e-", M_ELECTRON_U, -1, 0),
        "e+" | "positron" | "beta+" => ("e+", M_ELECTRON_U, 1, 0),
        _ => return None,
    };
    Some(ParticleRecord {
        symbol: canonical.to_string(),
        mass_u,
        charge_number,
        mass_number,
    })
}

/// Aliases that pin both the element and the mass number.
fn nuclide_alias(symbol: &str) -> Option<(&'static str, i32)> {
    match symbol {
        "D" | "deuterium" | "deuteron" => Some(("H", 2)),
        "T" | "tritium" | "triton" => Some(("H", 3)),
        "alpha" => Some(("He", 4)),
        _ => None,
    }
}

/// Split `"He-4"` / `"carbon-12"` into element text and mass number.
fn split_nuclide_symbol(symbol: &str) -> PlasmaResult<(&str, Option<i32>)> {
    match symbol.rsplit_once('-') {
        Some((element, tail)) => {
            let a: i32 = tail
                .parse()
                .map_err(|_| PlasmaError::UnknownParticle(symbol.to_string()))?;
            if a <= 0 {
                return Err(PlasmaError::UnknownParticle(symbol.to_string()));
            }
            Ok((element, Some(a)))
        }
        None => Ok((symbol, None)),
    }
}

/// Element lookup: case-sensitive on the symbol, case-insensitive on the
/// full name.
fn find_element(text: &str) -> Option<(&'static str, i32)> {
    ELEMENTS
        .iter()
        .find(|&&(sym, name, _)| sym == text || name.eq_ignore_ascii_case(text))
        .map(|&(sym, _, z)| (sym, z))
}

/// Build the bare-nucleus record for element text and mass number.
fn nuclide(element: &str, a: i32, original: &str) -> PlasmaResult<ParticleRecord> {
    let (sym, z) =
        find_element(element).ok_or_else(|| PlasmaError::UnknownParticle(original.to_string()))?;
    let atomic_mass_u = ISOTOPES
        .iter()
        .find(|&&(iz, ia, _)| iz == z && ia == a)
        .map(|&(_, _, m)| m)
        .ok_or_else(|| PlasmaError::UnknownParticle(format!("{sym}-{a}")))?;
    Ok(ParticleRecord {
        symbol: format!("{sym}-{a}"),
        // Tabulated masses are atomic; strip the Z bound electrons.
        mass_u: atomic_mass_u - z as f64 * M_ELECTRON_U,
        charge_number: z,
        mass_number: a,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasma_types::error::ErrorKind;

    #[test]
    fn test_alpha_aliases_resolve_identically() {
        let a = BuiltinResolver.resolve("alpha", None).unwrap();
        let b = BuiltinResolver.resolve("He-4", None).unwrap();
        let c = BuiltinResolver.resolve("He", Some(4)).unwrap();
        let d = BuiltinResolver.resolve("helium-4", None).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, d);
        assert_eq!(a.mass_number, 4);
        assert_eq!(a.charge_number, 2);
    }

    #[test]
    fn test_element_names_are_case_insensitive() {
        let a = BuiltinResolver.resolve("carbon-12", None).unwrap();
        let b = BuiltinResolver.resolve("Carbon-12", None).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.symbol, "C-12");
    }

    #[test]
    fn test_nucleons_and_leptons() {
        let p = BuiltinResolver.resolve("proton", None).unwrap();
        assert_eq!(p.charge_number, 1);
        assert_eq!(p.mass_number, 1);

        let n = BuiltinResolver.resolve("n", None).unwrap();
        assert_eq!(n.charge_number, 0);
        assert_eq!(n.mass_number, 1);

        let e = BuiltinResolver.resolve("e-", None).unwrap();
        assert_eq!(e.charge_number, -1);
        assert_eq!(e.mass_number, 0);

        let positron = BuiltinResolver.resolve("e+", None).unwrap();
        assert_eq!(positron.charge_number, 1);
        assert_eq!(positron.mass_u, e.mass_u);
    }

    #[test]
    fn test_nuclide_mass_is_bare_nucleus() {
        let he4 = BuiltinResolver.resolve("He-4", None).unwrap();
        assert!((he4.mass_u - (4.00260325413 - 2.0 * M_ELECTRON_U)).abs() < 1e-12);
    }

    #[test]
    fn test_bare_element_is_ambiguous() {
        let err = BuiltinResolver.resolve("H", None).unwrap_err();
        assert!(matches!(err, PlasmaError::AmbiguousParticle(_)), "{err}");
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_unknown_symbols() {
        for symbol in ["bogus", "Xe-131", "He-99", "D+T", "H-1.1"] {
            let err = BuiltinResolver.resolve(symbol, None).unwrap_err();
            assert!(matches!(err, PlasmaError::UnknownParticle(_)), "{symbol}: {err}");
        }
    }

    #[test]
    fn test_duplicate_mass_number_is_type_error() {
        let err = BuiltinResolver.resolve("He-4", Some(4)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_non_positive_mass_number_is_type_error() {
        for a in [0, -4] {
            let err = BuiltinResolver.resolve("He", Some(a)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type, "A = {a}");
        }
    }

    #[test]
    fn test_lepton_rejects_mass_number() {
        let err = BuiltinResolver.resolve("e-", Some(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }
}
