// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Kinetics — Reaction Parsing & Conservation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reaction equation parsing and conservation-law validation.
//!
//! Grammar: `side ("->" | "-->") side`, terms joined by standalone `+`
//! tokens, each term an optional positive integer coefficient glued to a
//! particle symbol (`"4He-4"` is four alpha particles). A `+` attached to
//! the end of a symbol stays part of it (`"e+"`).

use plasma_types::error::{PlasmaError, PlasmaResult};

use crate::particle::{ParticleRecord, ParticleResolver};

/// Parse a reaction equation into reactant and product symbol lists,
/// coefficients expanded by repetition.
pub fn parse_equation(equation: &str) -> PlasmaResult<(Vec<String>, Vec<String>)> {
    let (lhs, rhs) = split_equation(equation)?;
    Ok((split_side(lhs, "reactant")?, split_side(rhs, "product")?))
}

/// Split an equation on its single yields arrow (`->` or `-->`).
fn split_equation(equation: &str) -> PlasmaResult<(&str, &str)> {
    let bytes = equation.as_bytes();
    let mut arrow: Option<(usize, usize)> = None;
    let mut count = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'-' {
            let start = i;
            while i < bytes.len() && bytes[i] == b'-' {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == b'>' {
                if i - start > 2 {
                    return Err(PlasmaError::EquationSyntax(format!(
                        "malformed arrow in {equation:?}"
                    )));
                }
                arrow = Some((start, i + 1));
                count += 1;
                i += 1;
            }
        } else {
            i += 1;
        }
    }
    match (arrow, count) {
        (Some((start, end)), 1) => Ok((&equation[..start], &equation[end..])),
        (_, 0) => Err(PlasmaError::EquationSyntax(format!(
            "no yields arrow in {equation:?}"
        ))),
        _ => Err(PlasmaError::EquationSyntax(format!(
            "multiple yields arrows in {equation:?}"
        ))),
    }
}

/// Split one side into symbols, expanding coefficients by repetition.
fn split_side(side: &str, label: &str) -> PlasmaResult<Vec<String>> {
    let mut symbols = Vec::new();
    let mut expect_term = true;
    for chunk in side.split_whitespace() {
        let (separator, term) = if chunk == "+" {
            (true, None)
        } else if let Some(rest) = chunk.strip_prefix('+') {
            (true, Some(rest))
        } else {
            (false, Some(chunk))
        };
        if separator {
            if expect_term {
                return Err(PlasmaError::EquationSyntax(format!(
                    "misplaced '+' on {label} side"
                )));
            }
            expect_term = true;
        }
        if let Some(term) = term {
            if !expect_term {
                return Err(PlasmaError::EquationSyntax(format!(
                    "missing '+' between terms on {label} side"
                )));
            }
            let (count, symbol) = parse_term(term)?;
            symbols.extend(std::iter::repeat_with(|| symbol.to_string()).take(count));
            expect_term = false;
        }
    }
    if expect_term {
        if symbols.is_empty() {
            return Err(PlasmaError::EquationSyntax(format!("empty {label} side")));
        }
        return Err(PlasmaError::EquationSyntax(format!(
            "dangling '+' on {label} side"
        )));
    }
    Ok(symbols)
}

/// Split a term into (repeat count, symbol).
///
/// A leading digit run immediately followed by a letter is a
/// stoichiometric coefficient; a digit run after a hyphen is a mass
/// number and stays with the symbol. Digit-led forms without a letter
/// right after the run ("3", "4-He") are rejected rather than guessed.
fn parse_term(term: &str) -> PlasmaResult<(usize, &str)> {
    let digits = term.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return Ok((1, term));
    }
    let rest = &term[digits..];
    match rest.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => {
            let count: usize = term[..digits].parse().map_err(|_| {
                PlasmaError::EquationSyntax(format!("bad coefficient in {term:?}"))
            })?;
            if count == 0 {
                return Err(PlasmaError::EquationSyntax(format!(
                    "zero coefficient in {term:?}"
                )));
            }
            Ok((count, rest))
        }
        _ => Err(PlasmaError::EquationSyntax(format!(
            "term {term:?} must start with a particle symbol or coefficient"
        ))),
    }
}

/// A transient, fully resolved and validated reaction.
#[derive(Debug, Clone)]
pub struct Reaction {
    pub reactants: Vec<ParticleRecord>,
    pub products: Vec<ParticleRecord>,
}

impl Reaction {
    /// Resolve and validate a reaction equation.
    pub fn from_equation(resolver: &dyn ParticleResolver, equation: &str) -> PlasmaResult<Self> {
        let (reactants, products) = parse_equation(equation)?;
        Self::from_symbols(resolver, &reactants, &products)
    }

    /// Resolve and validate explicit reactant/product symbol lists.
    /// List entries follow the same term grammar as equation sides.
    pub fn from_species<R: AsRef<str>, P: AsRef<str>>(
        resolver: &dyn ParticleResolver,
        reactants: &[R],
        products: &[P],
    ) -> PlasmaResult<Self> {
        let reactants = expand_symbols(reactants)?;
        let products = expand_symbols(products)?;
        Self::from_symbols(resolver, &reactants, &products)
    }

    fn from_symbols(
        resolver: &dyn ParticleResolver,
        reactants: &[String],
        products: &[String],
    ) -> PlasmaResult<Self> {
        let resolve_side = |side: &[String]| -> PlasmaResult<Vec<ParticleRecord>> {
            side.iter().map(|s| resolver.resolve(s, None)).collect()
        };
        let reaction = Reaction {
            reactants: resolve_side(reactants)?,
            products: resolve_side(products)?,
        };
        reaction.validate()?;
        Ok(reaction)
    }

    /// Conservation-law and degeneracy checks.
    ///
    /// Baryon number and charge must balance; the reaction must name at
    /// least one species per side and actually change rest mass.
    pub fn validate(&self) -> PlasmaResult<()> {
        if self.reactants.is_empty() || self.products.is_empty() {
            return Err(PlasmaError::DegenerateReaction(
                "both sides must name at least one species".into(),
            ));
        }
        let a_in: i32 = self.reactants.iter().map(|p| p.mass_number).sum();
        let a_out: i32 = self.products.iter().map(|p| p.mass_number).sum();
        if a_in != a_out {
            return Err(PlasmaError::ConservationViolation(format!(
                "mass number not conserved: {a_in} -> {a_out}"
            )));
        }
        let q_in: i32 = self.reactants.iter().map(|p| p.charge_number).sum();
        let q_out: i32 = self.products.iter().map(|p| p.charge_number).sum();
        if q_in != q_out {
            return Err(PlasmaError::ConservationViolation(format!(
                "charge not conserved: {q_in}e -> {q_out}e"
            )));
        }
        if multiset_key(&self.reactants) == multiset_key(&self.products) {
            return Err(PlasmaError::DegenerateReaction(
                "reactants and products are identical".into(),
            ));
        }
        if self.mass_defect_u() == 0.0 {
            return Err(PlasmaError::DegenerateReaction(
                "reaction changes no rest mass".into(),
            ));
        }
        Ok(())
    }

    /// Net rest-mass change, reactants minus products [u].
    ///
    /// Positive for exothermic reactions.
    pub fn mass_defect_u(&self) -> f64 {
        let m_in: f64 = self.reactants.iter().map(|p| p.mass_u).sum();
        let m_out: f64 = self.products.iter().map(|p| p.mass_u).sum();
        m_in - m_out
    }
}

fn expand_symbols<S: AsRef<str>>(side: &[S]) -> PlasmaResult<Vec<String>> {
    let mut out = Vec::with_capacity(side.len());
    for entry in side {
        let (count, symbol) = parse_term(entry.as_ref().trim())?;
        out.extend(std::iter::repeat_with(|| symbol.to_string()).take(count));
    }
    Ok(out)
}

/// Order-independent side fingerprint for the no-op check.
fn multiset_key(side: &[ParticleRecord]) -> Vec<(i32, i32, u64)> {
    let mut key: Vec<_> = side
        .iter()
        .map(|p| (p.mass_number, p.charge_number, p.mass_u.to_bits()))
        .collect();
    key.sort_unstable();
    key
}
