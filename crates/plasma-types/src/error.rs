// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Kinetics — Error Taxonomy
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Error and warning taxonomy shared by the plasma kinetics crates.
//!
//! Every [`PlasmaError`] variant maps onto one of two base kinds so a
//! handler written against a kind keeps catching new variants without
//! modification.

use thiserror::Error;

/// Base category of a [`PlasmaError`].
///
/// `Type` marks a wrong argument shape at the public boundary; `Value`
/// marks input that is well-typed but syntactically or physically invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Value,
}

#[derive(Error, Debug)]
pub enum PlasmaError {
    /// Wrong argument shape at the public boundary, e.g. both calling
    /// conventions supplied at once.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reaction equation does not match the `side (-> | -->) side` grammar.
    #[error("equation syntax error: {0}")]
    EquationSyntax(String),

    /// Symbol does not resolve to any known particle or nuclide.
    #[error("unknown particle: {0}")]
    UnknownParticle(String),

    /// Element given without a mass number where a single nuclide is
    /// required.
    #[error("ambiguous particle {0}: mass number required")]
    AmbiguousParticle(String),

    /// Particle resolved but cannot be used in this position.
    #[error("invalid particle: {0}")]
    InvalidParticle(String),

    /// Mass number or charge totals differ between the two sides.
    #[error("conservation violation: {0}")]
    ConservationViolation(String),

    /// Reaction is a no-op or changes no rest mass.
    #[error("degenerate reaction: {0}")]
    DegenerateReaction(String),
}

impl PlasmaError {
    /// Base kind, for catch-by-category handlers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlasmaError::InvalidArgument(_) => ErrorKind::Type,
            _ => ErrorKind::Value,
        }
    }
}

pub type PlasmaResult<T> = Result<T, PlasmaError>;

/// Non-fatal diagnostic for borderline but physically valid input,
/// e.g. a speed approaching the speed of light.
///
/// Warnings never alter a computed result; callers decide whether and
/// how to surface them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlasmaWarning {
    #[error("physics warning: {0}")]
    Physics(String),

    #[error("relativity warning: {0}")]
    Relativity(String),
}

impl PlasmaWarning {
    /// Warnings are advisory only.
    pub fn is_fatal(&self) -> bool {
        false
    }
}
