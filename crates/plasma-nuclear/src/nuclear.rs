// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Kinetics — Nuclear Energetics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reaction and binding energies from mass-energy equivalence.
//!
//! Every public energy is a dimensioned `uom` quantity; internal mass
//! bookkeeping stays in atomic mass units.

use plasma_types::constants::{M_NEUTRON_U, M_PROTON_U, U_TO_MEV};
use plasma_types::error::{PlasmaError, PlasmaResult};
use serde::{Deserialize, Serialize};
use uom::si::energy::megaelectronvolt;
use uom::si::f64::Energy;

use crate::particle::{BuiltinResolver, ParticleResolver};
use crate::reaction::Reaction;

/// Input to [`nuclear_reaction_energy`]: exactly one calling convention,
/// either a reaction equation or explicit species lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionSpec {
    /// Reaction equation, e.g. `"D + T --> alpha + n"`.
    pub equation: Option<String>,
    /// Reactant symbols, paired with `products`.
    pub reactants: Option<Vec<String>>,
    /// Product symbols, paired with `reactants`.
    pub products: Option<Vec<String>>,
}

impl ReactionSpec {
    /// Equation calling convention.
    pub fn from_equation(equation: impl Into<String>) -> Self {
        ReactionSpec {
            equation: Some(equation.into()),
            ..ReactionSpec::default()
        }
    }

    /// Species-list calling convention.
    pub fn from_species<R, P>(reactants: R, products: P) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        ReactionSpec {
            equation: None,
            reactants: Some(reactants.into_iter().map(Into::into).collect()),
            products: Some(products.into_iter().map(Into::into).collect()),
        }
    }
}

/// Energy released by a nuclear reaction, from the builtin particle table.
///
/// `Q = (Σ m_reactants − Σ m_products) c²`; positive for exothermic
/// reactions. Term order on either side never affects the result.
pub fn nuclear_reaction_energy(spec: &ReactionSpec) -> PlasmaResult<Energy> {
    nuclear_reaction_energy_with(&BuiltinResolver, spec)
}

/// Energy released by a nuclear reaction, using the given resolver.
pub fn nuclear_reaction_energy_with(
    resolver: &dyn ParticleResolver,
    spec: &ReactionSpec,
) -> PlasmaResult<Energy> {
    let reaction = match (&spec.equation, &spec.reactants, &spec.products) {
        (Some(equation), None, None) => Reaction::from_equation(resolver, equation)?,
        (None, Some(reactants), Some(products)) => {
            Reaction::from_species(resolver, reactants, products)?
        }
        (Some(_), _, _) => {
            return Err(PlasmaError::InvalidArgument(
                "supply an equation or species lists, not both".into(),
            ))
        }
        _ => {
            return Err(PlasmaError::InvalidArgument(
                "supply an equation or both a reactant and a product list".into(),
            ))
        }
    };
    Ok(Energy::new::<megaelectronvolt>(
        reaction.mass_defect_u() * U_TO_MEV,
    ))
}

/// Binding energy of a nuclide, from the builtin particle table.
pub fn nuclear_binding_energy(symbol: &str, mass_number: Option<i32>) -> PlasmaResult<Energy> {
    nuclear_binding_energy_with(&BuiltinResolver, symbol, mass_number)
}

/// Binding energy of a nuclide, using the given resolver.
///
/// `(Z m_p + N m_n − m_nuclide) c²`. A single free nucleon has zero
/// binding energy by definition. The mass number may come embedded in the
/// symbol (`"He-4"`) or as the separate argument (`"He"`, 4), never both.
pub fn nuclear_binding_energy_with(
    resolver: &dyn ParticleResolver,
    symbol: &str,
    mass_number: Option<i32>,
) -> PlasmaResult<Energy> {
    let particle = resolver.resolve(symbol, mass_number)?;
    if particle.mass_number == 0 {
        return Err(PlasmaError::InvalidParticle(format!(
            "{} is not a nuclide",
            particle.symbol
        )));
    }
    if particle.mass_number == 1 {
        return Ok(Energy::new::<megaelectronvolt>(0.0));
    }
    let z = f64::from(particle.charge_number);
    let n = f64::from(particle.mass_number - particle.charge_number);
    let defect_u = z * M_PROTON_U + n * M_NEUTRON_U - particle.mass_u;
    Ok(Energy::new::<megaelectronvolt>(defect_u * U_TO_MEV))
}
