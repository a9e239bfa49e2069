// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Kinetics — Plasma Nuclear
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Nuclear energetics modules.
//!
//! Particle resolution, reaction equation parsing, conservation-law
//! validation, and mass-energy bookkeeping for fusion-relevant reactions.

pub mod nuclear;
pub mod particle;
pub mod reaction;
