// ─────────────────────────────────────────────────────────────────────
// SCPN Plasma Kinetics — Physical Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Atomic mass constant energy equivalent [MeV]. CODATA 2018.
pub const U_TO_MEV: f64 = 931.49410242;

/// Electron rest mass [u].
pub const M_ELECTRON_U: f64 = 5.48579909070e-4;

/// Proton rest mass [u].
pub const M_PROTON_U: f64 = 1.00727646688;

/// Neutron rest mass [u].
pub const M_NEUTRON_U: f64 = 1.00866491588;

/// Elementary charge (C)
pub const Q_ELECTRON: f64 = 1.602176634e-19;

/// MeV in joules.
pub const MEV_TO_J: f64 = 1.602176634e-13;

/// Speed of light in vacuum [m/s].
pub const C_LIGHT_M_S: f64 = 299792458.0;
