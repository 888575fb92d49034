//! Scope Allocation
//!
//! Redistributes category totals into GHG Protocol scopes with fixed ratios.
//! This is a reporting heuristic, not a physical model:
//! - Scope 1 (direct): 30% of energy (gas/fuel share) + 20% of transport (company vehicles)
//! - Scope 2 (purchased energy): 70% of energy (electricity share)
//! - Scope 3 (other indirect): 80% of transport + waste + purchases + IT + real estate
//!
//! Energy and transport coefficients each sum to 1.0 across scopes, so the
//! three scopes always add up to the category total.

use serde::{Deserialize, Serialize};

use crate::categories::CategoryBreakdown;

pub const ENERGY_SCOPE1_SHARE: f64 = 0.3;
pub const ENERGY_SCOPE2_SHARE: f64 = 0.7;
pub const TRANSPORT_SCOPE1_SHARE: f64 = 0.2;
pub const TRANSPORT_SCOPE3_SHARE: f64 = 0.8;

/// Emissions per reporting scope in tCO2e
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeBreakdown {
    pub scope1: f64,
    pub scope2: f64,
    pub scope3: f64,
}

impl ScopeBreakdown {
    pub fn total(&self) -> f64 {
        self.scope1 + self.scope2 + self.scope3
    }
}

/// Allocate category totals to scopes
pub fn allocate_scopes(categories: &CategoryBreakdown) -> ScopeBreakdown {
    let scope1 = categories.energy * ENERGY_SCOPE1_SHARE
        + categories.transport * TRANSPORT_SCOPE1_SHARE;

    let scope2 = categories.energy * ENERGY_SCOPE2_SHARE;

    let scope3 = categories.transport * TRANSPORT_SCOPE3_SHARE
        + categories.waste
        + categories.purchases
        + categories.it
        + categories.real_estate;

    ScopeBreakdown { scope1, scope2, scope3 }
}
