// Transmission heat losses through the building envelope, following
// DIN V 18599-2. Five envelope paths are considered: above-ground walls,
// windows, roof, base plate and below-ground walls, with temperature
// adjustment factors on the paths not facing exterior air directly.

use crate::input::{LoadInput, ReferenceVolume};

/// Resolve the reference volume used by the ventilation-loss formulas, in m³.
///
/// Unrecognised names fall back to the net volume. This mirrors the reference
/// implementation and is intentionally not an error (see `ReferenceVolume`).
pub fn reference_volume_in_m3(input: &LoadInput) -> f64 {
    match input.reference_vol_name {
        ReferenceVolume::Net => input.net_building_vol,
        ReferenceVolume::Gross => input.gross_building_vol,
        ReferenceVolume::Other(_) => input.net_building_vol,
    }
}

/// Mean interior temperature over the cooling period, in °C
/// (VDI 2078, p.139).
pub fn mean_interior_cooling_temp(t_set_cooling: f64, t_set_cooling_max: f64) -> f64 {
    (t_set_cooling_max + t_set_cooling - 2.) / 2.
}

/// Total transmission heat-loss coefficient of the envelope including thermal
/// bridges, in W/K.
///
/// Every U-value carries the blanket thermal-bridges supplement; the roof,
/// base and below-ground wall paths are scaled by their temperature
/// adjustment factors.
pub fn transmission_heat_loss_coefficient(input: &LoadInput) -> f64 {
    let tb = input.thermal_bridges_supplement;
    (input.u_walls + tb) * input.wall_area_og
        + (input.u_windows + tb) * input.total_window_area
        + (input.u_roof + tb) * input.roof_area * input.temp_adj_roof
        + (input.u_base + tb) * input.base_area * input.temp_adj_base
        + (input.u_walls + tb) * input.wall_area_ug * input.temp_adj_walls_ug
}

/// Transmission heat flows for the heating and cooling design cases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransmissionLosses {
    /// Transmission heat-loss coefficient incl. thermal bridges, in W/K
    pub h_tr_hb: f64,
    /// Transmission losses, heating case, in W
    pub phi_t_heating: f64,
    /// Transmission gains, cooling case July, in W (clamped at 0)
    pub phi_t_cooling_july: f64,
    /// Transmission gains, cooling case September, in W (clamped at 0)
    pub phi_t_cooling_sept: f64,
}

/// Calculate the transmission heat flows for one parameter set.
///
/// The heating case is not clamped (the norm exterior temperature is below
/// the heating setpoint by construction of the design case). A cooling-case
/// gain is only counted while the exterior is at least as warm as the mean
/// interior cooling temperature; otherwise the term is exactly zero.
pub fn transmission_losses(input: &LoadInput, t_i_cooling: f64) -> TransmissionLosses {
    let h_tr_hb = transmission_heat_loss_coefficient(input);

    let phi_t_heating = h_tr_hb * (input.t_set_heating - input.t_norm_ext_heating);

    let phi_t_cooling_july = if input.t_norm_ext_cooling_july >= t_i_cooling {
        h_tr_hb * (input.t_norm_ext_cooling_july - t_i_cooling)
    } else {
        0.
    };
    let phi_t_cooling_sept = if input.t_norm_ext_cooling_sept >= t_i_cooling {
        h_tr_hb * (input.t_norm_ext_cooling_sept - t_i_cooling)
    } else {
        0.
    };

    TransmissionLosses {
        h_tr_hb,
        phi_t_heating,
        phi_t_cooling_july,
        phi_t_cooling_sept,
    }
}
