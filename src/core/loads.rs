// Aggregation of the derivation groups into the heating load and the peak
// cooling load. This is the single entry point of the calculation core.

use crate::core::internal_gains::internal_gains_in_w;
use crate::core::solar::solar_gains;
use crate::core::transmission::{
    mean_interior_cooling_temp, reference_volume_in_m3, transmission_losses,
};
use crate::core::ventilation::{ventilation_losses, VentilationBreakdown, VentilationRegime};
use crate::input::LoadInput;
use serde::Serialize;

/// Every derived quantity of one load calculation. All heat flows in W,
/// coefficients in W/K, temperatures in °C, areas in m², volumes in m³, air
/// change rates in 1/h.
///
/// The record is built once, in derivation order, and never partially
/// updated; `phi_cl == max(phi_cl_july, phi_cl_sept)` holds for every result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoadResult {
    /// Reference volume selected per `reference_vol_name`, in m³
    pub reference_vol_value: f64,
    /// Mean interior temperature over the cooling period, in °C
    pub t_i_cooling: f64,
    /// Transmission heat-loss coefficient incl. thermal bridges, in W/K
    pub h_tr_hb: f64,
    pub phi_t_heating: f64,
    pub phi_t_cooling_july: f64,
    pub phi_t_cooling_sept: f64,
    /// Residual air change attributed to window opening, in 1/h
    pub ach_win: f64,
    pub t_rec_heating: f64,
    pub t_rec_cooling_july: f64,
    pub t_rec_cooling_sept: f64,
    pub ventilation_regime: VentilationRegime,
    pub phi_v_tot_heating: f64,
    pub phi_v_tot_cooling_july: f64,
    pub phi_v_tot_cooling_sept: f64,
    /// Per-component ventilation flows, mixed-sources regime only
    pub ventilation_breakdown: Option<VentilationBreakdown>,
    pub window_area_illuminated_se: f64,
    pub window_area_illuminated_sw: f64,
    pub phi_solar_se_july: f64,
    pub phi_solar_sw_july: f64,
    pub phi_solar_tot_july: f64,
    pub phi_solar_se_sept: f64,
    pub phi_solar_sw_sept: f64,
    pub phi_solar_tot_sept: f64,
    /// Internal gains for the cooling case, in W
    pub phi_i_cooling: f64,
    /// Heating load, in W
    pub phi_hl: f64,
    /// Cooling load July, in W
    pub phi_cl_july: f64,
    /// Cooling load September, in W
    pub phi_cl_sept: f64,
    /// Peak cooling load, in W
    pub phi_cl: f64,
}

/// Calculate every derived quantity for one parameter set.
///
/// Pure and stateless: identical inputs give bit-identical results, nothing
/// is retained between calls and arbitrarily many calls may run concurrently
/// on independent inputs.
pub fn calculate_loads(input: &LoadInput) -> LoadResult {
    let reference_vol_value = reference_volume_in_m3(input);
    let t_i_cooling = mean_interior_cooling_temp(input.t_set_cooling, input.t_set_cooling_max);

    let transmission = transmission_losses(input, t_i_cooling);
    let ventilation = ventilation_losses(input, reference_vol_value, t_i_cooling);
    let solar = solar_gains(input.total_window_area, input.gtot, input.share_glass_frame);
    let phi_i_cooling = internal_gains_in_w(input.phi_i_cooling_spec, input.net_floor_area);

    let phi_hl = (transmission.phi_t_heating + ventilation.phi_v_tot_heating) * input.share_heated;
    let phi_cl_july = (transmission.phi_t_cooling_july
        + ventilation.phi_v_tot_cooling_july
        + solar.phi_solar_tot_july
        + phi_i_cooling)
        * input.share_cooled;
    let phi_cl_sept = (transmission.phi_t_cooling_sept
        + ventilation.phi_v_tot_cooling_sept
        + solar.phi_solar_tot_sept
        + phi_i_cooling)
        * input.share_cooled;
    let phi_cl = phi_cl_july.max(phi_cl_sept);

    tracing::debug!(
        phi_hl,
        phi_cl,
        regime = ?ventilation.regime,
        "calculated design loads"
    );

    LoadResult {
        reference_vol_value,
        t_i_cooling,
        h_tr_hb: transmission.h_tr_hb,
        phi_t_heating: transmission.phi_t_heating,
        phi_t_cooling_july: transmission.phi_t_cooling_july,
        phi_t_cooling_sept: transmission.phi_t_cooling_sept,
        ach_win: ventilation.ach_win,
        t_rec_heating: ventilation.t_rec_heating,
        t_rec_cooling_july: ventilation.t_rec_cooling_july,
        t_rec_cooling_sept: ventilation.t_rec_cooling_sept,
        ventilation_regime: ventilation.regime,
        phi_v_tot_heating: ventilation.phi_v_tot_heating,
        phi_v_tot_cooling_july: ventilation.phi_v_tot_cooling_july,
        phi_v_tot_cooling_sept: ventilation.phi_v_tot_cooling_sept,
        ventilation_breakdown: ventilation.breakdown,
        window_area_illuminated_se: solar.window_area_illuminated_se,
        window_area_illuminated_sw: solar.window_area_illuminated_sw,
        phi_solar_se_july: solar.phi_solar_se_july,
        phi_solar_sw_july: solar.phi_solar_sw_july,
        phi_solar_tot_july: solar.phi_solar_tot_july,
        phi_solar_se_sept: solar.phi_solar_se_sept,
        phi_solar_sw_sept: solar.phi_solar_sw_sept,
        phi_solar_tot_sept: solar.phi_solar_tot_sept,
        phi_i_cooling,
        phi_hl,
        phi_cl_july,
        phi_cl_sept,
        phi_cl,
    }
}
