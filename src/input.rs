use crate::errors::LoadCalcError;
use serde::Deserialize;
use serde_enum_str::Deserialize_enum_str;
use std::io::Read;

/// Read and deserialize a load-calculation parameter document (JSON).
///
/// All 32 parameters must be present with the correct types; supplying them is
/// the caller's responsibility and missing or malformed fields are reported as
/// an input error. Numeric ranges are deliberately not validated here (see
/// `LoadInput`).
pub fn ingest_for_processing(json: impl Read) -> Result<LoadInput, LoadCalcError> {
    Ok(serde_json::from_reader(json)?)
}

/// The full set of physical input parameters for one load calculation.
///
/// Units: areas in m², volumes in m³, temperatures in °C, thermal
/// transmittances in W/(m²·K), air change rates in 1/h, shares and adjustment
/// factors dimensionless. The record is immutable once constructed and the
/// calculation never writes back into it.
///
/// No range validation is performed on construction: out-of-range values
/// (negative areas, transmittances etc.) propagate into numerically defined
/// but physically meaningless results. Validation, where wanted, belongs to
/// whatever adapter builds this record. Non-finite values are a breach of the
/// calling contract.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoadInput {
    /// Net floor area, in m²
    pub net_floor_area: f64,
    /// U-value of windows, in W/(m²·K)
    pub u_windows: f64,
    /// U-value of walls, in W/(m²·K)
    pub u_walls: f64,
    /// U-value of roof, or of ceiling against unheated space, in W/(m²·K)
    pub u_roof: f64,
    /// U-value of base plate, or of floor against unheated space, in W/(m²·K)
    pub u_base: f64,
    /// Temperature adjustment factor for the base
    /// (0.3 floor against ground, 0.5 floor against unheated)
    pub temp_adj_base: f64,
    /// Temperature adjustment factor for walls below ground (typically 0.3)
    pub temp_adj_walls_ug: f64,
    /// Temperature adjustment factor for the roof
    /// (1.0 roof against air, 0.5 ceiling against unheated)
    pub temp_adj_roof: f64,
    /// Above-ground wall area, in m²
    pub wall_area_og: f64,
    /// Below-ground wall area, in m²
    pub wall_area_ug: f64,
    /// Total window area, in m²
    pub total_window_area: f64,
    /// Roof area, in m²
    pub roof_area: f64,
    /// Base area, in m²
    pub base_area: f64,
    /// Heating setpoint temperature, in °C
    pub t_set_heating: f64,
    /// Thermal bridges supplement added to every U-value, in W/(m²·K)
    pub thermal_bridges_supplement: f64,
    /// Gross building volume, in m³
    pub gross_building_vol: f64,
    /// Net building volume, in m³
    pub net_building_vol: f64,
    /// Which volume feeds the ventilation-loss formulas
    pub reference_vol_name: ReferenceVolume,
    /// Norm exterior temperature, heating case, in °C
    pub t_norm_ext_heating: f64,
    /// Heat recovery efficiency of the mechanical ventilation system (0 to 1)
    pub heat_rec_vent: f64,
    /// Minimum hygienic air change rate (DIN V 18599-10), in 1/h
    pub ach_min: f64,
    /// Air change rate through infiltration, in 1/h
    pub ach_infl: f64,
    /// Air change rate through mechanical ventilation (DIN V 18599-6), in 1/h
    pub ach_vent: f64,
    /// Share of net floor area which is heated (0 to 1)
    pub share_heated: f64,
    /// Share of net floor area which is cooled (0 to 1)
    pub share_cooled: f64,
    /// Share of net floor area which is mechanically ventilated (0 to 1)
    pub share_mech_ventilated: f64,
    /// Norm exterior temperature in July, cooling case (VDI 2078), in °C
    pub t_norm_ext_cooling_july: f64,
    /// Norm exterior temperature in September, cooling case (VDI 2078), in °C
    pub t_norm_ext_cooling_sept: f64,
    /// Total solar energy transmittance of glazing incl. sun protection
    /// (DIN V 18599-2 Table 8)
    pub gtot: f64,
    /// Glass share of the total window area, typically 0.7 for a 30% frame
    pub share_glass_frame: f64,
    /// Cooling setpoint temperature, in °C (DIN V 18599-10)
    pub t_set_cooling: f64,
    /// Maximum permissible indoor temperature during the cooling period, in °C
    pub t_set_cooling_max: f64,
    /// Specific internal loads for the cooling case, in W/m²
    pub phi_i_cooling_spec: f64,
}

/// Choice of reference volume for the ventilation-loss formulas.
///
/// Any string other than "net" or "gross" is accepted and treated as the net
/// volume. This leniency is observed behaviour of the reference
/// implementation and is preserved as-is rather than turned into a validation
/// error; the unrecognised spelling is kept so callers can surface it.
#[derive(Clone, Debug, Deserialize_enum_str, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceVolume {
    Net,
    Gross,
    #[serde(other)]
    Other(String),
}

/// A complete, physically plausible parameter set used as the canonical
/// scenario across the crate's tests: a 500 m² building with mechanical
/// ventilation with heat recovery, design temperatures -12/32/28 °C.
#[cfg(test)]
pub(crate) fn example_input() -> LoadInput {
    LoadInput {
        net_floor_area: 500.0,
        u_windows: 1.3,
        u_walls: 0.28,
        u_roof: 0.2,
        u_base: 0.35,
        temp_adj_base: 0.3,
        temp_adj_walls_ug: 0.3,
        temp_adj_roof: 1.0,
        wall_area_og: 320.0,
        wall_area_ug: 60.0,
        total_window_area: 80.0,
        roof_area: 250.0,
        base_area: 250.0,
        t_set_heating: 20.0,
        thermal_bridges_supplement: 0.05,
        gross_building_vol: 1900.0,
        net_building_vol: 1600.0,
        reference_vol_name: ReferenceVolume::Net,
        t_norm_ext_heating: -12.0,
        heat_rec_vent: 0.6,
        ach_min: 0.5,
        ach_infl: 0.14,
        ach_vent: 0.35,
        share_heated: 1.0,
        share_cooled: 0.8,
        share_mech_ventilated: 0.7,
        t_norm_ext_cooling_july: 32.0,
        t_norm_ext_cooling_sept: 28.0,
        gtot: 0.6,
        share_glass_frame: 0.7,
        t_set_cooling: 25.0,
        t_set_cooling_max: 26.0,
        phi_i_cooling_spec: 3.75,
    }
}

/// The canonical scenario as a JSON parameter document, for tests exercising
/// the ingestion path.
#[cfg(test)]
pub(crate) fn example_input_json() -> serde_json::Value {
    serde_json::json!({
        "net_floor_area": 500.0,
        "u_windows": 1.3,
        "u_walls": 0.28,
        "u_roof": 0.2,
        "u_base": 0.35,
        "temp_adj_base": 0.3,
        "temp_adj_walls_ug": 0.3,
        "temp_adj_roof": 1.0,
        "wall_area_og": 320.0,
        "wall_area_ug": 60.0,
        "total_window_area": 80.0,
        "roof_area": 250.0,
        "base_area": 250.0,
        "t_set_heating": 20.0,
        "thermal_bridges_supplement": 0.05,
        "gross_building_vol": 1900.0,
        "net_building_vol": 1600.0,
        "reference_vol_name": "net",
        "t_norm_ext_heating": -12.0,
        "heat_rec_vent": 0.6,
        "ach_min": 0.5,
        "ach_infl": 0.14,
        "ach_vent": 0.35,
        "share_heated": 1.0,
        "share_cooled": 0.8,
        "share_mech_ventilated": 0.7,
        "t_norm_ext_cooling_july": 32.0,
        "t_norm_ext_cooling_sept": 28.0,
        "gtot": 0.6,
        "share_glass_frame": 0.7,
        "t_set_cooling": 25.0,
        "t_set_cooling_max": 26.0,
        "phi_i_cooling_spec": 3.75
    })
}
