// Solar heat gains through glazing for the cooling design case. The design
// assumption (VDI 2078) is that the south-east and south-west facades are
// illuminated simultaneously and that the total window area is distributed
// evenly over four facade orientations.

/// Average maximum irradiation on the SE and SW facades in July and
/// September, in W/m²
const IS_MAX_SE_JULY: f64 = 690.;
const IS_MAX_SE_SEPT: f64 = 785.;
const IS_MAX_SW_JULY: f64 = 690.;
const IS_MAX_SW_SEPT: f64 = 791.;

/// Number of facade orientations the window area is split across
const FACADE_ORIENTATIONS: f64 = 4.;

/// Solar heat gains through windows in the cooling months, in W.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolarGains {
    /// Illuminated window area on the south-east facade, in m²
    pub window_area_illuminated_se: f64,
    /// Illuminated window area on the south-west facade, in m²
    pub window_area_illuminated_sw: f64,
    pub phi_solar_se_july: f64,
    pub phi_solar_sw_july: f64,
    pub phi_solar_tot_july: f64,
    pub phi_solar_se_sept: f64,
    pub phi_solar_sw_sept: f64,
    pub phi_solar_tot_sept: f64,
}

/// Calculate the solar gains through windows for July and September.
///
/// Arguments:
/// * `total_window_area` - total window area of the building, in m²
/// * `gtot` - total solar energy transmittance of glazing incl. sun protection
/// * `share_glass_frame` - glass share of the window area (frames gain nothing)
pub fn solar_gains(total_window_area: f64, gtot: f64, share_glass_frame: f64) -> SolarGains {
    let window_area_illuminated_se = total_window_area / FACADE_ORIENTATIONS;
    let window_area_illuminated_sw = total_window_area / FACADE_ORIENTATIONS;

    let gain = |area: f64, irradiation: f64| area * irradiation * gtot * share_glass_frame;

    let phi_solar_se_july = gain(window_area_illuminated_se, IS_MAX_SE_JULY);
    let phi_solar_sw_july = gain(window_area_illuminated_sw, IS_MAX_SW_JULY);
    let phi_solar_se_sept = gain(window_area_illuminated_se, IS_MAX_SE_SEPT);
    let phi_solar_sw_sept = gain(window_area_illuminated_sw, IS_MAX_SW_SEPT);

    SolarGains {
        window_area_illuminated_se,
        window_area_illuminated_sw,
        phi_solar_se_july,
        phi_solar_sw_july,
        phi_solar_tot_july: phi_solar_se_july + phi_solar_sw_july,
        phi_solar_se_sept,
        phi_solar_sw_sept,
        phi_solar_tot_sept: phi_solar_se_sept + phi_solar_sw_sept,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    pub fn should_split_window_area_over_four_orientations() {
        let gains = solar_gains(80., 0.6, 0.7);
        assert_eq!(gains.window_area_illuminated_se, 20.);
        assert_eq!(gains.window_area_illuminated_sw, 20.);
    }

    #[rstest]
    pub fn should_calc_per_facade_and_total_gains() {
        let gains = solar_gains(80., 0.6, 0.7);
        // 20 m² * 690 W/m² * 0.6 * 0.7
        assert_relative_eq!(gains.phi_solar_se_july, 5796.0, max_relative = 1e-12);
        assert_relative_eq!(gains.phi_solar_sw_july, 5796.0, max_relative = 1e-12);
        assert_relative_eq!(gains.phi_solar_tot_july, 11592.0, max_relative = 1e-12);
        assert_relative_eq!(gains.phi_solar_se_sept, 6594.0, max_relative = 1e-12);
        assert_relative_eq!(gains.phi_solar_sw_sept, 6644.4, max_relative = 1e-12);
        assert_relative_eq!(gains.phi_solar_tot_sept, 13238.4, max_relative = 1e-12);
    }

    #[rstest]
    pub fn should_gain_nothing_without_windows() {
        let gains = solar_gains(0., 0.6, 0.7);
        assert_eq!(gains.phi_solar_tot_july, 0.);
        assert_eq!(gains.phi_solar_tot_sept, 0.);
    }
}
