/// Return the internal gains for the cooling case, in W.
///
/// Internal loads from occupants, equipment and lighting are modelled as an
/// areal specific load (DIN V 18599-10 standard values, e.g. 3.75 W/m² for
/// apartment buildings) scaled by the net floor area; there is no time
/// dependency in the steady-state design case.
pub fn internal_gains_in_w(phi_i_cooling_spec: f64, net_floor_area: f64) -> f64 {
    phi_i_cooling_spec * net_floor_area
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    pub fn should_scale_specific_load_by_floor_area() {
        assert_eq!(internal_gains_in_w(3.75, 500.), 1875.);
    }

    #[rstest]
    pub fn should_be_zero_for_zero_area() {
        assert_eq!(internal_gains_in_w(3.75, 0.), 0.);
    }
}
