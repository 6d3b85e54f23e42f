use std::fmt::{Display, Formatter};

/// A minimal building description carrying only a reference area, in m².
/// Standalone utility, not part of the load-calculation path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildingModel {
    pub reference_area: f64,
}

impl Display for BuildingModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reference-Area: {}", self.reference_area)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct BuildingCalc {
    building_model: BuildingModel,
}

impl BuildingCalc {
    pub fn new(building_model: BuildingModel) -> Self {
        Self { building_model }
    }

    /// Return the reference area scaled by the fixed supplement factor of 1.5.
    pub fn calculate_area(&self) -> f64 {
        self.building_model.reference_area * 1.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    pub fn should_calc_reference_area_with_supplement() {
        let model = BuildingModel {
            reference_area: 23.,
        };
        let calc = BuildingCalc::new(model);
        assert_eq!(
            calc.calculate_area(),
            34.5,
            "calculated area should equal 34.5"
        );
    }

    #[rstest]
    pub fn should_display_reference_area() {
        let model = BuildingModel {
            reference_area: 23.,
        };
        assert_eq!(model.to_string(), "Reference-Area: 23");
    }
}
