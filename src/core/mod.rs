pub mod internal_gains;
pub mod loads;
pub mod reference_area;
pub mod solar;
pub mod transmission;
pub mod ventilation;
