/// COVID-19 case-series walkthroughs; these tasks fetch the real remote tables
pub mod case_data_examples;
/// Arrhenius data reading/fitting and mechanism printout walkthroughs
pub mod kinetics_examples;
/// triangular matrix construction and forward substitution walkthroughs
pub mod linalg_examples;
