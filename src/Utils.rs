/// fixed primary-color palette extended to any length by midpoint interpolation
pub mod color_map;
/// plotly figures for matrices and Arrhenius data, written out as HTML
pub mod plotting;
