//! Plot builders for the course material: matrix images and Arrhenius data
//! figures. Everything returns a `plotly::Plot` that the caller can `show()`
//! in a browser or write to a standalone HTML file with [`save_plot`].

use crate::Kinetics::arrhenius_data::ArrheniusFit;
use nalgebra::{DMatrix, DVector};
use plotly::common::{ColorScale, ColorScalePalette, Mode};
use plotly::layout::{Axis, Layout};
use plotly::{HeatMap, Plot, Scatter};

/// Matrix entries as nested rows for a heat-map trace, optionally as absolute
/// values. The row order is reversed so the first matrix row is drawn at the
/// top, the way an image plot draws it.
pub fn matrix_rows(mtrx: &DMatrix<f64>, absolute: bool) -> Vec<Vec<f64>> {
    let mut z: Vec<Vec<f64>> = Vec::with_capacity(mtrx.nrows());
    for i in 0..mtrx.nrows() {
        let mut row = Vec::with_capacity(mtrx.ncols());
        for j in 0..mtrx.ncols() {
            let v = mtrx[(i, j)];
            row.push(if absolute { v.abs() } else { v });
        }
        z.push(row);
    }
    z.reverse();
    z
}

fn palette_from_name(name: &str) -> Result<ColorScalePalette, String> {
    match name {
        "greys" | "grey" | "gray" => Ok(ColorScalePalette::Greys),
        "viridis" => Ok(ColorScalePalette::Viridis),
        "cividis" => Ok(ColorScalePalette::Cividis),
        "jet" => Ok(ColorScalePalette::Jet),
        "hot" => Ok(ColorScalePalette::Hot),
        "rainbow" => Ok(ColorScalePalette::Rainbow),
        "portland" => Ok(ColorScalePalette::Portland),
        "earth" => Ok(ColorScalePalette::Earth),
        "electric" => Ok(ColorScalePalette::Electric),
        "blackbody" => Ok(ColorScalePalette::Blackbody),
        "bluered" => Ok(ColorScalePalette::Bluered),
        "picnic" => Ok(ColorScalePalette::Picnic),
        "blues" => Ok(ColorScalePalette::Blues),
        "greens" => Ok(ColorScalePalette::Greens),
        "reds" => Ok(ColorScalePalette::Reds),
        _ => Err(format!("unknown color map '{}'", name)),
    }
}

/// Plots a matrix as a heat-map image. The `"bw"` color map plots absolute
/// values on a grey scale (handy for sparsity patterns); any other name is
/// looked up among the plotly palettes.
pub fn plot_matrix(
    mtrx: &DMatrix<f64>,
    color_map: &str,
    title: Option<&str>,
) -> Result<Plot, String> {
    assert!(mtrx.nrows() > 0 && mtrx.ncols() > 0, "empty matrix");

    let (z, palette) = if color_map == "bw" {
        (matrix_rows(mtrx, true), ColorScalePalette::Greys)
    } else {
        (matrix_rows(mtrx, false), palette_from_name(color_map)?)
    };
    let trace = HeatMap::new_z(z).color_scale(ColorScale::Palette(palette));
    let mut plot = Plot::new();
    plot.add_trace(trace);
    let mut layout = Layout::new();
    if let Some(t) = title {
        layout = layout.title(t);
    }
    plot.set_layout(layout);
    Ok(plot)
}

/// Marker scatter of measured rate constants against temperature.
pub fn plot_arrhenius_data(
    temp: &DVector<f64>,
    k_cte: &DVector<f64>,
) -> Result<Plot, String> {
    assert_eq!(
        temp.len(),
        k_cte.len(),
        "temp and k_cte must have the same length"
    );

    let trace = Scatter::new(
        temp.iter().copied().collect::<Vec<f64>>(),
        k_cte.iter().copied().collect::<Vec<f64>>(),
    )
    .mode(Mode::Markers)
    .name("experimental");
    let layout = Layout::new()
        .title("Arrhenius Rxn Rate Constant Data")
        .x_axis(Axis::new().title("T [K]"))
        .y_axis(Axis::new().title("k [1/s]"));
    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    Ok(plot)
}

/// Same scatter with the fitted `k(T) = A exp(-Ea / (R T))` curve drawn over
/// the measurements.
pub fn plot_arrhenius_data_with_fit(
    temp: &DVector<f64>,
    k_cte: &DVector<f64>,
    fit: &ArrheniusFit,
) -> Result<Plot, String> {
    assert!(temp.len() > 0, "no data points to draw the fit against");
    let mut plot = plot_arrhenius_data(temp, k_cte)?;
    let t_min = temp.min();
    let t_max = temp.max();
    let n_curve = 100;
    let mut ts = Vec::with_capacity(n_curve);
    let mut ks = Vec::with_capacity(n_curve);
    for i in 0..n_curve {
        let t = t_min + (t_max - t_min) * (i as f64) / ((n_curve - 1) as f64);
        ts.push(t);
        ks.push(fit.k_at(t));
    }
    let trace = Scatter::new(ts, ks).mode(Mode::Lines).name("fit");
    plot.add_trace(trace);
    Ok(plot)
}

/// Writes the plot to `file_name` as a standalone HTML document.
pub fn save_plot(plot: &Plot, file_name: &str) {
    plot.write_html(file_name);
    println!("Plot has been written to {}", file_name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_matrix_rows_reverses_and_takes_abs() {
        let mtrx = DMatrix::from_row_slice(2, 3, &[1.0, -2.0, 3.0, 4.0, 5.0, -6.0]);
        let z = matrix_rows(&mtrx, true);
        assert_eq!(z, vec![vec![4.0, 5.0, 6.0], vec![1.0, 2.0, 3.0]]);
        let z = matrix_rows(&mtrx, false);
        assert_eq!(z[1], vec![1.0, -2.0, 3.0]);
    }

    #[test]
    fn test_plot_matrix_bw_writes_html() {
        let mtrx = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, -3.0, 2.0]);
        let plot = plot_matrix(&mtrx, "bw", Some("lower-triangular")).unwrap();
        let temp_file = NamedTempFile::new().unwrap();
        let file_path = temp_file.path().to_str().unwrap();
        save_plot(&plot, file_path);
        let written = std::fs::metadata(file_path).unwrap().len();
        assert!(written > 0);
    }

    #[test]
    fn test_named_palettes() {
        let mtrx = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert!(plot_matrix(&mtrx, "viridis", None).is_ok());
        let res = plot_matrix(&mtrx, "sunburst", None);
        assert!(res.is_err());
        // Plot carries boxed traces and has no Debug, so take the error side only
        assert!(res.err().unwrap().contains("unknown color map"));
    }

    #[test]
    fn test_arrhenius_plots() {
        let temp = DVector::from_vec(vec![300.0, 400.0, 500.0]);
        let k_cte = DVector::from_vec(vec![1e-3, 1e-2, 1e-1]);
        assert!(plot_arrhenius_data(&temp, &k_cte).is_ok());
        let fit = ArrheniusFit {
            a_factor: 1.0e5,
            activation_energy: 5.0e4,
            r_cte: 8.314,
        };
        assert!(plot_arrhenius_data_with_fit(&temp, &k_cte, &fit).is_ok());
    }

    #[test]
    #[should_panic]
    fn test_mismatched_lengths_panic() {
        let temp = DVector::from_vec(vec![300.0, 400.0]);
        let k_cte = DVector::from_vec(vec![1e-3]);
        let _ = plot_arrhenius_data(&temp, &k_cte);
    }
}
