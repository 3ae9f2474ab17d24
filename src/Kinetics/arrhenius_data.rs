//! # Arrhenius Experimental Data
//!
//! ## Aim
//! Reader and container for tabulated rate-constant measurements `k(T)` of the
//! kind handed out in reaction-kinetics lab exercises, plus a least-squares fit
//! of the Arrhenius expression `k = A exp(-Ea / (R T))` to those measurements.
//!
//! ## Data file format
//! Plain text; `#` starts a comment line, `r_cte = <value> <units>` gives the
//! universal gas constant used by the lab sheet, `n_pts = <count>` announces the
//! number of measurements, every other line is a whitespace-separated
//! `temperature rate-constant` pair:
//! ```text
//! # thermal decomposition of HNO3
//! r_cte = 8.314 J/mol/K
//! n_pts = 5
//! 300.0 1.0e-3
//! 350.0 8.5e-3
//! ...
//! ```
//! The point count is validated against `n_pts` after the scan, so truncated
//! files are caught instead of silently producing short vectors.

use log::{info, warn};
use nalgebra::DVector;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrheniusError {
    #[error("file '{0}' does not exist")]
    FileNotFound(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing '{0}' line in data file")]
    MissingKey(&'static str),
    #[error("data line {line_no} corrupted: '{content}'")]
    MalformedLine { line_no: usize, content: String },
    #[error("inconsistent file: n_pts = {expected}, data points found = {found}")]
    PointCountMismatch { expected: usize, found: usize },
    #[error("at least two data points are needed for a fit, got {0}")]
    NotEnoughPoints(usize),
    #[error("non-positive temperature or rate constant at point {0}; cannot take logarithms")]
    NonPositiveData(usize),
    #[error("temperature values are all equal; activation energy is undetermined")]
    DegenerateData,
}

/// Tabulated rate-constant measurements together with the gas constant the
/// data sheet was written against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusData {
    pub r_cte: f64,
    pub r_cte_units: String,
    pub n_pts: usize,
    pub temp: DVector<f64>,
    pub k_cte: DVector<f64>,
}

/// Result of a least-squares Arrhenius fit, `k(T) = a_factor * exp(-activation_energy / (r_cte * T))`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusFit {
    pub a_factor: f64,
    pub activation_energy: f64,
    pub r_cte: f64,
}

impl ArrheniusFit {
    /// Rate constant predicted by the fitted expression at `temp`.
    pub fn k_at(&self, temp: f64) -> f64 {
        self.a_factor * (-self.activation_energy / (self.r_cte * temp)).exp()
    }
}

/// Reads an Arrhenius experimental data file (see the module docs for the
/// format). Comment and blank lines are skipped; unknown `key = value` lines
/// are logged and ignored so annotated hand-outs still parse.
pub fn read_arrhenius_experimental_data(file_name: &str) -> Result<ArrheniusData, ArrheniusError> {
    let path = Path::new(file_name);
    if !path.exists() {
        return Err(ArrheniusError::FileNotFound(file_name.to_string()));
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut r_cte: Option<(f64, String)> = None;
    let mut n_pts: Option<usize> = None;
    let mut temp: Vec<f64> = Vec::new();
    let mut k_cte: Vec<f64> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let line_no = i + 1;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once(" = ") {
            match key.trim() {
                "r_cte" => {
                    let mut parts = value.split_whitespace();
                    let cte = parts
                        .next()
                        .and_then(|s| s.parse::<f64>().ok())
                        .ok_or_else(|| ArrheniusError::MalformedLine {
                            line_no,
                            content: line.to_string(),
                        })?;
                    let units = parts.next().ok_or_else(|| ArrheniusError::MalformedLine {
                        line_no,
                        content: line.to_string(),
                    })?;
                    r_cte = Some((cte, units.to_string()));
                }
                "n_pts" => {
                    let count = value.trim().parse::<usize>().map_err(|_| {
                        ArrheniusError::MalformedLine {
                            line_no,
                            content: line.to_string(),
                        }
                    })?;
                    n_pts = Some(count);
                }
                other => {
                    warn!("unknown key '{}' at line {} skipped", other, line_no);
                }
            }
            continue;
        }
        let data: Vec<&str> = line.split_whitespace().collect();
        if data.len() != 2 {
            return Err(ArrheniusError::MalformedLine {
                line_no,
                content: line.to_string(),
            });
        }
        let t = data[0]
            .parse::<f64>()
            .map_err(|_| ArrheniusError::MalformedLine {
                line_no,
                content: line.to_string(),
            })?;
        let k = data[1]
            .parse::<f64>()
            .map_err(|_| ArrheniusError::MalformedLine {
                line_no,
                content: line.to_string(),
            })?;
        temp.push(t);
        k_cte.push(k);
    }

    let (r_cte, r_cte_units) = r_cte.ok_or(ArrheniusError::MissingKey("r_cte"))?;
    let n_pts = n_pts.ok_or(ArrheniusError::MissingKey("n_pts"))?;
    if temp.len() != n_pts {
        return Err(ArrheniusError::PointCountMismatch {
            expected: n_pts,
            found: temp.len(),
        });
    }
    info!(
        "read {} Arrhenius data points from '{}' (R = {} {})",
        n_pts, file_name, r_cte, r_cte_units
    );
    Ok(ArrheniusData {
        r_cte,
        r_cte_units,
        n_pts,
        temp: DVector::from_vec(temp),
        k_cte: DVector::from_vec(k_cte),
    })
}

impl ArrheniusData {
    /// Least-squares fit of `ln k` against `1/T`. The slope gives the
    /// activation energy (through the file's own gas constant), the intercept
    /// the pre-exponential factor.
    pub fn fit(&self) -> Result<ArrheniusFit, ArrheniusError> {
        let n = self.temp.len();
        if n < 2 {
            return Err(ArrheniusError::NotEnoughPoints(n));
        }
        for i in 0..n {
            if self.temp[i] <= 0.0 || self.k_cte[i] <= 0.0 {
                return Err(ArrheniusError::NonPositiveData(i));
            }
        }
        let xs: Vec<f64> = (0..n).map(|i| 1.0 / self.temp[i]).collect();
        let ys: Vec<f64> = (0..n).map(|i| self.k_cte[i].ln()).collect();
        let x_mean = xs.iter().sum::<f64>() / n as f64;
        let y_mean = ys.iter().sum::<f64>() / n as f64;
        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for i in 0..n {
            sxx += (xs[i] - x_mean) * (xs[i] - x_mean);
            sxy += (xs[i] - x_mean) * (ys[i] - y_mean);
        }
        if sxx == 0.0 {
            return Err(ArrheniusError::DegenerateData);
        }
        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;
        let fit = ArrheniusFit {
            a_factor: intercept.exp(),
            activation_energy: -slope * self.r_cte,
            r_cte: self.r_cte,
        };
        info!(
            "Arrhenius fit: A = {:.6e}, Ea = {:.6e} ({} per mol basis)",
            fit.a_factor, fit.activation_energy, self.r_cte_units
        );
        Ok(fit)
    }

    /// Prints the measurement table and the gas constant line to stdout.
    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("i"),
            Cell::new("T"),
            Cell::new("k"),
        ]));
        for i in 0..self.temp.len() {
            table.add_row(Row::new(vec![
                Cell::new(&i.to_string()),
                Cell::new(&format!("{}", self.temp[i])),
                Cell::new(&format!("{:e}", self.k_cte[i])),
            ]));
        }
        table.printstd();
        println!("r_cte = {} {}", self.r_cte, self.r_cte_units);
        println!("n_pts = {}", self.n_pts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_sample_file() -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "# thermal decomposition rate data").unwrap();
        writeln!(temp_file, "# column 1: temperature, column 2: rate constant").unwrap();
        writeln!(temp_file, "r_cte = 8.314 J/mol/K").unwrap();
        writeln!(temp_file, "n_pts = 5").unwrap();
        writeln!(temp_file, "300.0 1.5e-3").unwrap();
        writeln!(temp_file, "350.0 8.5e-3").unwrap();
        writeln!(temp_file, "400.0 3.2e-2").unwrap();
        writeln!(temp_file, "450.0 9.1e-2").unwrap();
        writeln!(temp_file, "500.0 2.1e-1").unwrap();
        temp_file
    }

    #[test]
    fn test_read_arrhenius_data() {
        let temp_file = write_sample_file();
        let file_path = temp_file.path().to_str().unwrap();
        let data = read_arrhenius_experimental_data(file_path).unwrap();
        println!("{:?}", data);
        assert_eq!(data.r_cte, 8.314);
        assert_eq!(data.r_cte_units, "J/mol/K");
        assert_eq!(data.n_pts, 5);
        assert_eq!(data.temp.len(), 5);
        assert_eq!(data.temp[0], 300.0);
        assert_eq!(data.k_cte[4], 2.1e-1);
        data.pretty_print();
    }

    #[test]
    fn test_missing_n_pts_key() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "r_cte = 8.314 J/mol/K").unwrap();
        writeln!(temp_file, "300.0 1.5e-3").unwrap();
        let res = read_arrhenius_experimental_data(temp_file.path().to_str().unwrap());
        assert!(matches!(res, Err(ArrheniusError::MissingKey("n_pts"))));
    }

    #[test]
    fn test_corrupted_data_line() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "r_cte = 8.314 J/mol/K").unwrap();
        writeln!(temp_file, "n_pts = 2").unwrap();
        writeln!(temp_file, "300.0 1.5e-3 extra").unwrap();
        let res = read_arrhenius_experimental_data(temp_file.path().to_str().unwrap());
        assert!(matches!(
            res,
            Err(ArrheniusError::MalformedLine { line_no: 3, .. })
        ));
    }

    #[test]
    fn test_point_count_mismatch() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "r_cte = 8.314 J/mol/K").unwrap();
        writeln!(temp_file, "n_pts = 3").unwrap();
        writeln!(temp_file, "300.0 1.5e-3").unwrap();
        writeln!(temp_file, "350.0 8.5e-3").unwrap();
        let res = read_arrhenius_experimental_data(temp_file.path().to_str().unwrap());
        assert!(matches!(
            res,
            Err(ArrheniusError::PointCountMismatch {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_file_not_found() {
        let res = read_arrhenius_experimental_data("no_such_arrhenius_file.txt");
        assert!(matches!(res, Err(ArrheniusError::FileNotFound(_))));
    }

    #[test]
    fn test_fit_recovers_known_parameters() {
        let r_cte = 8.314;
        let a_factor = 1.2e10;
        let activation_energy = 1.0e5;
        let temp: Vec<f64> = (0..8).map(|i| 300.0 + 50.0 * i as f64).collect();
        let k_cte: Vec<f64> = temp
            .iter()
            .map(|t| a_factor * (-activation_energy / (r_cte * t)).exp())
            .collect();
        let data = ArrheniusData {
            r_cte,
            r_cte_units: "J/mol/K".to_string(),
            n_pts: temp.len(),
            temp: DVector::from_vec(temp),
            k_cte: DVector::from_vec(k_cte),
        };
        let fit = data.fit().unwrap();
        println!("A = {:e}, Ea = {:e}", fit.a_factor, fit.activation_energy);
        assert_relative_eq!(fit.a_factor, a_factor, max_relative = 1e-8);
        assert_relative_eq!(fit.activation_energy, activation_energy, max_relative = 1e-8);
        let predicted = fit.k_at(500.0);
        let exact = a_factor * (-activation_energy / (r_cte * 500.0)).exp();
        assert_relative_eq!(predicted, exact, max_relative = 1e-8);
    }

    #[test]
    fn test_fit_rejects_degenerate_data() {
        let data = ArrheniusData {
            r_cte: 8.314,
            r_cte_units: "J/mol/K".to_string(),
            n_pts: 3,
            temp: DVector::from_vec(vec![400.0, 400.0, 400.0]),
            k_cte: DVector::from_vec(vec![1.0e-2, 1.1e-2, 0.9e-2]),
        };
        assert!(matches!(data.fit(), Err(ArrheniusError::DegenerateData)));
    }

    #[test]
    fn test_fit_rejects_non_positive_values() {
        let data = ArrheniusData {
            r_cte: 8.314,
            r_cte_units: "J/mol/K".to_string(),
            n_pts: 2,
            temp: DVector::from_vec(vec![300.0, 400.0]),
            k_cte: DVector::from_vec(vec![1.0e-2, -1.0]),
        };
        assert!(matches!(
            data.fit(),
            Err(ArrheniusError::NonPositiveData(1))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let temp_file = write_sample_file();
        let data = read_arrhenius_experimental_data(temp_file.path().to_str().unwrap()).unwrap();
        let doc = serde_json::to_string_pretty(&data).unwrap();
        let back: ArrheniusData = serde_json::from_str(&doc).unwrap();
        assert_eq!(data, back);
    }
}
