//! # COVID-19 Case Series Client
//!
//! ## Aim
//! Fetches the Johns Hopkins CSSE COVID-19 time-series tables (the data set
//! used in the course's data-analysis exercises) and reshapes the wide CSV
//! into a dates-by-regions matrix ready for plotting or fitting. Sub-region
//! rows (counties, provinces) are summed into their region, region names come
//! back sorted, and the global series can be returned either cumulative or as
//! a day-by-day distribution.
//!
//! ## Main Data Structures and Logic
//! - `HttpClient` trait: dependency injection for the HTTP layer (enables
//!   mocking in tests); implemented for the blocking `reqwest` client
//! - `CaseDataClient<C>`: generic client with `get_us_data()` /
//!   `get_global_data()` entry points
//! - `CaseSeries`: sorted region names, optional per-region population (US
//!   series only; the column lives in the deaths table, so the confirmed
//!   series fetches the deaths table too just for it), date labels and the
//!   case matrix (dates x regions)
//! - Only two columns of the remote schema are interpreted: the region column
//!   (found by name) and the date columns (recognized by their `m/d/yy`
//!   headers); everything else is ignored, so upstream schema drift in the
//!   untouched columns does not break the reshaping
//!
//! ## Usage
//! ```rust, ignore
//! let client = CaseDataClient::new();
//! let series = client.get_us_data(CaseType::Deaths)?;
//! series.pretty_print_totals();
//! let global = client.get_global_data(CaseType::Confirmed, SeriesForm::Distribution)?;
//! println!("{} regions, {} dates", global.regions.len(), global.dates.len());
//! ```

use log::{info, warn};
use nalgebra::DMatrix;
use regex::Regex;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Write;
use thiserror::Error;
use url::Url;

pub const US_DEATHS_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series/time_series_covid19_deaths_US.csv";
pub const US_CONFIRMED_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series/time_series_covid19_confirmed_US.csv";
pub const GLOBAL_DEATHS_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series/time_series_covid19_deaths_global.csv";
pub const GLOBAL_CONFIRMED_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series/time_series_covid19_confirmed_global.csv";

/// HTTP client trait for dependency injection
pub trait HttpClient {
    fn get_text(&self, url: &str) -> Result<String, reqwest::Error>;
}

// Implementation for the real reqwest client
impl HttpClient for Client {
    fn get_text(&self, url: &str) -> Result<String, reqwest::Error> {
        self.get(url).send()?.text()
    }
}

#[derive(Debug, Error)]
pub enum CaseDataError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("column '{0}' not found in the served table")]
    MissingColumn(String),
    #[error("no date-like columns found in the served table")]
    NoDateColumns,
    #[error("bad number '{value}' at line {line}, column '{col}'")]
    BadNumber {
        line: usize,
        col: String,
        value: String,
    },
}

/// Which time series to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseType {
    #[default]
    Deaths,
    Confirmed,
}

impl CaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseType::Deaths => "deaths",
            CaseType::Confirmed => "confirmed",
        }
    }
}

/// Shape of the returned series: the raw running totals, or the day-by-day
/// counts recovered from them by a rounded central-difference gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesForm {
    #[default]
    Distribution,
    Cumulative,
}

/// Reshaped case-count table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSeries {
    /// sorted, deduplicated region names
    pub regions: Vec<String>,
    /// per-region population, present for the US tables only
    pub population: Option<Vec<f64>>,
    /// date labels exactly as served, `m/d/yy`
    pub dates: Vec<String>,
    /// case counts, one row per date and one column per region
    pub cases: DMatrix<f64>,
}

pub struct CaseDataClient<C: HttpClient> {
    client: C,
}

impl CaseDataClient<Client> {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for CaseDataClient<Client> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> CaseDataClient<C> {
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    /// US state-level series. County rows are summed into their state and the
    /// state population vector is carried along. Only the deaths table has a
    /// `Population` column, so the confirmed series takes its population from a
    /// second fetch of the deaths table.
    pub fn get_us_data(&self, case_type: CaseType) -> Result<CaseSeries, CaseDataError> {
        let url = Url::parse(match case_type {
            CaseType::Deaths => US_DEATHS_URL,
            CaseType::Confirmed => US_CONFIRMED_URL,
        })?;
        info!("fetching US {} series from {}", case_type.as_str(), url);
        let text = self.client.get_text(url.as_str())?;
        match case_type {
            CaseType::Deaths => reshape_wide_table(&text, "Province_State", Some("Population")),
            CaseType::Confirmed => {
                let mut series = reshape_wide_table(&text, "Province_State", None)?;
                let deaths_url = Url::parse(US_DEATHS_URL)?;
                let deaths_text = self.client.get_text(deaths_url.as_str())?;
                let deaths =
                    reshape_wide_table(&deaths_text, "Province_State", Some("Population"))?;
                series.population = population_by_region(&series.regions, &deaths);
                Ok(series)
            }
        }
    }

    /// Country-level series. Province rows are summed into their country; the
    /// `Distribution` form replaces the running totals with rounded day-by-day
    /// counts.
    pub fn get_global_data(
        &self,
        case_type: CaseType,
        form: SeriesForm,
    ) -> Result<CaseSeries, CaseDataError> {
        let url = Url::parse(match case_type {
            CaseType::Deaths => GLOBAL_DEATHS_URL,
            CaseType::Confirmed => GLOBAL_CONFIRMED_URL,
        })?;
        info!("fetching global {} series from {}", case_type.as_str(), url);
        let text = self.client.get_text(url.as_str())?;
        let mut series = reshape_wide_table(&text, "Country/Region", None)?;
        if let SeriesForm::Distribution = form {
            series.cases = rounded_gradient(&series.cases);
        }
        Ok(series)
    }
}

/// Collapses a wide time-series CSV into a `CaseSeries`: rows are grouped and
/// summed by the value of `region_col`, date columns are recognized by their
/// `m/d/yy` headers, every other column is ignored. Empty count cells are
/// treated as zero (the served tables leave early dates blank for some rows).
pub fn reshape_wide_table(
    csv_text: &str,
    region_col: &str,
    population_col: Option<&str>,
) -> Result<CaseSeries, CaseDataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());
    let headers = reader.headers()?.clone();
    let region_idx = headers
        .iter()
        .position(|h| h == region_col)
        .ok_or_else(|| CaseDataError::MissingColumn(region_col.to_string()))?;
    let population_idx = match population_col {
        Some(name) => Some(
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| CaseDataError::MissingColumn(name.to_string()))?,
        ),
        None => None,
    };
    let date_re = Regex::new(r"^\d{1,2}/\d{1,2}/\d{2,4}$").unwrap();
    let date_cols: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| date_re.is_match(h))
        .map(|(i, _)| i)
        .collect();
    if date_cols.is_empty() {
        return Err(CaseDataError::NoDateColumns);
    }
    let dates: Vec<String> = date_cols.iter().map(|&i| headers[i].to_string()).collect();

    // BTreeMap keeps the region names sorted
    let mut totals: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    let mut populations: BTreeMap<String, f64> = BTreeMap::new();
    for (row_no, record) in reader.records().enumerate() {
        let record = record?;
        // header is line 1 of the file
        let line = row_no + 2;
        let region = record.get(region_idx).unwrap_or("").trim().to_string();
        if region.is_empty() {
            warn!("line {} has an empty region name, skipped", line);
            continue;
        }
        let entry = totals
            .entry(region.clone())
            .or_insert_with(|| vec![0.0; date_cols.len()]);
        for (k, &ci) in date_cols.iter().enumerate() {
            let raw = record.get(ci).unwrap_or("").trim();
            if raw.is_empty() {
                continue;
            }
            let value = raw
                .parse::<f64>()
                .map_err(|_| CaseDataError::BadNumber {
                    line,
                    col: headers[ci].to_string(),
                    value: raw.to_string(),
                })?;
            entry[k] += value;
        }
        if let Some(pi) = population_idx {
            let raw = record.get(pi).unwrap_or("").trim();
            if !raw.is_empty() {
                let value = raw
                    .parse::<f64>()
                    .map_err(|_| CaseDataError::BadNumber {
                        line,
                        col: headers[pi].to_string(),
                        value: raw.to_string(),
                    })?;
                *populations.entry(region).or_insert(0.0) += value;
            }
        }
    }

    let regions: Vec<String> = totals.keys().cloned().collect();
    let mut cases = DMatrix::zeros(dates.len(), regions.len());
    for (j, region) in regions.iter().enumerate() {
        let series = &totals[region];
        for i in 0..dates.len() {
            cases[(i, j)] = series[i];
        }
    }
    let population = population_idx.map(|_| {
        regions
            .iter()
            .map(|r| populations.get(r).copied().unwrap_or(0.0))
            .collect()
    });
    info!(
        "reshaped case table: {} regions, {} dates",
        regions.len(),
        dates.len()
    );
    Ok(CaseSeries {
        regions,
        population,
        dates,
        cases,
    })
}

// Population for `regions` looked up by name in the deaths series; a region
// the deaths table does not know gets 0.
fn population_by_region(regions: &[String], deaths: &CaseSeries) -> Option<Vec<f64>> {
    let pop = deaths.population.as_ref()?;
    let by_name: HashMap<&str, f64> = deaths
        .regions
        .iter()
        .zip(pop.iter())
        .map(|(region, &p)| (region.as_str(), p))
        .collect();
    Some(
        regions
            .iter()
            .map(|region| by_name.get(region.as_str()).copied().unwrap_or(0.0))
            .collect(),
    )
}

/// Rounded central-difference gradient along the date axis: one-sided
/// differences at the first and last date, `(next - previous) / 2` in between.
/// A series with fewer than two dates has no meaningful gradient and comes
/// back as zeros.
pub fn rounded_gradient(cases: &DMatrix<f64>) -> DMatrix<f64> {
    let (n_dates, n_regions) = cases.shape();
    let mut grad = DMatrix::zeros(n_dates, n_regions);
    if n_dates < 2 {
        return grad;
    }
    for j in 0..n_regions {
        grad[(0, j)] = (cases[(1, j)] - cases[(0, j)]).round();
        for i in 1..(n_dates - 1) {
            grad[(i, j)] = ((cases[(i + 1, j)] - cases[(i - 1, j)]) / 2.0).round();
        }
        grad[(n_dates - 1, j)] = (cases[(n_dates - 1, j)] - cases[(n_dates - 2, j)]).round();
    }
    grad
}

impl CaseSeries {
    /// Writes the series to `file_name` as a pretty-printed JSON document.
    pub fn save_json(&self, file_name: &str) -> Result<(), std::io::Error> {
        let mut file = File::create(file_name)?;
        file.write_all(serde_json::to_string_pretty(&self)?.as_bytes())?;
        println!("Case series has been written to {}", file_name);
        Ok(())
    }

    /// Prints a per-region summary table: the count at the last date, and the
    /// population when the series carries one.
    pub fn pretty_print_totals(&self) {
        use prettytable::{Cell, Row, Table};
        let mut table = Table::new();
        let last_date = match self.dates.last() {
            Some(d) => d.clone(),
            None => return,
        };
        let mut header = vec![Cell::new("region"), Cell::new(&format!("total ({})", last_date))];
        if self.population.is_some() {
            header.push(Cell::new("population"));
        }
        table.add_row(Row::new(header));
        let last_row = self.dates.len() - 1;
        for (j, region) in self.regions.iter().enumerate() {
            let mut row = vec![
                Cell::new(region),
                Cell::new(&format!("{}", self.cases[(last_row, j)])),
            ];
            if let Some(pop) = &self.population {
                row.push(Cell::new(&format!("{}", pop[j])));
            }
            table.add_row(Row::new(row));
        }
        table.printstd();
        println!("n_regions = {}", self.regions.len());
    }
}
