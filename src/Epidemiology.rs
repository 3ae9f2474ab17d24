/// Client for the Johns Hopkins CSSE COVID-19 time-series tables: fetches the
/// wide CSV over HTTP and reshapes it into a dates-by-regions case matrix with
/// sorted region names and (for the US tables) a population vector.
pub mod case_data;
