use crate::Epidemiology::case_data::{CaseDataClient, CaseType, SeriesForm};

pub fn case_data_examples(task: usize) {
    match task {
        0 => {
            // US STATE-LEVEL DEATH TOTALS (network fetch)
            let client = CaseDataClient::new();
            match client.get_us_data(CaseType::Deaths) {
                Ok(series) => {
                    println!(
                        "{} states, {} dates, first date {}",
                        series.regions.len(),
                        series.dates.len(),
                        series.dates.first().unwrap_or(&String::new())
                    );
                    series.pretty_print_totals();
                    series
                        .save_json("covid19_us_deaths.json")
                        .expect("Error writing the series document");
                }
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        1 => {
            // GLOBAL DAY-BY-DAY CONFIRMED CASES WITH COLORED CURVES (network fetch)
            use crate::Utils::color_map::color_map;
            use crate::Utils::plotting::save_plot;
            use plotly::color::Rgb;
            use plotly::common::{Line, Mode};
            use plotly::layout::{Axis, Layout};
            use plotly::{Plot, Scatter};

            let client = CaseDataClient::new();
            match client.get_global_data(CaseType::Confirmed, SeriesForm::Distribution) {
                Ok(series) => {
                    let n_curves = series.regions.len().min(5);
                    let palette = color_map(n_curves.max(1));
                    let day_ids: Vec<f64> = (0..series.dates.len()).map(|i| i as f64).collect();
                    let mut plot = Plot::new();
                    for j in 0..n_curves {
                        let counts: Vec<f64> =
                            (0..series.dates.len()).map(|i| series.cases[(i, j)]).collect();
                        let [r, g, b, _] = palette[j];
                        let line_color = Rgb::new(
                            (r * 255.0) as u8,
                            (g * 255.0) as u8,
                            (b * 255.0) as u8,
                        );
                        let trace = Scatter::new(day_ids.clone(), counts)
                            .mode(Mode::Lines)
                            .name(&series.regions[j])
                            .line(Line::new().color(line_color));
                        plot.add_trace(trace);
                    }
                    plot.set_layout(
                        Layout::new()
                            .title("COVID-19 daily confirmed cases")
                            .x_axis(Axis::new().title("day"))
                            .y_axis(Axis::new().title("cases")),
                    );
                    save_plot(&plot, "covid19_global_confirmed.html");
                }
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        _ => {
            println!("non existing examples");
        }
    }
}
