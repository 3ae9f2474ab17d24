pub fn kin_examples(task: usize) {
    //
    match task {
        0 => {
            // READING AND FITTING ARRHENIUS EXPERIMENTAL DATA
            use crate::Kinetics::arrhenius_data::read_arrhenius_experimental_data;
            use crate::Utils::plotting::{plot_arrhenius_data_with_fit, save_plot};
            use std::io::Write;
            use tempfile::NamedTempFile;

            // a data sheet like the ones handed out in the lab
            let mut data_file = NamedTempFile::new().unwrap();
            writeln!(data_file, "# gas-phase decomposition, borrowed lab data").unwrap();
            writeln!(data_file, "r_cte = 8.314 J/mol/K").unwrap();
            writeln!(data_file, "n_pts = 6").unwrap();
            writeln!(data_file, "300.0 2.1e-4").unwrap();
            writeln!(data_file, "350.0 3.0e-3").unwrap();
            writeln!(data_file, "400.0 2.2e-2").unwrap();
            writeln!(data_file, "450.0 1.1e-1").unwrap();
            writeln!(data_file, "500.0 4.0e-1").unwrap();
            writeln!(data_file, "550.0 1.1e0").unwrap();

            let data =
                read_arrhenius_experimental_data(data_file.path().to_str().unwrap()).unwrap();
            data.pretty_print();
            let fit = data.fit().unwrap();
            println!(
                "fitted a_factor = {:e}, activation_energy = {:e} {}",
                fit.a_factor, fit.activation_energy, data.r_cte_units
            );
            println!("predicted k at 425 K: {:e}", fit.k_at(425.0));
            let plot = plot_arrhenius_data_with_fit(&data.temp, &data.k_cte, &fit).unwrap();
            save_plot(&plot, "arrhenius_fit.html");
        }
        1 => {
            // PRINTING A REACTION MECHANISM AND ITS SCORED SUB-MECHANISMS
            use crate::Kinetics::reaction_printer::{
                MechanismPrintMode, ScoredMechanism, print_reaction_sub_mechanisms,
                print_reactions, save_mechanisms_json,
            };

            let reactions = vec![
                "NO2 + NO2 <=> NO3 + NO".to_string(),
                "NO3 + CO <=> NO2 + CO2".to_string(),
                "NO2 + CO <=> NO + CO2".to_string(),
            ];
            print_reactions(&reactions);

            let mechs = vec![
                ScoredMechanism {
                    reaction_ids: vec![0, 1],
                    reactions: reactions[0..2].to_vec(),
                    substances: vec![
                        "NO2".to_string(),
                        "NO3".to_string(),
                        "NO".to_string(),
                        "CO".to_string(),
                        "CO2".to_string(),
                    ],
                    score: 1.0,
                },
                ScoredMechanism {
                    reaction_ids: vec![2],
                    reactions: reactions[2..3].to_vec(),
                    substances: vec![
                        "NO2".to_string(),
                        "CO".to_string(),
                        "NO".to_string(),
                        "CO2".to_string(),
                    ],
                    score: 0.5,
                },
            ];
            print_reaction_sub_mechanisms(&mechs, Some(MechanismPrintMode::Top), None).unwrap();
            save_mechanisms_json(&mechs, "sub_mechanisms.json").unwrap();
        }
        _ => {
            println!("Wrong task number");
        }
    }
}
