/// Reader and least-squares fit for tabulated Arrhenius rate-constant
/// measurements `k(T)` of the kind handed out in kinetics lab exercises.
///
///  # Examples
/// ```rust, ignore
/// use ChEnHelp::Kinetics::arrhenius_data::read_arrhenius_experimental_data;
/// let data = read_arrhenius_experimental_data("arrhenius-carbon-data.dat").unwrap();
/// data.pretty_print();
/// let fit = data.fit().unwrap();
/// println!("A = {:e}, Ea = {:e}", fit.a_factor, fit.activation_energy);
/// ```
pub mod arrhenius_data;
/// table printouts for reaction mechanisms and scored sub-mechanism reports
pub mod reaction_printer;
