#[allow(non_snake_case)]
pub mod Epidemiology;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Kinetics;
#[allow(non_snake_case)]
pub mod LinearAlgebra;
#[allow(non_snake_case)]
pub mod Utils;

use Examples::kinetics_examples::kin_examples;
use Examples::linalg_examples::linalg_examples;
use simplelog::{Config, LevelFilter, SimpleLogger};

pub fn main() {
    //
    let _ = SimpleLogger::init(LevelFilter::Info, Config::default());
    let task: usize = 1;
    linalg_examples(task);
    kin_examples(0);
}
