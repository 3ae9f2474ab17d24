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
