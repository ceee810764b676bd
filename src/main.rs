use crate::cli::run;

pub mod cli;
mod config;
pub mod domain;
pub mod http;
pub mod query;
pub mod storage;
pub mod view;

fn main() {
    run();
}
