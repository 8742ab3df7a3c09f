use std::{env, process};

use env_logger::Env;

const DEFAULT_LOGGING_LEVEL: &str = "info";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    let args: Vec<String> = env::args().skip(1).collect();
    process::exit(plot_outline::run(&args));
}
