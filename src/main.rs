mod generator;
mod html_renderer;
mod scanner;
mod size_format;
mod types;

use chrono::Local;
use clap::Parser;
use colored::Colorize;
use std::path::Path;

/// Write index.html listing every PDF in the current directory
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    let _args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let generated_at = Local::now().naive_local();

    match generator::generate_index(Path::new("."), generated_at) {
        Ok(entries) => generator::print_summary(&entries),
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            std::process::exit(1);
        }
    }
}
