use colored::Colorize;
use std::io;

use structural_patterns::demo;

fn main() {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Exit status stays 0 even when stdout goes away.
    if let Err(err) = demo::run_default(&mut out) {
        eprintln!("{} {}", "error:".red().bold(), err);
    }
}
