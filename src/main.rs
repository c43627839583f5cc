// src/main.rs

use rust_native_typegen::runtime_interface;

fn main() {
    if let Err(e) = runtime_interface::run_cli() {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
