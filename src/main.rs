use std::process::exit;

fn main() {
    if let Err(e) = rusty_contacts::prelude::run_app() {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
