fn main() {
    if let Err(e) = localemend::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
