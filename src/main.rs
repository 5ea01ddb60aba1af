fn main() {
    if let Err(e) = basebounties::app::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
