fn main() {
    if let Err(e) = kwbar::cli::run() {
        eprintln!("kwbar: {e}");
        std::process::exit(1);
    }
}
