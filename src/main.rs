fn main() {
    std::process::exit(fauxbase::cli::execute(std::env::args_os()));
}
