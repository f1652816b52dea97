fn main() {
    huc::app::cli::run();
}
