fn main() {
    statemap::run_app();
}
