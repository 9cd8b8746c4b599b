fn main() {
    warsh_transform::cli::run();
}
