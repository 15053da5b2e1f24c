fn main() {
    transparency_frontend::run();
}
