fn main() {
    workhub_frontend::run();
}
