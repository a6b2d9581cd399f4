fn main() {
    strqueue::app::startup::startup();
}
