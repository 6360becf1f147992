fn main() {
    pooled_shooter::game::run();
}
