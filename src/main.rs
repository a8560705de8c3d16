fn main() {
    bevy_shooter::game::run();
}
