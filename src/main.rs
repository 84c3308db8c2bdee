fn main() {
    node_spawner::game::run();
}
