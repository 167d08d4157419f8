fn main() {
    voxel_sandbox::run();
}
