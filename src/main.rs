fn main() {
    riskdash::run();
}
