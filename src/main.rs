fn main() -> anyhow::Result<()> {
    scenegen_rust::run()
}
