fn main() -> anyhow::Result<()> {
    sketchboard::run()
}
