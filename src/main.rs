fn main() -> anyhow::Result<()> {
    bootrecov::cli::run()
}
