fn main() -> anyhow::Result<()> {
    export_splitter::cli::run()
}
