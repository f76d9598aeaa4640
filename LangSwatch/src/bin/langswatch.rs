fn main() -> anyhow::Result<()> {
    langswatch::cli::run_cli()
}
