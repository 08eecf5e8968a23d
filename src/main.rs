fn main() -> anyhow::Result<()> {
    radixmux::cli::run_cli()
}
