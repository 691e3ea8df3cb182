fn main() -> anyhow::Result<()> {
    segprep_lib::run()
}
