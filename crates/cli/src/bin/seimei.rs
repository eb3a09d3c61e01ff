use anyhow::Result;

fn main() -> Result<()> {
    seimei_cli::main_entry()
}
