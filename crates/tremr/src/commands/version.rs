pub fn run() -> anyhow::Result<()> {
    println!("tremr {}", env!("CARGO_PKG_VERSION"));
    println!("Earthquake monitor for PHIVOLCS bulletins");
    Ok(())
}
