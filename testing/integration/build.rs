fn main() -> Result<(), Box<dyn std::error::Error>> {
    enumclass::build!()?;

    Ok(())
}
