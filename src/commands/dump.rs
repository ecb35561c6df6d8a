//! Dump command implementation

use sfdprobe_core::flash::Flash;
use sfdprobe_core::programmer::SpiMaster;

use super::CommandResult;

/// Print the SFDP header, table directory and known parameters
pub fn run_dump<M>(flash: &Flash<M>) -> CommandResult
where
    M: SpiMaster,
    M::Error: std::error::Error + Clone + 'static,
{
    let sfdp = flash.sfdp()?;
    print!("{}", sfdp);

    match sfdp.density_bytes() {
        Ok(size) => println!("\nFlash size: {} bytes ({})", size, format_size(size)),
        Err(e) => log::warn!("Could not decode flash density: {}", e),
    }
    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{} MiB", bytes / (1024 * 1024))
    } else if bytes >= 1024 {
        format!("{} KiB", bytes / 1024)
    } else {
        format!("{} B", bytes)
    }
}
