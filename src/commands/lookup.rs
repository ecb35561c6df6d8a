//! DWORD and named parameter lookups

use sfdprobe_core::flash::Flash;
use sfdprobe_core::programmer::SpiMaster;
use sfdprobe_core::sfdp::{Param, FLASH_MEMORY_DENSITY, KNOWN_PARAMS};

use super::CommandResult;

/// Print DWORD `dword` of table `table`
pub fn run_dword<M>(flash: &Flash<M>, table: usize, dword: usize) -> CommandResult
where
    M: SpiMaster,
    M::Error: std::error::Error + Clone + 'static,
{
    let value = flash.dword(table, dword)?;
    println!("table {} dword {}: 0x{:08X}", table, dword, value);
    Ok(())
}

/// Print a named parameter
pub fn run_param<M>(flash: &Flash<M>, name: &str) -> CommandResult
where
    M: SpiMaster,
    M::Error: std::error::Error + Clone + 'static,
{
    let param = Param::by_name(name)
        .ok_or_else(|| format!("Unknown parameter: {} (see list-params)", name))?;

    let value = flash.param(param)?;
    if param.name == FLASH_MEMORY_DENSITY.name {
        let bytes = flash.sfdp()?.density_bytes()?;
        println!("{}: 0x{:X} ({} bytes)", param.name, value, bytes);
    } else {
        println!("{}: 0x{:X}", param.name, value);
    }
    Ok(())
}

/// List the parameters known by name
pub fn list_params() {
    println!("Known parameters:");
    println!();
    println!("{:<34} {:>6} {:>6} {:>5}", "Name", "Table", "DWORD", "Bits");
    println!("{}", "-".repeat(54));
    for param in KNOWN_PARAMS {
        println!(
            "{:<34} 0x{:04X} {:>6} {:>5}",
            param.name,
            param.table,
            param.dword + 1,
            format!("{}:{}", param.shift + param.bits - 1, param.shift)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfdprobe_dummy::DummyFlash;

    #[test]
    fn test_lookups_share_one_acquisition() {
        let flash = Flash::new(DummyFlash::new_default());
        run_dword(&flash, 0, 0).unwrap();
        let transfers = flash.master().transfers().len();

        run_param(&flash, "erase_4k_opcode").unwrap();
        run_param(&flash, "flash_memory_density").unwrap();
        assert_eq!(flash.master().transfers().len(), transfers);
    }

    #[test]
    fn test_lookup_errors() {
        let flash = Flash::new(DummyFlash::new_default());
        assert!(run_param(&flash, "bogus").is_err());
        assert!(run_dword(&flash, 7, 0).is_err());
        assert!(run_dword(&flash, 0, 1000).is_err());
    }
}
