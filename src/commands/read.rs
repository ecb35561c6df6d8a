//! Read command implementation

use sfdprobe_core::flash::Flash;
use sfdprobe_core::programmer::SpiMaster;
use sfdprobe_core::sfdp::check_range;

use super::CommandResult;

/// Bytes per hex dump line
const LINE_LEN: usize = 16;

/// Hex dump `length` raw SFDP bytes starting at `offset`
pub fn run_read<M>(flash: &Flash<M>, offset: u64, length: u64) -> CommandResult
where
    M: SpiMaster,
    M::Error: std::error::Error + Clone + 'static,
{
    let length = usize::try_from(length)?;
    // Reject before allocating the buffer
    check_range::<M::Error>(offset, length)?;

    let mut buf = vec![0u8; length];
    let n = flash.read_sfdp(&mut buf, offset)?;
    for line in hex_lines(&buf[..n], offset) {
        println!("{}", line);
    }
    Ok(())
}

fn hex_lines(data: &[u8], base: u64) -> Vec<String> {
    data.chunks(LINE_LEN)
        .enumerate()
        .map(|(i, chunk)| {
            let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
            let ascii: String = chunk
                .iter()
                .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
                .collect();
            format!(
                "{:06x}  {:<width$}  |{}|",
                base + (i * LINE_LEN) as u64,
                hex.join(" "),
                ascii,
                width = LINE_LEN * 3 - 1
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfdprobe_core::sfdp::SFDP_MAX_ADDRESS;
    use sfdprobe_dummy::DummyFlash;

    #[test]
    fn test_hex_lines() {
        let lines = hex_lines(b"SFDP\x06\x01\x01\xff", 0x10);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("000010  53 46 44 50 06 01 01 ff"));
        assert!(lines[0].ends_with("|SFDP....|"));

        let lines = hex_lines(&[0u8; 20], 0);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("000010  00 00 00 00"));
    }

    #[test]
    fn test_read_out_of_range_touches_nothing() {
        let flash = Flash::new(DummyFlash::new_default());
        assert!(run_read(&flash, SFDP_MAX_ADDRESS, 2).is_err());
        assert!(run_read(&flash, u64::MAX, 0x100).is_err());
        assert!(flash.master().transfers().is_empty());

        run_read(&flash, 0, 8).unwrap();
        assert_eq!(flash.master().transfers().len(), 1);
        assert!(!flash.is_cached());
    }
}
