//! CLI argument parsing

use clap::{Parser, Subcommand};

/// Parse a string as a hex or decimal u64
fn parse_hex_u64(s: &str) -> Result<u64, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
    } else {
        s.parse::<u64>().map_err(|e| format!("Invalid number: {}", e))
    }
}

#[derive(Parser)]
#[command(name = "sfdprobe")]
#[command(author, version, about = "Inspect SFDP parameter tables", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Programmer to use, e.g. "dummy" or "dummy:image=sfdp.bin,maxread=64"
    #[arg(short, long, global = true, default_value = "dummy")]
    pub programmer: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// env_logger filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the SFDP header, table directory and known parameters
    Dump,

    /// Hex dump raw SFDP bytes (bypasses the SFDP cache)
    Read {
        /// Start offset in the SFDP address space
        #[arg(long, value_parser = parse_hex_u64, default_value = "0")]
        offset: u64,

        /// Number of bytes to read
        #[arg(long, value_parser = parse_hex_u64, default_value = "0x100")]
        length: u64,
    },

    /// Print one DWORD of a parameter table
    Dword {
        /// Table index in the parameter header directory
        #[arg(long, default_value = "0")]
        table: usize,

        /// DWORD index within the table (0-based)
        #[arg(long)]
        dword: usize,
    },

    /// Look up a named parameter (see list-params)
    Param {
        /// Parameter name
        name: String,
    },

    /// List the parameter names understood by `param`
    ListParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_u64() {
        assert_eq!(parse_hex_u64("0x10"), Ok(0x10));
        assert_eq!(parse_hex_u64("0XFF"), Ok(0xFF));
        assert_eq!(parse_hex_u64("42"), Ok(42));
        assert!(parse_hex_u64("0xZZ").is_err());
    }

    #[test]
    fn test_verbosity_sets_log_filter() {
        let cases = [
            (&["sfdprobe", "dump"][..], "info"),
            (&["sfdprobe", "-v", "dump"][..], "debug"),
            (&["sfdprobe", "dump", "-vv"][..], "trace"),
            (&["sfdprobe", "-vvv", "dump"][..], "trace"),
        ];
        for (args, want) in cases {
            let cli = Cli::try_parse_from(args).unwrap();
            assert_eq!(cli.log_filter(), want, "{:?}", args);
        }
    }

    #[test]
    fn test_parse_read_command() {
        let cli = Cli::try_parse_from(["sfdprobe", "read", "--offset", "0x10", "--length", "4"])
            .unwrap();
        assert_eq!(cli.programmer, "dummy");
        assert!(matches!(
            cli.command,
            Commands::Read {
                offset: 0x10,
                length: 4
            }
        ));
    }
}
