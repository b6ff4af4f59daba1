//! Argument surface for the forcecrc32 binary

use std::path::{Path, PathBuf};

use clap::Parser;

/// Parses an 8-hex-digit CRC-32 value, the conventional way checksum
/// fields are written down.
fn parse_crc32(s: &str) -> Result<u32, String> {
    // from_str_radix would also accept a leading '+', so check the digits
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!(
            "'{s}' must be exactly 8 hexadecimal digits (e.g. DEADBEEF)"
        ));
    }
    u32::from_str_radix(s, 16)
        .map_err(|_| format!("'{s}' is not a valid hexadecimal CRC-32 value"))
}

#[derive(Parser)]
#[command(name = "forcecrc32")]
#[command(
    about = "Patch 4 bytes of a file so its CRC-32 becomes a chosen value",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// File to patch in place
    #[arg(required_unless_present = "completions")]
    pub file: Option<PathBuf>,

    /// Byte offset of the 4-byte region to modify (decimal)
    #[arg(required_unless_present = "completions")]
    pub offset: Option<u64>,

    /// Desired CRC-32 value as 8 hexadecimal digits
    #[arg(value_parser = parse_crc32, required_unless_present = "completions")]
    pub new_crc: Option<u32>,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(
        long,
        value_enum,
        value_name = "SHELL",
        conflicts_with_all = ["file", "offset", "new_crc"]
    )]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// The three patch arguments. Present whenever `--completions` was not
    /// given; clap enforces this.
    pub fn patch_args(&self) -> Option<(&Path, u64, u32)> {
        Some((self.file.as_deref()?, self.offset?, self.new_crc?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_hex() {
        assert_eq!(parse_crc32("DEADBEEF"), Ok(0xDEAD_BEEF));
        assert_eq!(parse_crc32("deadbeef"), Ok(0xDEAD_BEEF));
        assert_eq!(parse_crc32("00000000"), Ok(0));
    }

    #[test]
    fn rejects_wrong_length_or_garbage() {
        assert!(parse_crc32("").is_err());
        assert!(parse_crc32("DEAD").is_err());
        assert!(parse_crc32("DEADBEEF0").is_err());
        assert!(parse_crc32("DEADBEEG").is_err());
        assert!(parse_crc32("+1ADBEEF").is_err());
    }

    #[test]
    fn clap_surface_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn patch_args_present_without_completions() {
        let cli = Cli::try_parse_from(["forcecrc32", "save.dat", "64", "DEADBEEF"])
            .expect("valid invocation");
        let (file, offset, new_crc) = cli.patch_args().expect("patch args are required");
        assert_eq!(file, Path::new("save.dat"));
        assert_eq!(offset, 64);
        assert_eq!(new_crc, 0xDEAD_BEEF);
    }

    #[test]
    fn completions_stands_alone() {
        let cli = Cli::try_parse_from(["forcecrc32", "--completions", "bash"])
            .expect("completions needs no patch args");
        assert!(cli.completions.is_some());
        assert!(cli.patch_args().is_none());
    }

    #[test]
    fn completions_conflicts_with_patch_args() {
        let parsed =
            Cli::try_parse_from(["forcecrc32", "save.dat", "64", "DEADBEEF", "--completions", "bash"]);
        assert!(parsed.is_err());
    }
}
