//! Parsed SFDP image and table accessors

use core::convert::Infallible;
use core::fmt;

use crate::error::{Error, SfdpError};

use super::param::{Param, FLASH_MEMORY_DENSITY, KNOWN_PARAMS};
use super::reader::ReadAt;
use super::types::*;

/// Raw SFDP image together with its decoded header and table directory
///
/// The image starts at SFDP offset 0 and extends to the end of the furthest
/// parameter table, so table pointers index it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sfdp {
    header: SfdpHeader,
    tables: Vec<ParameterHeader>,
    image: Vec<u8>,
}

/// Read exactly `buf.len()` bytes or fail with [`Error::ShortRead`]
fn read_exact_at<R, E>(reader: &mut R, buf: &mut [u8], offset: u64) -> Result<(), Error<E>>
where
    R: ReadAt + ?Sized,
    Error<E>: From<R::Error>,
{
    let got = reader.read_at(buf, offset)?;
    if got != buf.len() {
        return Err(Error::ShortRead {
            addr: offset,
            expected: buf.len(),
            got,
        });
    }
    Ok(())
}

impl Sfdp {
    /// Read and parse the SFDP image from `reader`
    ///
    /// The SFDP header and the parameter header directory are read first to
    /// learn how far the tables extend, then the whole image is fetched from
    /// offset 0 in one read.
    pub fn read<R, E>(reader: &mut R) -> Result<Self, Error<E>>
    where
        R: ReadAt + ?Sized,
        Error<E>: From<R::Error>,
    {
        log::debug!("Reading SFDP header (8 bytes at address 0x00)...");

        let mut buf = [0u8; HEADER_LEN];
        read_exact_at::<R, E>(reader, &mut buf, 0)?;
        let header = SfdpHeader::parse(&buf);

        if !header.is_valid() {
            return Err(Error::InvalidSignature(header.signature));
        }
        if header.revision.major != 1 {
            return Err(Error::UnsupportedRevision(header.revision));
        }

        log::debug!(
            "SFDP header valid: revision {}, {} parameter headers",
            header.revision,
            header.num_param_headers()
        );

        let dir_end = HEADER_LEN * (header.num_param_headers() + 1);
        let mut dir = vec![0u8; dir_end - HEADER_LEN];
        read_exact_at::<R, E>(reader, &mut dir, HEADER_LEN as u64)?;

        let tables: Vec<ParameterHeader> = dir
            .chunks_exact(HEADER_LEN)
            .filter_map(|chunk| <&[u8; HEADER_LEN]>::try_from(chunk).ok())
            .map(ParameterHeader::parse)
            .collect();

        // Every table must lie below the ceiling, which also bounds the
        // image allocation to 16 MiB
        for table in &tables {
            super::reader::check_range::<E>(table.table_pointer.into(), table.length_bytes())?;
        }

        let extent = tables
            .iter()
            .map(ParameterHeader::end)
            .fold(dir_end as u64, u64::max);

        log::debug!("Reading SFDP image (0x{:X} bytes)", extent);

        let mut image = vec![0u8; extent as usize];
        read_exact_at::<R, E>(reader, &mut image, 0)?;

        Ok(Self {
            header,
            tables,
            image,
        })
    }

    /// Parse an SFDP image held in memory
    pub fn from_bytes(mut bytes: &[u8]) -> Result<Self, Error<Infallible>> {
        Self::read(&mut bytes)
    }

    /// The SFDP header
    pub fn header(&self) -> &SfdpHeader {
        &self.header
    }

    /// All parameter headers, in directory order
    pub fn tables(&self) -> &[ParameterHeader] {
        &self.tables
    }

    /// Parameter header at `index`
    pub fn table(&self, index: usize) -> Option<&ParameterHeader> {
        self.tables.get(index)
    }

    /// Index of the first table with the given parameter ID
    pub fn find_table(&self, id: u16) -> Option<usize> {
        self.tables.iter().position(|t| t.id == id)
    }

    /// The raw image, starting at SFDP offset 0
    pub fn as_bytes(&self) -> &[u8] {
        &self.image
    }

    /// Read DWORD `dword` (0-based) of table `table` (0-based)
    ///
    /// The DWORD is decoded as little-endian.
    pub fn dword(&self, table: usize, dword: usize) -> Result<u32, SfdpError> {
        let header = self
            .tables
            .get(table)
            .ok_or(SfdpError::TableNotFound { table })?;

        let out_of_bounds = SfdpError::OutOfBounds { table, dword };
        if dword >= header.length_dwords as usize {
            return Err(out_of_bounds);
        }

        let start = header.table_pointer as usize + dword * 4;
        let bytes: [u8; 4] = self
            .image
            .get(start..start + 4)
            .and_then(|b| b.try_into().ok())
            .ok_or(out_of_bounds)?;

        Ok(u32::from_le_bytes(bytes))
    }

    /// Look up a parameter bit field
    ///
    /// The first table matching the parameter's ID with at least its minimum
    /// revision is used.
    pub fn param(&self, param: &Param) -> Result<u64, SfdpError> {
        let table = self
            .tables
            .iter()
            .position(|t| t.id == param.table && t.revision.at_least(param.min_revision))
            .ok_or(SfdpError::ParamNotFound { id: param.table })?;

        Ok(param.extract(self.dword(table, param.dword)?))
    }

    /// Flash density in bytes, from BFPT DWORD 2
    pub fn density_bytes(&self) -> Result<u64, SfdpError> {
        let raw = self.param(&FLASH_MEMORY_DENSITY)? as u32;

        // Bit 31 clear: bits 30:0 hold density in bits minus one.
        // Bit 31 set: bits 30:0 hold N where density = 2^N bits.
        if raw & (1 << 31) == 0 {
            return Ok((raw as u64 + 1) / 8);
        }
        let n = raw & 0x7FFF_FFFF;
        match n.checked_sub(3) {
            Some(shift) if shift < 64 => Ok(1u64 << shift),
            _ => Err(SfdpError::InvalidDensity(raw)),
        }
    }
}

impl fmt::Display for Sfdp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SFDP revision {}, {} parameter table(s), {} bytes",
            self.header.revision,
            self.tables.len(),
            self.image.len()
        )?;

        writeln!(f)?;
        writeln!(f, "  #  ID      Rev  DWORDs  Pointer   Name")?;
        for (i, t) in self.tables.iter().enumerate() {
            writeln!(
                f,
                "  {:<2} 0x{:04X}  {:<4} {:<7} 0x{:06X}  {}",
                i,
                t.id,
                t.revision.to_string(),
                t.length_dwords,
                t.table_pointer,
                param_id_name(t.id).unwrap_or("Vendor specific")
            )?;
        }

        writeln!(f)?;
        writeln!(f, "  Parameter                         Value")?;
        for param in KNOWN_PARAMS {
            match self.param(param) {
                Ok(value) => writeln!(f, "  {:<33} 0x{:X}", param.name, value)?,
                Err(e) => writeln!(f, "  {:<33} ({})", param.name, e)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sfdp::mock::{MockError, MockMaster};
    use crate::sfdp::param;
    use crate::sfdp::SfdpReader;

    /// Two tables: a 9 DWORD BFPT at 0x1C and a 2 DWORD vendor table at 0x48
    #[rustfmt::skip]
    const SMALL_SFDP: [u8; 0x50] = [
        0x53, 0x46, 0x44, 0x50, // @0x00: "SFDP"
        0x00, 0x01, 0x01, 0xFF, // @0x04: revision 1.0, NPH=1
        0x00, 0x00, 0x01, 0x09, // @0x08: BFPT rev 1.0, 9 DWORDs
        0x1C, 0x00, 0x00, 0xFF, // @0x0C: pointer 0x1C
        0xC2, 0x00, 0x01, 0x02, // @0x10: vendor 0xC2 rev 1.0, 2 DWORDs
        0x48, 0x00, 0x00, 0xFF, // @0x14: pointer 0x48
        0xFF, 0xFF, 0xFF, 0xFF, // @0x18: hole
        0xE5, 0x20, 0xF1, 0xFF, // @0x1C: BFPT DWORD 1
        0xFF, 0xFF, 0xFF, 0x03, // @0x20: DWORD 2 - 64 Mbit
        0x44, 0xEB, 0x08, 0x6B, // @0x24
        0x08, 0x3B, 0x04, 0xBB, // @0x28
        0xEE, 0xFF, 0xFF, 0xFF, // @0x2C
        0xFF, 0xFF, 0x00, 0xFF, // @0x30
        0xFF, 0xFF, 0x00, 0xFF, // @0x34
        0x0C, 0x20, 0x0F, 0x52, // @0x38
        0x10, 0xD8, 0x00, 0xFF, // @0x3C: BFPT DWORD 9
        0xFF, 0xFF, 0xFF, 0xFF, // @0x40: hole
        0xFF, 0xFF, 0xFF, 0xFF, // @0x44: hole
        0x00, 0x36, 0x00, 0x27, // @0x48: vendor DWORD 1
        0xF4, 0x4F, 0xFF, 0xFF, // @0x4C: vendor DWORD 2
    ];

    #[test]
    fn test_parse_from_bytes() {
        let sfdp = Sfdp::from_bytes(&SMALL_SFDP).unwrap();

        assert_eq!(sfdp.header().revision, SfdpRevision::JESD216);
        assert_eq!(sfdp.tables().len(), 2);
        assert!(sfdp.table(0).unwrap().is_basic());
        assert_eq!(sfdp.table(1).unwrap().id, 0xFFC2);
        assert_eq!(sfdp.find_table(0xFFC2), Some(1));
        assert_eq!(sfdp.as_bytes().len(), 0x50);
    }

    #[test]
    fn test_dword_little_endian() {
        let sfdp = Sfdp::from_bytes(&SMALL_SFDP).unwrap();

        assert_eq!(sfdp.dword(0, 0).unwrap(), 0xFFF1_20E5);
        assert_eq!(sfdp.dword(0, 1).unwrap(), 0x03FF_FFFF);
        assert_eq!(sfdp.dword(1, 1).unwrap(), 0xFFFF_4FF4);
    }

    #[test]
    fn test_dword_unknown_table() {
        let sfdp = Sfdp::from_bytes(&SMALL_SFDP).unwrap();
        assert_eq!(sfdp.dword(2, 0), Err(SfdpError::TableNotFound { table: 2 }));
    }

    #[test]
    fn test_dword_past_table_length() {
        let sfdp = Sfdp::from_bytes(&SMALL_SFDP).unwrap();

        // DWORD 9 of the BFPT would be the hole at 0x40, which is in the
        // image but not part of the table
        assert_eq!(
            sfdp.dword(0, 9),
            Err(SfdpError::OutOfBounds { table: 0, dword: 9 })
        );
        assert_eq!(
            sfdp.dword(1, 2),
            Err(SfdpError::OutOfBounds { table: 1, dword: 2 })
        );
    }

    #[test]
    fn test_param_lookup() {
        let sfdp = Sfdp::from_bytes(&SMALL_SFDP).unwrap();

        assert_eq!(sfdp.param(&param::ERASE_4K_OPCODE).unwrap(), 0x20);
        assert_eq!(sfdp.param(&param::BLOCK_SECTOR_ERASE_SIZE).unwrap(), 0x1);
        assert_eq!(sfdp.param(&param::ADDRESS_BYTES).unwrap(), 0);
        assert_eq!(sfdp.density_bytes().unwrap(), 8 * 1024 * 1024);
    }

    #[test]
    fn test_param_revision_too_old() {
        let sfdp = Sfdp::from_bytes(&SMALL_SFDP).unwrap();
        let newer = Param {
            min_revision: SfdpRevision::JESD216B,
            ..param::ERASE_4K_OPCODE
        };
        assert_eq!(
            sfdp.param(&newer),
            Err(SfdpError::ParamNotFound { id: PARAM_ID_BASIC })
        );
    }

    #[test]
    fn test_invalid_signature() {
        let mut data = SMALL_SFDP;
        data[0] = 0x00;
        let err = Sfdp::from_bytes(&data).unwrap_err();
        assert_eq!(err, Error::InvalidSignature(0x5044_4600));
    }

    #[test]
    fn test_unsupported_revision() {
        let mut data = SMALL_SFDP;
        data[5] = 0x02;
        let err = Sfdp::from_bytes(&data).unwrap_err();
        assert_eq!(err, Error::UnsupportedRevision(SfdpRevision::new(2, 0)));
    }

    #[test]
    fn test_truncated_image() {
        let err = Sfdp::from_bytes(&SMALL_SFDP[..0x40]).unwrap_err();
        assert_eq!(
            err,
            Error::ShortRead {
                addr: 0,
                expected: 0x50,
                got: 0x40
            }
        );
    }

    #[test]
    fn test_table_beyond_max_address() {
        let mut data = SMALL_SFDP;
        // Vendor table pointer 0xFFFFFC with 2 DWORDs ends past the ceiling
        data[0x14..0x17].copy_from_slice(&[0xFC, 0xFF, 0xFF]);
        let mut master = MockMaster::new(data.to_vec());

        let err = Sfdp::read::<_, MockError>(&mut SfdpReader::new(&mut master)).unwrap_err();
        assert_eq!(err, Error::AddressOutOfRange { addr: 0xFF_FFFC });
        assert_eq!(
            err.to_string(),
            "SFDP address 0xfffffc out of range (max 0xffffff)"
        );
        // Header and directory only
        assert_eq!(master.transfers.len(), 2);
    }

    #[test]
    fn test_read_through_programmer() {
        let mut master = MockMaster::new(SMALL_SFDP.to_vec()).with_max_read_len(32);
        let sfdp = Sfdp::read::<_, MockError>(&mut SfdpReader::new(&mut master)).unwrap();

        assert_eq!(sfdp, Sfdp::from_bytes(&SMALL_SFDP).unwrap());
        // header, directory, then 0x50 bytes in 32 byte chunks
        assert_eq!(master.transfers.len(), 5);
    }

    #[test]
    fn test_transport_error_passes_through() {
        let mut master = MockMaster::new(SMALL_SFDP.to_vec());
        master.fail = Some(MockError::new("fake transfer error"));

        let err = Sfdp::read::<_, MockError>(&mut SfdpReader::new(&mut master)).unwrap_err();
        assert_eq!(err.to_string(), "fake transfer error");
    }

    #[test]
    fn test_display_lists_tables() {
        let sfdp = Sfdp::from_bytes(&SMALL_SFDP).unwrap();
        let text = sfdp.to_string();

        assert!(text.contains("SFDP revision 1.0, 2 parameter table(s)"));
        assert!(text.contains("Basic Flash Parameters"));
        assert!(text.contains("0xFFC2"));
    }
}
