//! One SPI exchange: header out, data in

/// A 3-byte-address read exchange
///
/// The read phase borrows the caller's buffer, so building a command never
/// allocates.
pub struct SpiCommand<'a> {
    /// Instruction byte
    pub opcode: u8,
    /// 24-bit address sent after the opcode
    pub address: u32,
    /// Clock cycles between the address and the first data byte
    pub dummy_cycles: u8,
    /// Filled by the programmer during the read phase
    pub read_buf: &'a mut [u8],
}

impl<'a> SpiCommand<'a> {
    /// Address bytes on the wire
    pub const ADDRESS_LEN: usize = 3;

    /// Highest address the address phase can carry
    pub const MAX_ADDRESS: u32 = 0x00FF_FFFF;

    /// Longest header [`encode_header`](Self::encode_header) can produce:
    /// opcode, address and up to 32 dummy bytes
    pub const MAX_HEADER_LEN: usize = 1 + Self::ADDRESS_LEN + 32;

    /// Opcode and 3-byte address followed by the read phase
    pub fn read_3b(opcode: u8, address: u32, buf: &'a mut [u8]) -> Self {
        Self {
            opcode,
            address,
            dummy_cycles: 0,
            read_buf: buf,
        }
    }

    /// Insert `cycles` dummy clocks before the read phase
    pub fn with_dummy_cycles(mut self, cycles: u8) -> Self {
        self.dummy_cycles = cycles;
        self
    }

    /// Number of bytes sent before the read phase, in single I/O mode
    pub fn header_len(&self) -> usize {
        1 + Self::ADDRESS_LEN + usize::from(self.dummy_cycles) / 8
    }

    /// Encode opcode, big-endian address and dummy bytes into `buf`
    ///
    /// Returns the number of bytes written. Dummy bytes are sent as 0xFF.
    pub fn encode_header(&self, buf: &mut [u8]) -> usize {
        let len = self.header_len();
        let [_, a2, a1, a0] = self.address.to_be_bytes();
        buf[..4].copy_from_slice(&[self.opcode, a2, a1, a0]);
        buf[4..len].fill(0xFF);
        len
    }

    /// Decode the address from a header written by
    /// [`encode_header`](Self::encode_header)
    pub fn decode_address(header: &[u8]) -> Option<u32> {
        match header.get(1..4)? {
            &[a2, a1, a0] => Some(u32::from_be_bytes([0, a2, a1, a0])),
            _ => None,
        }
    }
}
