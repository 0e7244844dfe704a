pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pub offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.offset).copied();
        if byte.is_some() {
            self.offset += 1;
        }

        byte
    }

    pub fn read_bytes(&mut self, size: usize) -> Option<&'a [u8]> {
        if self.offset + size > self.bytes.len() {
            return None;
        }

        let result = &self.bytes[self.offset..self.offset + size];
        self.offset += size;

        Some(result)
    }

    pub fn read_u32_be(&mut self) -> Option<u32> {
        let bytes = self.read_bytes(4)?;

        Some(u32::from_be_bytes(bytes.try_into().unwrap()))
    }

    /// Reads up to and including the next newline, returning the line
    /// without its terminator. `None` if the stream ends first.
    pub fn read_line(&mut self) -> Option<&'a [u8]> {
        let start_index = self.offset;

        loop {
            let byte = self.read_byte()?;
            if byte == b'\n' {
                return Some(&self.bytes[start_index..self.offset - 1]);
            }
        }
    }

    pub fn number_of_bytes_left(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    fn skip_line(&mut self) -> Option<()> {
        while !Self::is_newline(self.read_byte()?) {}
        self.offset -= 1;

        Some(())
    }

    fn read_until_whitespace(&mut self) -> Option<&'a [u8]> {
        while Self::is_whitespace(self.read_byte()?) {}
        self.offset -= 1;
        let start_index = self.offset;
        while let Some(byte) = self.read_byte() {
            if Self::is_whitespace(byte) {
                self.offset -= 1;
                break;
            }
        }

        Some(&self.bytes[start_index..self.offset])
    }

    /// Reads the next whitespace-delimited PPM header token, skipping any
    /// `#` comment lines in between.
    pub fn read_ppm_symbol(&mut self) -> Option<&'a [u8]> {
        loop {
            let symbol = self.read_until_whitespace()?;

            if symbol[0] != PPM_COMMENT_START_BYTE {
                return Some(symbol);
            }

            self.skip_line();
        }
    }

    fn is_whitespace(byte: u8) -> bool {
        WHITESPACE_SYMBOLS.contains(&byte)
    }

    fn is_newline(byte: u8) -> bool {
        NEWLINE_SYMBOLS.contains(&byte)
    }
}

const WHITESPACE_SYMBOLS: [u8; 6] = [10, 32, 13, 9, 11, 12];
const NEWLINE_SYMBOLS: [u8; 2] = [13, 10];
const PPM_COMMENT_START_BYTE: u8 = 35;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_words() {
        let mut reader = ByteReader::new(&[0x12, 0x34, 0x56, 0x78, 0xff]);

        assert_eq!(reader.read_u32_be(), Some(0x12345678));
        assert_eq!(reader.read_u32_be(), None);
        assert_eq!(reader.number_of_bytes_left(), 1);
    }

    #[test]
    fn read_line_strips_newline() {
        let mut reader = ByteReader::new(b"first line\nrest");

        assert_eq!(reader.read_line(), Some(&b"first line"[..]));
        assert_eq!(reader.read_bytes(4), Some(&b"rest"[..]));
        assert_eq!(reader.read_line(), None);
    }

    #[test]
    fn ppm_symbols_skip_comments() {
        let mut reader = ByteReader::new(b"P6\n# a comment\n12 7\n");

        assert_eq!(reader.read_ppm_symbol(), Some(&b"P6"[..]));
        assert_eq!(reader.read_ppm_symbol(), Some(&b"12"[..]));
        assert_eq!(reader.read_ppm_symbol(), Some(&b"7"[..]));
    }
}
