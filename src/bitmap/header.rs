use std::io::Read;
use std::io::Write;

use byteorder::LittleEndian;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;

use super::consts;
use super::super::error::Error;
use super::super::error::Result;

/// The 14 byte record every bitmap file starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: u16,
    /// declared size of the whole file
    pub size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// position of the first pixel byte, from the start of the file
    pub offset: u32,
}

/// The 40 byte BITMAPINFOHEADER record.
///
/// Only `width`, `height` and `bit_depth` are interpreted, the rest is
/// carried as-is so that a save writes back what was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_depth: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl FileHeader {
    /// Read the file header field by field.
    ///
    /// The signature is checked before anything else is read, so a stream that
    /// is not a bitmap fails with `InvalidFormat` however short it is.
    pub fn read<T: Read>(buf: &mut T) -> Result<FileHeader> {
        let signature = buf.read_u16::<LittleEndian>()?;
        if signature != consts::FILE_SIGNATURE {
            return Err(Error::InvalidFormat)
        }

        Ok(FileHeader {
            signature: signature,
            size: buf.read_u32::<LittleEndian>()?,
            reserved1: buf.read_u16::<LittleEndian>()?,
            reserved2: buf.read_u16::<LittleEndian>()?,
            offset: buf.read_u32::<LittleEndian>()?,
        })
    }

    pub fn write<T: Write>(&self, buf: &mut T) -> Result<()> {
        buf.write_u16::<LittleEndian>(self.signature)?;
        buf.write_u32::<LittleEndian>(self.size)?;
        buf.write_u16::<LittleEndian>(self.reserved1)?;
        buf.write_u16::<LittleEndian>(self.reserved2)?;
        buf.write_u32::<LittleEndian>(self.offset)?;
        Ok(())
    }
}

impl InfoHeader {
    /// Read the info header without validating it
    pub fn read<T: Read>(buf: &mut T) -> Result<InfoHeader> {
        Ok(InfoHeader {
            size: buf.read_u32::<LittleEndian>()?,
            width: buf.read_i32::<LittleEndian>()?,
            height: buf.read_i32::<LittleEndian>()?,
            planes: buf.read_u16::<LittleEndian>()?,
            bit_depth: buf.read_u16::<LittleEndian>()?,
            compression: buf.read_u32::<LittleEndian>()?,
            image_size: buf.read_u32::<LittleEndian>()?,
            x_pels_per_meter: buf.read_i32::<LittleEndian>()?,
            y_pels_per_meter: buf.read_i32::<LittleEndian>()?,
            colors_used: buf.read_u32::<LittleEndian>()?,
            colors_important: buf.read_u32::<LittleEndian>()?,
        })
    }

    pub fn write<T: Write>(&self, buf: &mut T) -> Result<()> {
        buf.write_u32::<LittleEndian>(self.size)?;
        buf.write_i32::<LittleEndian>(self.width)?;
        buf.write_i32::<LittleEndian>(self.height)?;
        buf.write_u16::<LittleEndian>(self.planes)?;
        buf.write_u16::<LittleEndian>(self.bit_depth)?;
        buf.write_u32::<LittleEndian>(self.compression)?;
        buf.write_u32::<LittleEndian>(self.image_size)?;
        buf.write_i32::<LittleEndian>(self.x_pels_per_meter)?;
        buf.write_i32::<LittleEndian>(self.y_pels_per_meter)?;
        buf.write_u32::<LittleEndian>(self.colors_used)?;
        buf.write_u32::<LittleEndian>(self.colors_important)?;
        Ok(())
    }
}

/// Both header records, as they appear at the start of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub file: FileHeader,
    pub info: InfoHeader,
}

impl Header {
    /// Read and validate both records.
    ///
    /// Checks, in order: the signature, the bit depth (24 or 32), that the
    /// dimensions are not negative, and that the compression is one whose
    /// pixels are laid out uncompressed.
    pub fn read<T: Read>(buf: &mut T) -> Result<Header> {
        let file = FileHeader::read(buf)?;
        let info = InfoHeader::read(buf)?;

        if info.bit_depth != consts::DEPTH_24 && info.bit_depth != consts::DEPTH_32 {
            return Err(Error::InvalidDepth(info.bit_depth))
        }

        if info.width < 0 || info.height < 0 {
            return Err(Error::unsupported("negative dimensions"))
        }

        match info.compression {
            consts::BI_RGB_COMPRESSION |
            consts::BI_BITFIELDS_COMPRESSION => {},
            _ => return Err(Error::unsupported("compressed pixel data")),
        }

        Ok(Header { file: file, info: info })
    }

    /// Write both records back, byte for byte, without any validation
    pub fn write<T: Write>(&self, buf: &mut T) -> Result<()> {
        self.file.write(buf)?;
        self.info.write(buf)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Cursor;

    use super::*;

    pub fn sample_header(width: i32, height: i32, bit_depth: u16) -> Header {
        Header {
            file: FileHeader {
                signature: consts::FILE_SIGNATURE,
                size: 0x1234,
                reserved1: 0xBEEF,
                reserved2: 7,
                offset: 54,
            },
            info: InfoHeader {
                size: 40,
                width: width,
                height: height,
                planes: 1,
                bit_depth: bit_depth,
                compression: 0,
                image_size: 0x100,
                x_pels_per_meter: 2835,
                y_pels_per_meter: -2835,
                colors_used: 0,
                colors_important: 9,
            },
        }
    }

    fn encode(header: &Header) -> Vec<u8> {
        let mut out = Vec::new();
        header.write(&mut out).unwrap();
        out
    }

    #[test]
    fn records_are_packed_little_endian() {
        let bytes = encode(&sample_header(3, 2, 24));
        assert_eq!(bytes.len(), consts::FILE_HEADER_SIZE + consts::INFO_HEADER_SIZE);
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(&bytes[2..6], &[0x34, 0x12, 0, 0]);
        assert_eq!(&bytes[6..8], &[0xEF, 0xBE]);
        assert_eq!(&bytes[10..14], &[54, 0, 0, 0]);
        assert_eq!(&bytes[14..18], &[40, 0, 0, 0]);
        assert_eq!(&bytes[18..22], &[3, 0, 0, 0]);
        assert_eq!(&bytes[22..26], &[2, 0, 0, 0]);
        assert_eq!(&bytes[28..30], &[24, 0]);
        assert_eq!(&bytes[34..38], &[0, 1, 0, 0]);
        assert_eq!(&bytes[38..42], &[0x13, 0x0B, 0, 0]);
        assert_eq!(&bytes[42..46], &(-2835i32).to_le_bytes());
        assert_eq!(&bytes[50..54], &[9, 0, 0, 0]);
    }

    #[test]
    fn read_gives_back_every_field() {
        let header = sample_header(640, 480, 32);
        let read = Header::read(&mut Cursor::new(encode(&header))).unwrap();
        assert_eq!(read, header);
    }

    #[test]
    fn bad_signature_is_invalid_format() {
        let mut bytes = encode(&sample_header(1, 1, 24));
        bytes[0] = b'P';
        assert!(matches!(Header::read(&mut Cursor::new(bytes)), Err(Error::InvalidFormat)));

        // nothing past the signature
        let short = vec![b'M', b'B'];
        assert!(matches!(Header::read(&mut Cursor::new(short)), Err(Error::InvalidFormat)));
    }

    #[test]
    fn unsupported_depth_is_rejected() {
        for depth in [1u16, 8, 16, 48] {
            let bytes = encode(&sample_header(1, 1, depth));
            match Header::read(&mut Cursor::new(bytes)) {
                Err(Error::InvalidDepth(d)) => assert_eq!(d, depth),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn negative_dimensions_are_unsupported() {
        let bytes = encode(&sample_header(4, -4, 24));
        assert!(matches!(Header::read(&mut Cursor::new(bytes)), Err(Error::Unsupported(_))));
        let bytes = encode(&sample_header(-1, 4, 32));
        assert!(matches!(Header::read(&mut Cursor::new(bytes)), Err(Error::Unsupported(_))));
    }

    #[test]
    fn rle_compression_is_unsupported() {
        let mut header = sample_header(4, 4, 24);
        header.info.compression = 1;
        let bytes = encode(&header);
        assert!(matches!(Header::read(&mut Cursor::new(bytes)), Err(Error::Unsupported(_))));

        header.info.compression = consts::BI_BITFIELDS_COMPRESSION;
        assert!(Header::read(&mut Cursor::new(encode(&header))).is_ok());
    }

    #[test]
    fn truncated_header_is_io_error() {
        let bytes = encode(&sample_header(4, 4, 24));
        let truncated = bytes[..30].to_vec();
        assert!(matches!(Header::read(&mut Cursor::new(truncated)), Err(Error::Io(_))));
    }
}
