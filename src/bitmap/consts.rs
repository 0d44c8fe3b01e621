/// File signature, "BM" read as a little endian u16
pub const FILE_SIGNATURE: u16 = 0x4D42;

/// Size of the file header record in bytes
pub const FILE_HEADER_SIZE: usize = 14;

/// Size of the info (DIB) header record in bytes
pub const INFO_HEADER_SIZE: usize = 40;

/// Supported pixel depths, in bits
pub const DEPTH_24: u16 = 24;
pub const DEPTH_32: u16 = 32;

/// Rows are aligned to this many bytes
pub const ROW_ALIGNMENT: u32 = 4;

/// BI_RGB compression type
pub const BI_RGB_COMPRESSION: u32 = 0;

/// BI_BITFIELDS compression type
pub const BI_BITFIELDS_COMPRESSION: u32 = 3;
