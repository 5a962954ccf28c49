use crate::error::FormatError;

/// Bytes in a raw `MODE2/2352` sector.
pub const RAW_SECTOR_SIZE: u64 = 2352;
/// Sync + address + mode + subheader preceding the data.
pub const RAW_HEADER_SIZE: u64 = 24;
/// EDC + ECC following the data.
pub const RAW_FOOTER_SIZE: u64 = 280;
/// User data bytes in every sector, raw or cooked.
pub const DATA_SIZE: u64 = 2048;

pub const SYNC: [u8; 12] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

/// How sectors are stored in the image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorLayout {
    /// Full CD-ROM XA sectors, as ripped into a `.bin`.
    Raw2352,
    /// Only the user data of every sector, as in an `.iso`.
    Cooked2048,
}

impl SectorLayout {
    pub fn detect(first_bytes: &[u8]) -> Self {
        if first_bytes.starts_with(&SYNC) {
            SectorLayout::Raw2352
        } else {
            SectorLayout::Cooked2048
        }
    }

    pub fn sector_size(self) -> u64 {
        match self {
            SectorLayout::Raw2352 => RAW_SECTOR_SIZE,
            SectorLayout::Cooked2048 => DATA_SIZE,
        }
    }

    /// File offset of a data address.
    pub fn real_offset(self, data_address: u64) -> u64 {
        match self {
            SectorLayout::Raw2352 => {
                let sector = data_address / DATA_SIZE;
                sector * RAW_SECTOR_SIZE + RAW_HEADER_SIZE + data_address % DATA_SIZE
            }
            SectorLayout::Cooked2048 => data_address,
        }
    }
}

/// Header of a raw sector, up to and including the XA subheader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorHeader {
    pub minute: u8,
    pub second: u8,
    pub frame: u8,
    pub mode: u8,
    pub file: u8,
    pub channel: u8,
    pub submode: u8,
    pub coding: u8,
}

fn from_bcd(b: u8) -> u8 {
    (b >> 4) * 10 + (b & 0x0F)
}

impl SectorHeader {
    pub fn parse(sector: u64, data: &[u8]) -> Result<Self, FormatError> {
        if data.len() < RAW_HEADER_SIZE as usize || data[0..12] != SYNC {
            return Err(FormatError::SectorSync { sector });
        }

        let mode = data[15];
        if mode != 2 {
            return Err(FormatError::SectorMode { sector, mode });
        }

        Ok(Self {
            minute: from_bcd(data[12]),
            second: from_bcd(data[13]),
            frame: from_bcd(data[14]),
            mode,
            file: data[16],
            channel: data[17],
            submode: data[18],
            coding: data[19],
        })
    }

    /// Absolute sector number implied by the address field.
    pub fn lba(&self) -> u64 {
        // The first sector of a disc sits at 00:02:00
        let frames = (self.minute as u64 * 60 + self.second as u64) * 75 + self.frame as u64;
        frames.saturating_sub(150)
    }
}
