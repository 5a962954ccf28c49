pub mod sector;

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{ExtractError, FormatError, Result};
use sector::{SectorHeader, SectorLayout, DATA_SIZE, RAW_HEADER_SIZE};

/// An opened game disc image, addressed by data address.
///
/// Data addresses count only the 2048 user data bytes of every sector, so a
/// table that straddles a sector boundary reads as one contiguous run.
pub struct GameImage<R = BufReader<File>> {
    reader: R,
    layout: SectorLayout,
    file_size: u64,
    data_len: u64,
    checked_sector: Option<u64>,
}

impl GameImage<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ExtractError::NotFound { path: path.to_path_buf() },
            _ => ExtractError::Io(err),
        })?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> GameImage<R> {
    pub fn from_reader(mut reader: R) -> Result<Self> {
        let file_size = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;

        let mut first = [0u8; 12];
        let layout = if file_size >= first.len() as u64 {
            reader.read_exact(&mut first)?;
            SectorLayout::detect(&first)
        } else {
            SectorLayout::Cooked2048
        };

        let sector_size = layout.sector_size();
        if file_size < sector_size {
            return Err(FormatError::TooSmall { len: file_size, sector_size }.into());
        }

        let data_len = match layout {
            SectorLayout::Raw2352 => {
                let trailing = file_size % sector_size;
                if trailing != 0 {
                    log::warn!("Ignoring {} trailing bytes after the last full sector", trailing);
                }
                (file_size / sector_size) * DATA_SIZE
            }
            SectorLayout::Cooked2048 => file_size,
        };

        log::debug!("Image is {:?}, {} bytes, {:#x} data bytes", layout, file_size, data_len);

        Ok(Self { reader, layout, file_size, data_len, checked_sector: None })
    }

    pub fn layout(&self) -> SectorLayout {
        self.layout
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Number of addressable data bytes.
    pub fn data_len(&self) -> u64 {
        self.data_len
    }

    /// Fails with `OutOfBounds` unless `offset..offset + length` is readable.
    pub fn check_bounds(&self, offset: u64, length: u64) -> Result<()> {
        match offset.checked_add(length) {
            Some(end) if end <= self.data_len => Ok(()),
            _ => Err(ExtractError::OutOfBounds { offset, length, data_len: self.data_len }),
        }
    }

    /// Reads `length` data bytes starting at data address `offset`.
    pub fn read_at(&mut self, offset: u64, length: usize) -> Result<Vec<u8>> {
        self.check_bounds(offset, length as u64)?;

        let mut buf = vec![0u8; length];
        let mut filled = 0;
        while filled < length {
            let address = offset + filled as u64;
            let in_sector = address % DATA_SIZE;
            let chunk = std::cmp::min(DATA_SIZE - in_sector, (length - filled) as u64) as usize;

            if self.layout == SectorLayout::Raw2352 {
                self.check_sector(address / DATA_SIZE)?;
            }

            self.reader.seek(SeekFrom::Start(self.layout.real_offset(address)))?;
            self.reader.read_exact(&mut buf[filled..filled + chunk])?;
            filled += chunk;
        }

        Ok(buf)
    }

    fn check_sector(&mut self, sector: u64) -> Result<()> {
        if self.checked_sector == Some(sector) {
            return Ok(());
        }

        let mut raw = [0u8; RAW_HEADER_SIZE as usize];
        self.reader.seek(SeekFrom::Start(sector * self.layout.sector_size()))?;
        self.reader.read_exact(&mut raw)?;
        let header = SectorHeader::parse(sector, &raw)?;
        if header.lba() != sector {
            log::trace!("Sector {} carries address {:02}:{:02}:{:02}", sector, header.minute, header.second, header.frame);
        }

        self.checked_sector = Some(sector);
        Ok(())
    }
}
