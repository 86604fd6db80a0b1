//! Writing of PPM (Portable Pixmap Format) files
//!
//! See <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>
//!
use crate::error::{Error, Result};
use crate::buffer::Image;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `buf` of RGB bytes as a binary (P6) PPM
pub fn write_ppm<W: Write>(buf: &[u8], width: usize, height: usize, out: &mut W) -> Result<()> {
    write!(out, "P6\n{} {}\n255\n", width, height)?;
    out.write_all(buf)?;
    Ok(())
}

/// Read an image file into RGB bytes, width and height
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgb8();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write RGB bytes to a file, format is chosen from the extension
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<()> {
    image::save_buffer(filename, buf, width as u32, height as u32, image::ColorType::Rgb8)?;
    Ok(())
}

/// Compare two image files pixel by pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::debug!("{} [{},{},{}]: {} {}", i, (i/3)%w1,(i/3)/w1,i%3, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}

impl Image {
    /// Write the image as a binary PPM
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> Result<()> {
        write_ppm(&self.as_bytes(), self.width(), self.height(), out)
    }
    /// Save the image as a binary PPM file
    pub fn save_ppm<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let filename = filename.as_ref();
        log::debug!("writing {}x{} ppm to {}", self.width(), self.height(), filename.display());
        let mut out = BufWriter::new(File::create(filename)?);
        self.write_ppm(&mut out)?;
        out.flush()?;
        Ok(())
    }
    /// Save the image, format is chosen from the extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        if self.width() == 0 || self.height() == 0 {
            return Err(Error::EmptyImage(self.width(), self.height()));
        }
        log::debug!("writing {}x{} image to {}",
                    self.width(), self.height(), filename.as_ref().display());
        write_file(&self.as_bytes(), self.width(), self.height(), filename)
    }
}
