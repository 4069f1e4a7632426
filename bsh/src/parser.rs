use nom::{
    multi::count,
    number::complete::le_u32,
    IResult as _IResult, Parser,
};

use crate::{
    error::BshError,
    types::{
        BshFile, BshTexture, BshTextureHeader, END_MARKER, END_OF_ROW, MAX_TEXTURE_PIXELS,
        TEXTURE_HEADER_LENGTH,
    },
};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

/// The first offset also tells the size of the table.
pub fn parse_offsets(i: &'_ [u8]) -> IResult<'_, Vec<u32>> {
    let (_, first_offset) = le_u32(i)?;
    let texture_count = (first_offset / 4) as usize;

    count(le_u32, texture_count).parse(i)
}

pub fn parse_texture_header(i: &'_ [u8]) -> IResult<'_, BshTextureHeader> {
    let (i, (width, height, kind, length)) = (le_u32, le_u32, le_u32, le_u32).parse(i)?;

    Ok((
        i,
        BshTextureHeader {
            width,
            height,
            kind,
            length,
        },
    ))
}

fn decode_pixels(i: &[u8], header: &BshTextureHeader, index: usize) -> Result<Vec<Option<u8>>, BshError> {
    let width = header.width as usize;
    let height = header.height as usize;

    let size = width
        .checked_mul(height)
        .filter(|&size| size <= MAX_TEXTURE_PIXELS)
        .ok_or(BshError::InvalidDimensions {
            index,
            width: header.width,
            height: header.height,
        })?;

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(size)
        .map_err(|_| BshError::InvalidDimensions {
            index,
            width: header.width,
            height: header.height,
        })?;
    pixels.resize(size, None);

    let mut stream = i.iter().copied();
    let mut next = || stream.next().ok_or(BshError::UnexpectedEnd { index });

    let (mut x, mut y) = (0usize, 0usize);

    loop {
        let transparent = next()?;

        match transparent {
            END_MARKER => break,
            END_OF_ROW => {
                x = 0;
                y += 1;
                continue;
            }
            _ => (),
        }

        x += transparent as usize;

        let pixel_count = next()?;

        for _ in 0..pixel_count {
            let color_index = next()?;

            if x >= width || y >= height {
                return Err(BshError::PixelOutOfBounds {
                    index,
                    x,
                    y,
                    width: header.width,
                    height: header.height,
                });
            }

            pixels[y * width + x] = Some(color_index);
            x += 1;
        }
    }

    Ok(pixels)
}

fn parse_texture(i: &[u8], offset: u32, index: usize) -> Result<BshTexture, BshError> {
    let header_err = || BshError::ParseTextureHeader { index, offset };

    let start = i.get(offset as usize..).ok_or_else(header_err)?;
    let (_, header) = parse_texture_header(start).map_err(|_| header_err())?;

    if header.width == 0 || header.height == 0 {
        return Err(BshError::InvalidDimensions {
            index,
            width: header.width,
            height: header.height,
        });
    }

    let pixels = decode_pixels(&start[TEXTURE_HEADER_LENGTH..], &header, index)?;

    Ok(BshTexture {
        width: header.width,
        height: header.height,
        kind: header.kind,
        pixels,
    })
}

/// Decodes every sprite of a `BSH` chunk payload in table order.
pub fn parse_bsh(i: &[u8]) -> Result<BshFile, BshError> {
    let (_, offsets) = parse_offsets(i).map_err(|_| BshError::ParseOffsets)?;

    if offsets.is_empty() {
        return Err(BshError::ParseOffsets);
    }

    let textures = offsets
        .iter()
        .enumerate()
        .map(|(index, &offset)| parse_texture(i, offset, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BshFile { textures })
}
