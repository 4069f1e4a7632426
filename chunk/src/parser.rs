use nom::{
    bytes::complete::take, combinator::map, number::complete::le_i32, IResult as _IResult,
    Parser,
};

use crate::{
    error::{ChunkError, ChunkField},
    types::{Chunk, CHUNK_ID_LENGTH, CHUNK_LENGTH_LENGTH},
};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

fn parse_id(i: &'_ [u8]) -> IResult<'_, String> {
    map(take(CHUNK_ID_LENGTH), |bytes: &[u8]| {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());

        String::from_utf8_lossy(&bytes[..end]).into_owned()
    })
    .parse(i)
}

fn parse_length(i: &'_ [u8]) -> IResult<'_, i32> {
    le_i32(i)
}

fn parse_payload(i: &'_ [u8], length: usize) -> IResult<'_, Vec<u8>> {
    map(take(length), |bytes: &[u8]| bytes.to_vec()).parse(i)
}

/// Reads exactly one chunk from the start of `input`.
///
/// Returns the unread rest. Any short read is reported with the id read so
/// far, so a caller must not keep going after an error.
pub fn parse_chunk(input: &[u8]) -> Result<(&[u8], Chunk), ChunkError> {
    let (rest, id) = parse_id(input).map_err(|_| ChunkError::Truncated {
        id: None,
        field: ChunkField::Id,
        expected: CHUNK_ID_LENGTH,
        available: input.len(),
    })?;

    let (rest, length) = parse_length(rest).map_err(|_| ChunkError::Truncated {
        id: Some(id.clone()),
        field: ChunkField::Length,
        expected: CHUNK_LENGTH_LENGTH,
        available: rest.len(),
    })?;

    let Ok(length) = usize::try_from(length) else {
        return Err(ChunkError::InvalidLength { id, length });
    };

    let (rest, data) = parse_payload(rest, length).map_err(|_| ChunkError::Truncated {
        id: Some(id.clone()),
        field: ChunkField::Payload,
        expected: length,
        available: rest.len(),
    })?;

    Ok((rest, Chunk { id, data }))
}

/// Reads chunks until no byte is left.
pub fn parse_chunks(mut input: &[u8]) -> Result<Vec<Chunk>, ChunkError> {
    let mut chunks = vec![];

    while !input.is_empty() {
        let (rest, chunk) = parse_chunk(input)?;

        chunks.push(chunk);
        input = rest;
    }

    Ok(chunks)
}
