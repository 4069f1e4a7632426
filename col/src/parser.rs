use nom::{
    bytes::complete::take, combinator::map, multi::count, IResult as _IResult, Parser,
};

use crate::types::{pack_rgb, PALETTE_ENTRY_LENGTH, PALETTE_SIZE};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

fn parse_entry(i: &'_ [u8]) -> IResult<'_, u32> {
    map(take(PALETTE_ENTRY_LENGTH), |entry: &[u8]| {
        pack_rgb(entry[0], entry[1], entry[2])
    })
    .parse(i)
}

pub fn parse_colors(i: &'_ [u8]) -> IResult<'_, Vec<u32>> {
    count(parse_entry, PALETTE_SIZE).parse(i)
}
