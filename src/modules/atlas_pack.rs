//! Lays decoded sprites into a fixed grid of atlas pages.
//!
//! Sprite `k` always lands on page `k / (rows * rows)`, row
//! `(k % (rows * rows)) / rows` and column `(k % (rows * rows)) % rows`. The
//! order of the input is never changed, a renderer finds a sprite with the same
//! formula.
use image::{imageops, RgbaImage};
use log::{debug, warn};
use serde::Deserialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PackError {
    #[error("Capacity exceeded. Have ({sprites}) sprites for ({capacity}) cells")]
    CapacityExceeded { sprites: usize, capacity: usize },
    #[error(
        "Empty grid: {pages} pages of {rows}x{rows} cells sized {cell_width}x{cell_height}"
    )]
    EmptyGrid {
        pages: u32,
        rows: u32,
        cell_width: u32,
        cell_height: u32,
    },
    #[error("Page too large: {rows}x{rows} cells sized {cell_width}x{cell_height}")]
    PageTooLarge {
        rows: u32,
        cell_width: u32,
        cell_height: u32,
    },
}

/// Upper bound for the RGBA buffer of one page.
pub const MAX_PAGE_BYTES: usize = 1 << 30;

/// How big one cell is.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CellSizePolicy {
    Fixed { width: u32, height: u32 },
    /// Widest sprite by tallest sprite of the decoded sequence.
    DeriveFromMax,
}

impl CellSizePolicy {
    pub fn resolve(&self, sprites: &[RgbaImage]) -> (u32, u32) {
        match *self {
            CellSizePolicy::Fixed { width, height } => (width, height),
            CellSizePolicy::DeriveFromMax => sprites.iter().fold((0, 0), |(w, h), sprite| {
                (w.max(sprite.width()), h.max(sprite.height()))
            }),
        }
    }
}

/// What happens to sprites that do not fit into the grid.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Drop them without a word.
    Truncate,
    /// Drop them and log how many were dropped.
    #[default]
    Warn,
    /// Refuse to pack.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub page: u32,
    pub row: u32,
    pub column: u32,
}

/// Only built through [`GridGeometry::new`], so page sides and the page
/// buffer size never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pages: u32,
    /// Rows per page. Columns are the same number.
    rows: u32,
    cell_width: u32,
    cell_height: u32,
    page_width: u32,
    page_height: u32,
}

impl GridGeometry {
    pub fn new(pages: u32, rows: u32, cell_width: u32, cell_height: u32) -> Result<Self, PackError> {
        if pages == 0 || rows == 0 || cell_width == 0 || cell_height == 0 {
            return Err(PackError::EmptyGrid {
                pages,
                rows,
                cell_width,
                cell_height,
            });
        }

        let too_large = || PackError::PageTooLarge {
            rows,
            cell_width,
            cell_height,
        };

        let page_width = cell_width.checked_mul(rows).ok_or_else(too_large)?;
        let page_height = cell_height.checked_mul(rows).ok_or_else(too_large)?;

        let page_bytes = (page_width as usize)
            .checked_mul(page_height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .filter(|&bytes| bytes <= MAX_PAGE_BYTES);

        if page_bytes.is_none() {
            return Err(too_large());
        }

        Ok(Self {
            pages,
            rows,
            cell_width,
            cell_height,
            page_width,
            page_height,
        })
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    pub fn cells_per_page(&self) -> usize {
        self.rows as usize * self.rows as usize
    }

    pub fn capacity(&self) -> usize {
        self.pages as usize * self.cells_per_page()
    }

    pub fn page_width(&self) -> u32 {
        self.page_width
    }

    pub fn page_height(&self) -> u32 {
        self.page_height
    }

    /// `None` if the index is past the last cell.
    pub fn locate(&self, index: usize) -> Option<CellPosition> {
        if index >= self.capacity() {
            return None;
        }

        let cells_per_page = self.cells_per_page();
        let rows = self.rows as usize;
        let cell = index % cells_per_page;

        Some(CellPosition {
            page: (index / cells_per_page) as u32,
            row: (cell / rows) as u32,
            column: (cell % rows) as u32,
        })
    }

    /// Top left pixel of a cell inside its page.
    pub fn pixel_offset(&self, position: CellPosition) -> (u32, u32) {
        (
            position.column * self.cell_width,
            position.row * self.cell_height,
        )
    }
}

pub struct PackedAtlas {
    pub geometry: GridGeometry,
    /// Always `geometry.pages` pages, populated or not.
    pub pages: Vec<RgbaImage>,
    /// Height of every placed sprite in placement order.
    pub heights: Vec<u32>,
    /// Sprites past the last cell.
    pub dropped: usize,
}

impl PackedAtlas {
    pub fn placed(&self) -> usize {
        self.heights.len()
    }
}

pub fn pack_atlas(
    sprites: &[RgbaImage],
    geometry: GridGeometry,
    overflow: OverflowPolicy,
) -> Result<PackedAtlas, PackError> {
    let capacity = geometry.capacity();
    let dropped = sprites.len().saturating_sub(capacity);

    if dropped > 0 {
        match overflow {
            OverflowPolicy::Truncate => (),
            OverflowPolicy::Warn => warn!(
                "{} sprites do not fit into {} cells, dropping the last {}",
                sprites.len(),
                capacity,
                dropped
            ),
            OverflowPolicy::Error => {
                return Err(PackError::CapacityExceeded {
                    sprites: sprites.len(),
                    capacity,
                })
            }
        }
    }

    // new buffers are zeroed, so every cell starts fully transparent
    let mut pages: Vec<RgbaImage> = (0..geometry.pages)
        .map(|_| RgbaImage::new(geometry.page_width(), geometry.page_height()))
        .collect();
    let mut heights = Vec::with_capacity(sprites.len().min(capacity));

    for (index, sprite) in sprites.iter().enumerate() {
        let Some(position) = geometry.locate(index) else {
            break;
        };

        if sprite.width() > geometry.cell_width || sprite.height() > geometry.cell_height {
            warn!(
                "sprite {} is {}x{} and bleeds out of its {}x{} cell",
                index,
                sprite.width(),
                sprite.height(),
                geometry.cell_width,
                geometry.cell_height
            );
        }

        let (x, y) = geometry.pixel_offset(position);

        imageops::replace(&mut pages[position.page as usize], sprite, x as i64, y as i64);
        heights.push(sprite.height());
    }

    debug!(
        "packed {} sprites into {} pages of {}x{}",
        heights.len(),
        pages.len(),
        geometry.page_width(),
        geometry.page_height()
    );

    Ok(PackedAtlas {
        geometry,
        pages,
        heights,
        dropped,
    })
}
