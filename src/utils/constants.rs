use std::path::PathBuf;

use crate::{
    config::{AtlasConfig, TierConfig},
    modules::{atlas_pack::CellSizePolicy, sprite_source::Tier},
};

pub static PALETTE_PATH: &str = "ToolGfx/STADTFLD.COL";

pub static INFO_FILE_NAME: &str = "info.txt";
pub static HEIGHTS_FILE_NAME: &str = "heights.txt";

pub static STADTFLD_CATEGORY: &str = "stadtfld";
pub static ANIMALS_CATEGORY: &str = "animals";

// (tier, file, pages, rows, largest width, largest height)
type TierRow = (Tier, &'static str, u32, u32, u32, u32);

static STADTFLD_TIERS: [TierRow; 3] = [
    (Tier::Sgfx, "SGFX/STADTFLD.BSH", 2, 64, 16, 71),
    (Tier::Mgfx, "MGFX/STADTFLD.BSH", 6, 32, 32, 143),
    (Tier::Gfx, "GFX/STADTFLD.BSH", 24, 16, 64, 286),
];

static ANIMALS_TIERS: [TierRow; 3] = [
    (Tier::Sgfx, "SGFX/TIERE.BSH", 3, 16, 17, 16),
    (Tier::Mgfx, "MGFX/TIERE.BSH", 3, 16, 35, 32),
    (Tier::Gfx, "GFX/TIERE.BSH", 3, 16, 71, 65),
];

fn atlas_from_rows(category: &str, rows: &[TierRow]) -> AtlasConfig {
    AtlasConfig {
        category: category.to_string(),
        tiers: rows
            .iter()
            .map(|&(tier, path, pages, rows, width, height)| TierConfig {
                tier,
                path: PathBuf::from(path),
                pages,
                rows,
                cell_size: CellSizePolicy::Fixed { width, height },
            })
            .collect(),
    }
}

/// Grid table of the stock game files.
pub fn default_atlases() -> Vec<AtlasConfig> {
    vec![
        atlas_from_rows(STADTFLD_CATEGORY, &STADTFLD_TIERS),
        atlas_from_rows(ANIMALS_CATEGORY, &ANIMALS_TIERS),
    ]
}
