pub mod atlas_pack;
pub mod atlas_write;
pub mod sprite_source;
pub mod tile_atlas;
