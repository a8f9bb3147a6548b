mod atlas_inspector;
mod tool;
