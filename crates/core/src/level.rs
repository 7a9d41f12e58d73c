//! Tile-map level loading.
//!
//! Two encodings of the same grid are accepted:
//! - text, one row per line: `#` solid, `P` spawn, `C` collectible, `.` or
//!   space empty;
//! - an RGBA image, one pixel per tile: opaque black solid, pure red spawn,
//!   pure yellow collectible, white or fully transparent empty.
//!
//! Either way the result is an ordered tile list (row-major, top to bottom)
//! plus collectibles, and a spawn point in world pixels.

use std::path::Path;

use crate::error::LevelError;
use crate::geom::{Rect, Vec2};
use crate::world::{find_overlap, Collectible, StaticTile};

pub const TILE_SIZE: f32 = 16.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Cell {
    Empty,
    Solid,
    Spawn,
    Collectible,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub tiles: Vec<StaticTile>,
    pub collectibles: Vec<Collectible>,
    pub spawn: Vec2,
    /// Grid size in tiles.
    pub columns: usize,
    pub rows: usize,
    pub tile_size: f32,
}

impl Level {
    pub fn width_px(&self) -> f32 {
        self.columns as f32 * self.tile_size
    }

    pub fn height_px(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }

    /// Load by extension: `.png`/`.bmp` as pixels, anything else as text.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let is_image = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| matches!(e.to_ascii_lowercase().as_str(), "png" | "bmp"))
            .unwrap_or(false);
        let level = if is_image {
            Self::from_image_path(path, TILE_SIZE)?
        } else {
            let src = std::fs::read_to_string(path)?;
            Self::from_text(&src, TILE_SIZE)?
        };
        log::info!(
            "loaded level {} ({}x{} tiles, {} solid, {} collectibles, spawn at {:?})",
            path.display(),
            level.columns,
            level.rows,
            level.tiles.len(),
            level.collectibles.len(),
            level.spawn
        );
        Ok(level)
    }

    pub fn from_text(src: &str, tile_size: f32) -> Result<Self, LevelError> {
        let mut grid = Vec::new();
        for (row, line) in src.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let mut cells = Vec::with_capacity(line.len());
            for (col, glyph) in line.chars().enumerate() {
                cells.push(match glyph {
                    '#' => Cell::Solid,
                    'P' => Cell::Spawn,
                    'C' => Cell::Collectible,
                    '.' | ' ' => Cell::Empty,
                    _ => return Err(LevelError::UnknownGlyph { glyph, row, col }),
                });
            }
            grid.push(cells);
        }
        while grid.last().map(|r| r.is_empty()).unwrap_or(false) {
            grid.pop();
        }
        Self::from_grid(&grid, tile_size)
    }

    pub fn from_image_path(path: impl AsRef<Path>, tile_size: f32) -> Result<Self, LevelError> {
        let img = image::open(path)?.to_rgba8();
        let (w, h) = img.dimensions();
        Self::from_rgba(w, h, img.as_raw(), tile_size)
    }

    /// `pixels` is tightly packed RGBA8, `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, pixels: &[u8], tile_size: f32) -> Result<Self, LevelError> {
        let (w, h) = (width as usize, height as usize);
        let needed = w.checked_mul(h).and_then(|n| n.checked_mul(4));
        match needed {
            Some(n) if n > 0 && pixels.len() >= n => {}
            _ => return Err(LevelError::Empty),
        }
        let mut grid = Vec::with_capacity(h);
        for (y, row) in pixels.chunks_exact(w * 4).take(h).enumerate() {
            let mut cells = Vec::with_capacity(w);
            for (x, px) in row.chunks_exact(4).enumerate() {
                let rgba = [px[0], px[1], px[2], px[3]];
                cells.push(match rgba {
                    [_, _, _, 0] | [255, 255, 255, 255] => Cell::Empty,
                    [0, 0, 0, 255] => Cell::Solid,
                    [255, 0, 0, 255] => Cell::Spawn,
                    [255, 255, 0, 255] => Cell::Collectible,
                    _ => return Err(LevelError::UnknownColor { rgba, x: x as u32, y: y as u32 }),
                });
            }
            grid.push(cells);
        }
        Self::from_grid(&grid, tile_size)
    }

    fn from_grid(grid: &[Vec<Cell>], tile_size: f32) -> Result<Self, LevelError> {
        let rows = grid.len();
        let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
        if rows == 0 || columns == 0 {
            return Err(LevelError::Empty);
        }

        let mut tiles = Vec::new();
        let mut collectibles = Vec::new();
        let mut spawn = None;
        for (row, cells) in grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let x = col as f32 * tile_size;
                let y = row as f32 * tile_size;
                match cell {
                    Cell::Empty => {}
                    Cell::Solid => tiles.push(StaticTile::new(x, y, tile_size, tile_size)),
                    Cell::Collectible => collectibles.push(Collectible::new(
                        Rect::new(x, y, tile_size, tile_size),
                        Collectible::DEFAULT_VALUE,
                    )),
                    Cell::Spawn => {
                        if spawn.is_some() {
                            return Err(LevelError::DuplicateSpawn { row, col });
                        }
                        spawn = Some(Vec2::new(x, y));
                    }
                }
            }
        }
        let spawn = spawn.ok_or(LevelError::MissingSpawn)?;
        debug_assert!(find_overlap(&tiles).is_none(), "grid tiles never overlap");

        Ok(Self { tiles, collectibles, spawn, columns, rows, tile_size })
    }
}
