use crate::rng::GameRng;
use serde::{Deserialize, Serialize};

pub const GRID_WIDTH: u8 = 10;
pub const GRID_HEIGHT: u8 = 10;

// Chance for a non-shop tile to grow tall grass, on the percent scale.
const GRASS_CHANCE: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Self {
        Position { x, y }
    }

    /// Apply a movement delta, clamped to the grid. Walking into a wall
    /// returns the same position.
    pub fn step(self, dx: i32, dy: i32) -> Position {
        Position {
            x: (self.x as i32 + dx).clamp(0, GRID_WIDTH as i32 - 1) as u8,
            y: (self.y as i32 + dy).clamp(0, GRID_HEIGHT as i32 - 1) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Plain,
    Grass,
    Shop,
}

/// Cosmetic overworld terrain, generated once per session and stable
/// thereafter. Encounter odds never consult it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverworldMap {
    tiles: Vec<Tile>,
}

impl OverworldMap {
    /// Roll terrain for the whole grid: the shop sits at (0,0), every other
    /// tile grows grass with a fixed chance.
    pub fn generate(rng: &mut GameRng) -> Self {
        let mut tiles = Vec::with_capacity(GRID_WIDTH as usize * GRID_HEIGHT as usize);
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let tile = if x == 0 && y == 0 {
                    Tile::Shop
                } else if rng.chance(GRASS_CHANCE, "terrain grass") {
                    Tile::Grass
                } else {
                    Tile::Plain
                };
                tiles.push(tile);
            }
        }
        OverworldMap { tiles }
    }

    pub fn tile(&self, position: Position) -> Tile {
        self.tiles[position.y as usize * GRID_WIDTH as usize + position.x as usize]
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn steps_move_within_the_grid() {
        let position = Position::new(5, 5);
        assert_eq!(position.step(1, 0), Position::new(6, 5));
        assert_eq!(position.step(0, -1), Position::new(5, 4));
    }

    #[test]
    fn steps_clamp_at_the_edges() {
        assert_eq!(Position::new(0, 0).step(-1, -1), Position::new(0, 0));
        assert_eq!(
            Position::new(GRID_WIDTH - 1, GRID_HEIGHT - 1).step(1, 1),
            Position::new(GRID_WIDTH - 1, GRID_HEIGHT - 1)
        );
    }

    #[test]
    fn generated_map_covers_the_grid_with_the_shop_at_origin() {
        let mut rng = GameRng::seeded(1);
        let map = OverworldMap::generate(&mut rng);
        assert_eq!(
            map.tiles().len(),
            GRID_WIDTH as usize * GRID_HEIGHT as usize
        );
        assert_eq!(map.tile(Position::new(0, 0)), Tile::Shop);
        assert!(map.tiles().iter().any(|tile| *tile == Tile::Grass));
        assert!(map.tiles().iter().any(|tile| *tile == Tile::Plain));
    }

    #[test]
    fn same_seed_grows_the_same_terrain() {
        let map_a = OverworldMap::generate(&mut GameRng::seeded(9));
        let map_b = OverworldMap::generate(&mut GameRng::seeded(9));
        assert_eq!(map_a, map_b);
    }
}
