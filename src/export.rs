use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::hexmap::TerrainGrid;

pub const SVG_HEADER: &str = "<!DOCTYPE svg PUBLIC '-//W3C//DTD SVG 1.1//EN' 'http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd'><svg version='1.1' xmlns='http://www.w3.org/2000/svg'>\n";
pub const SVG_FOOTER: &str = "</svg>";

/// Default drawing file written by the binary.
pub const DEFAULT_SVG_PATH: &str = "output.svg";

/// Hexagon vertices for column `col`, row `row`, clockwise from the top left.
/// Even columns are shifted down half a hex.
pub fn hex_vertices(row: usize, col: usize) -> [(usize, usize); 6] {
    let h1 = 24 * row + if col % 2 == 0 { 12 } else { 0 };
    let h2 = h1 + 12;
    let h3 = h2 + 12;
    let w1 = 21 * col;
    let w2 = w1 + 7;
    let w3 = w2 + 14;
    let w4 = w3 + 7;

    [(w2, h1), (w3, h1), (w4, h2), (w3, h3), (w2, h3), (w1, h2)]
}

/// Render the map as an SVG document, one polygon per hex.
pub fn render_svg(grid: &TerrainGrid) -> String {
    let mut result = String::from(SVG_HEADER);

    for col in 0..grid.width {
        for row in 0..grid.height {
            let points = hex_vertices(row, col)
                .iter()
                .map(|(x, y)| format!("{},{}", x, y))
                .collect::<Vec<_>>()
                .join(" ");
            result.push_str(&format!(
                "  <polygon points='{}' fill='{}' stroke='black' stroke-width='1'/>\n",
                points,
                grid.get(row, col).kind().color()
            ));
        }
    }

    result.push_str(SVG_FOOTER);
    result
}

/// Write the SVG drawing to `path`.
pub fn export_svg(grid: &TerrainGrid, path: impl AsRef<Path>) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "{}", render_svg(grid))?;
    file.flush()?;
    Ok(())
}

/// Write the text dump to `path`.
pub fn export_text(grid: &TerrainGrid, path: impl AsRef<Path>) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write!(file, "{}", crate::ascii::render_text_map(grid))?;
    file.flush()?;
    Ok(())
}

/// Write the grid as JSON to `path`.
pub fn export_json(grid: &TerrainGrid, path: impl AsRef<Path>) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut file, grid)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GridBuilder;
    use crate::draws::RandomDraws;
    use crate::terrain::TerrainCell;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_single_hex_vertices() {
        assert_eq!(
            hex_vertices(0, 0),
            [(7, 12), (21, 12), (28, 24), (21, 36), (7, 36), (0, 24)]
        );
        // Odd columns sit half a hex higher
        assert_eq!(hex_vertices(0, 1)[0], (28, 0));
    }

    #[test]
    fn test_single_hex_document() {
        let grid = TerrainGrid::new_with(1, 1, TerrainCell::PLAIN);
        let svg = render_svg(&grid);
        assert!(svg.starts_with(SVG_HEADER));
        assert!(svg.ends_with(SVG_FOOTER));
        assert_eq!(svg.matches("<polygon").count(), 1);
        assert!(svg.contains(
            "<polygon points='7,12 21,12 28,24 21,36 7,36 0,24' fill='greenyellow' stroke='black' stroke-width='1'/>"
        ));
    }

    #[test]
    fn test_polygon_per_hex() {
        let mut draws = RandomDraws::new(ChaCha8Rng::seed_from_u64(42));
        let grid = GridBuilder::new(29, 33).build(&mut draws);
        assert_eq!(render_svg(&grid).matches("<polygon").count(), 29 * 33);
    }

    #[test]
    fn test_export_files() {
        let mut draws = RandomDraws::new(ChaCha8Rng::seed_from_u64(42));
        let grid = GridBuilder::new(4, 5).build(&mut draws);
        let dir = std::env::temp_dir().join(format!("hex_terrain_export_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let svg_path = dir.join("map.svg");
        export_svg(&grid, &svg_path).unwrap();
        let svg = std::fs::read_to_string(&svg_path).unwrap();
        assert_eq!(svg, format!("{}\n", render_svg(&grid)));

        let json_path = dir.join("map.json");
        export_json(&grid, &json_path).unwrap();
        let restored: TerrainGrid =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(restored, grid);

        let text_path = dir.join("map.txt");
        export_text(&grid, &text_path).unwrap();
        assert_eq!(std::fs::read_to_string(&text_path).unwrap().lines().count(), 8);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let grid = TerrainGrid::new_with(1, 1, TerrainCell::PLAIN);
        let path = std::env::temp_dir().join("hex_terrain_missing_dir/none/output.svg");
        assert!(export_svg(&grid, path).is_err());
    }
}
