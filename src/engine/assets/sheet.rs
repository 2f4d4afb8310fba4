// Sprite sheet slicing into per-state texture strips
//
// Each sheet row holds one state. Column 0 of every row is a wider reference
// swatch and is skipped; the remaining columns are equally sized frames.

use crate::core::error::ConfigError;
use image::{imageops, RgbaImage};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The fixed set of animation states a sheet can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StateName {
    Jump,
    Idle1,
    Idle2,
    Sit,
    Walk,
    Run,
    Sniff,
    SniffWalk,
}

impl StateName {
    /// Every state, in corgi sheet row order
    pub const ALL: [StateName; 8] = [
        Self::Jump,
        Self::Idle1,
        Self::Idle2,
        Self::Sit,
        Self::Walk,
        Self::Run,
        Self::Sniff,
        Self::SniffWalk,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Jump => "jump",
            Self::Idle1 => "idle1",
            Self::Idle2 => "idle2",
            Self::Sit => "sit",
            Self::Walk => "walk",
            Self::Run => "run",
            Self::Sniff => "sniff",
            Self::SniffWalk => "sniff_walk",
        }
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StateName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|state| state.name() == s)
            .ok_or_else(|| ConfigError::UnknownState(s.to_string()))
    }
}

/// Source rectangle of one frame on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRegion {
    pub state: StateName,

    /// Position on the sheet (pixels)
    pub x: u32,
    pub y: u32,

    /// Size of the region (pixels)
    pub width: u32,
    pub height: u32,
}

/// Row/column layout of a sprite sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// Width of each frame in pixels
    pub frame_width: u32,
    /// Height of each frame (and each row) in pixels
    pub frame_height: u32,
    /// Width of the reserved column 0
    pub first_column_width: u32,
    /// States in row order with their column counts (including column 0)
    rows: Vec<(StateName, u32)>,
}

impl SheetLayout {
    /// Create an empty layout
    pub fn new(frame_width: u32, frame_height: u32, first_column_width: u32) -> Self {
        Self {
            frame_width,
            frame_height,
            first_column_width,
            rows: Vec::new(),
        }
    }

    /// Append the next row
    pub fn with_row(mut self, state: StateName, columns: u32) -> Self {
        self.rows.push((state, columns));
        self
    }

    /// The welsh corgi sheet: 64x64 frames, 100px swatch column, 8 rows
    pub fn corgi() -> Self {
        Self::new(64, 64, 100)
            .with_row(StateName::Jump, 11)
            .with_row(StateName::Idle1, 5)
            .with_row(StateName::Idle2, 5)
            .with_row(StateName::Sit, 9)
            .with_row(StateName::Walk, 5)
            .with_row(StateName::Run, 8)
            .with_row(StateName::Sniff, 8)
            .with_row(StateName::SniffWalk, 8)
    }

    pub fn rows(&self) -> &[(StateName, u32)] {
        &self.rows
    }

    /// Total frames across all rows
    pub fn total_frames(&self) -> usize {
        self.rows
            .iter()
            .map(|(_, columns)| columns.saturating_sub(1) as usize)
            .sum()
    }

    /// Smallest sheet size (width, height) that holds every frame
    ///
    /// Each dimension saturates at `u32::MAX` when the layout is too large
    /// to address, so no real sheet satisfies it.
    pub fn required_size(&self) -> (u32, u32) {
        let widest = self.rows.iter().map(|(_, c)| *c).max().unwrap_or(1);
        let width = widest
            .saturating_sub(1)
            .checked_mul(self.frame_width)
            .and_then(|frames| frames.checked_add(self.first_column_width))
            .unwrap_or(u32::MAX);
        let height = u32::try_from(self.rows.len())
            .ok()
            .and_then(|rows| rows.checked_mul(self.frame_height))
            .unwrap_or(u32::MAX);
        (width, height)
    }

    /// Check the layout against the number of rows the caller declares
    pub fn validate(&self, declared_rows: usize) -> Result<(), ConfigError> {
        if self.rows.len() != declared_rows {
            return Err(ConfigError::RowCountMismatch {
                declared: declared_rows,
                layout: self.rows.len(),
            });
        }

        let mut seen = Vec::with_capacity(self.rows.len());
        for &(state, columns) in &self.rows {
            if seen.contains(&state) {
                return Err(ConfigError::DuplicateState(state));
            }
            if columns < 2 {
                return Err(ConfigError::EmptyState { state, columns });
            }
            seen.push(state);
        }

        Ok(())
    }

    /// Source rectangle of every frame, row by row
    ///
    /// Coordinates are only meaningful for layouts whose `required_size`
    /// fits the sheet; `load_textures` checks that before slicing.
    pub fn regions(&self) -> Vec<FrameRegion> {
        let mut regions = Vec::with_capacity(self.total_frames());
        for (row, &(state, columns)) in self.rows.iter().enumerate() {
            let row = row as u32;
            for column in 1..columns {
                regions.push(FrameRegion {
                    state,
                    x: self
                        .first_column_width
                        .saturating_add((column - 1).saturating_mul(self.frame_width)),
                    y: row.saturating_mul(self.frame_height),
                    width: self.frame_width,
                    height: self.frame_height,
                });
            }
        }
        regions
    }
}

/// One animation frame in both orientations
#[derive(Debug, Clone)]
pub struct Frame {
    pub normal: RgbaImage,
    pub mirrored: RgbaImage,
}

impl Frame {
    /// Crop a region and build its mirrored copy
    fn from_region(sheet: &RgbaImage, region: &FrameRegion) -> Self {
        let normal =
            imageops::crop_imm(sheet, region.x, region.y, region.width, region.height).to_image();
        let mirrored = imageops::flip_horizontal(&normal);
        Self { normal, mirrored }
    }

    /// Texture for a facing direction
    pub fn oriented(&self, facing_right: bool) -> &RgbaImage {
        if facing_right {
            &self.normal
        } else {
            &self.mirrored
        }
    }
}

/// Frames for every state of a sheet, immutable once built
#[derive(Debug, Clone)]
pub struct TextureTable {
    frames: HashMap<StateName, Vec<Frame>>,
    /// States in sheet row order
    order: Vec<StateName>,
}

impl TextureTable {
    /// All frames of a state
    pub fn frames(&self, state: StateName) -> Result<&[Frame], ConfigError> {
        self.frames
            .get(&state)
            .map(Vec::as_slice)
            .ok_or(ConfigError::MissingState(state))
    }

    pub fn frame_count(&self, state: StateName) -> Result<usize, ConfigError> {
        self.frames(state).map(<[Frame]>::len)
    }

    /// A single frame of a state
    pub fn frame(&self, state: StateName, index: usize) -> Result<&Frame, ConfigError> {
        let frames = self.frames(state)?;
        frames.get(index).ok_or(ConfigError::FrameOutOfRange {
            state,
            index,
            count: frames.len(),
        })
    }

    /// Texture for a state, frame and facing
    pub fn texture(
        &self,
        state: StateName,
        index: usize,
        facing_right: bool,
    ) -> Result<&RgbaImage, ConfigError> {
        self.frame(state, index)
            .map(|frame| frame.oriented(facing_right))
    }

    /// States in sheet row order
    pub fn states(&self) -> &[StateName] {
        &self.order
    }

    pub fn total_frames(&self) -> usize {
        self.frames.values().map(Vec::len).sum()
    }
}

/// Slice a sheet into a texture table
///
/// `declared_rows` is the number of rows the caller says the sheet has; it
/// must match the layout exactly.
pub fn load_textures(
    sheet: &RgbaImage,
    layout: &SheetLayout,
    declared_rows: usize,
) -> Result<TextureTable, ConfigError> {
    layout.validate(declared_rows)?;

    let (needed_width, needed_height) = layout.required_size();
    if sheet.width() < needed_width || sheet.height() < needed_height {
        return Err(ConfigError::SheetTooSmall {
            needed_width,
            needed_height,
            width: sheet.width(),
            height: sheet.height(),
        });
    }

    let mut frames: HashMap<StateName, Vec<Frame>> = HashMap::new();
    for region in layout.regions() {
        frames
            .entry(region.state)
            .or_default()
            .push(Frame::from_region(sheet, &region));
    }

    Ok(TextureTable {
        frames,
        order: layout.rows().iter().map(|(state, _)| *state).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const FRAME: u32 = 4;
    const SWATCH: u32 = 6;

    fn small_layout() -> SheetLayout {
        SheetLayout::new(FRAME, FRAME, SWATCH)
            .with_row(StateName::Sit, 9)
            .with_row(StateName::Walk, 5)
    }

    /// Sheet where every frame is filled with a color encoding (row, column)
    fn painted_sheet(layout: &SheetLayout) -> RgbaImage {
        let (width, height) = layout.required_size();
        let mut sheet = RgbaImage::new(width, height);
        for region in layout.regions() {
            let row = (region.y / FRAME) as u8;
            let column = ((region.x - SWATCH) / FRAME + 1) as u8;
            for y in region.y..region.y + region.height {
                for x in region.x..region.x + region.width {
                    sheet.put_pixel(x, y, Rgba([row, column, 0, 255]));
                }
            }
        }
        sheet
    }

    #[test]
    fn test_state_name_round_trip_names() {
        assert_eq!("sniff_walk".parse::<StateName>().unwrap(), StateName::SniffWalk);
        assert_eq!(StateName::Idle2.to_string(), "idle2");
        assert!(matches!(
            "fly".parse::<StateName>(),
            Err(ConfigError::UnknownState(_))
        ));
    }

    #[test]
    fn test_sit_walk_frame_counts() {
        let layout = small_layout();
        let table = load_textures(&painted_sheet(&layout), &layout, 2).unwrap();

        assert_eq!(table.frame_count(StateName::Sit).unwrap(), 8);
        assert_eq!(table.frame_count(StateName::Walk).unwrap(), 4);
        assert_eq!(table.total_frames(), 12);
        assert_eq!(table.states(), &[StateName::Sit, StateName::Walk]);
    }

    #[test]
    fn test_corgi_layout_totals() {
        let layout = SheetLayout::corgi();
        assert_eq!(layout.rows().len(), 8);

        let expected: u32 = layout.rows().iter().map(|(_, c)| c - 1).sum();
        assert_eq!(layout.total_frames(), expected as usize);
        assert_eq!(layout.required_size(), (100 + 10 * 64, 8 * 64));
    }

    #[test]
    fn test_region_offsets_skip_swatch() {
        let layout = small_layout();
        let regions = layout.regions();

        let first_walk = regions
            .iter()
            .find(|r| r.state == StateName::Walk)
            .unwrap();
        assert_eq!((first_walk.x, first_walk.y), (SWATCH, FRAME));

        let third_sit = regions
            .iter()
            .filter(|r| r.state == StateName::Sit)
            .nth(2)
            .unwrap();
        assert_eq!(third_sit.x, SWATCH + 2 * FRAME);
        assert_eq!(third_sit.y, 0);
    }

    #[test]
    fn test_frames_cropped_from_right_cells() {
        let layout = small_layout();
        let table = load_textures(&painted_sheet(&layout), &layout, 2).unwrap();

        let walk_2 = table.texture(StateName::Walk, 2, true).unwrap();
        // Frame index 2 is sheet column 3 of row 1
        assert_eq!(*walk_2.get_pixel(0, 0), Rgba([1, 3, 0, 255]));
        assert_eq!(*walk_2.get_pixel(FRAME - 1, FRAME - 1), Rgba([1, 3, 0, 255]));
    }

    #[test]
    fn test_mirrored_frame_matches_dimensions_and_flips() {
        let layout = SheetLayout::new(FRAME, FRAME, SWATCH).with_row(StateName::Jump, 2);
        let (width, height) = layout.required_size();
        let mut sheet = RgbaImage::new(width, height);
        // Mark the left edge of the single frame
        sheet.put_pixel(SWATCH, 1, Rgba([255, 0, 0, 255]));

        let table = load_textures(&sheet, &layout, 1).unwrap();
        let frame = table.frame(StateName::Jump, 0).unwrap();

        assert_eq!(frame.normal.dimensions(), frame.mirrored.dimensions());
        assert_eq!(*frame.normal.get_pixel(0, 1), Rgba([255, 0, 0, 255]));
        assert_eq!(*frame.mirrored.get_pixel(FRAME - 1, 1), Rgba([255, 0, 0, 255]));
        assert_eq!(frame.oriented(false), &frame.mirrored);
    }

    #[test]
    fn test_row_count_mismatch() {
        let layout = small_layout();
        let result = load_textures(&painted_sheet(&layout), &layout, 3);
        assert!(matches!(
            result,
            Err(ConfigError::RowCountMismatch {
                declared: 3,
                layout: 2
            })
        ));
    }

    #[test]
    fn test_duplicate_and_empty_rows_rejected() {
        let duplicate = SheetLayout::new(FRAME, FRAME, SWATCH)
            .with_row(StateName::Sit, 3)
            .with_row(StateName::Sit, 3);
        assert!(matches!(
            duplicate.validate(2),
            Err(ConfigError::DuplicateState(StateName::Sit))
        ));

        let empty = SheetLayout::new(FRAME, FRAME, SWATCH).with_row(StateName::Run, 1);
        assert!(matches!(
            empty.validate(1),
            Err(ConfigError::EmptyState { columns: 1, .. })
        ));
    }

    #[test]
    fn test_sheet_too_small() {
        let layout = small_layout();
        let sheet = RgbaImage::new(10, 10);
        assert!(matches!(
            load_textures(&sheet, &layout, 2),
            Err(ConfigError::SheetTooSmall { .. })
        ));
    }

    #[test]
    fn test_oversized_layout_is_too_small_not_overflow() {
        let layout = SheetLayout::new(64, 64, 100).with_row(StateName::Sit, 100_000_000);
        assert_eq!(layout.required_size(), (u32::MAX, 64));

        let sheet = RgbaImage::new(740, 64);
        assert!(matches!(
            load_textures(&sheet, &layout, 1),
            Err(ConfigError::SheetTooSmall {
                needed_width: u32::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_lookup_errors() {
        let layout = small_layout();
        let table = load_textures(&painted_sheet(&layout), &layout, 2).unwrap();

        assert!(matches!(
            table.frames(StateName::Jump),
            Err(ConfigError::MissingState(StateName::Jump))
        ));
        assert!(matches!(
            table.frame(StateName::Walk, 4),
            Err(ConfigError::FrameOutOfRange { index: 4, count: 4, .. })
        ));
    }
}
