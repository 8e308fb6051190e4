//! Semantic surface labels carried by mesh classification buffers.

use config::constants::CLASSIFICATION_NONE;

/// Semantic label of a reconstructed surface.
///
/// The wire format carries the raw byte; this type only names it. Values
/// the mapping does not know are kept as [`SurfaceClassification::Unknown`]
/// so they survive a round trip.
///
/// # Examples
/// ```
/// use scan_geometry::SurfaceClassification;
/// assert_eq!(SurfaceClassification::from(2), SurfaceClassification::Floor);
/// assert_eq!(SurfaceClassification::Floor.raw(), 2);
/// assert_eq!(SurfaceClassification::from(42).label(), "unknown");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SurfaceClassification {
    /// No label.
    #[default]
    None,
    /// Vertical structural surface.
    Wall,
    /// Walkable horizontal surface.
    Floor,
    /// Overhead surface.
    Ceiling,
    /// Raised horizontal work surface.
    Table,
    /// Chair, bench or sofa.
    Seat,
    /// Glazed opening.
    Window,
    /// Door or doorway.
    Door,
    /// A value outside the known set.
    Unknown(u8),
}

impl SurfaceClassification {
    /// Wire value.
    pub fn raw(self) -> u8 {
        match self {
            SurfaceClassification::None => CLASSIFICATION_NONE,
            SurfaceClassification::Wall => 1,
            SurfaceClassification::Floor => 2,
            SurfaceClassification::Ceiling => 3,
            SurfaceClassification::Table => 4,
            SurfaceClassification::Seat => 5,
            SurfaceClassification::Window => 6,
            SurfaceClassification::Door => 7,
            SurfaceClassification::Unknown(value) => value,
        }
    }

    /// Lowercase display label.
    pub fn label(self) -> &'static str {
        match self {
            SurfaceClassification::None => "none",
            SurfaceClassification::Wall => "wall",
            SurfaceClassification::Floor => "floor",
            SurfaceClassification::Ceiling => "ceiling",
            SurfaceClassification::Table => "table",
            SurfaceClassification::Seat => "seat",
            SurfaceClassification::Window => "window",
            SurfaceClassification::Door => "door",
            SurfaceClassification::Unknown(_) => "unknown",
        }
    }
}

impl From<u8> for SurfaceClassification {
    fn from(value: u8) -> Self {
        match value {
            CLASSIFICATION_NONE => SurfaceClassification::None,
            1 => SurfaceClassification::Wall,
            2 => SurfaceClassification::Floor,
            3 => SurfaceClassification::Ceiling,
            4 => SurfaceClassification::Table,
            5 => SurfaceClassification::Seat,
            6 => SurfaceClassification::Window,
            7 => SurfaceClassification::Door,
            other => SurfaceClassification::Unknown(other),
        }
    }
}
