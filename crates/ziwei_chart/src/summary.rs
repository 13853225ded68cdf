//! Post-pass digest of a finished chart.

use serde::{Deserialize, Serialize};
use ziwei_base::{PalaceName, StarKind, Transformation};

use crate::chart::Palace;

/// A transformation mark found on a placed star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedStar {
    pub transformation: Transformation,
    pub star: StarKind,
    pub palace: u8,
    pub palace_name: PalaceName,
}

/// Digest built after the last step: where the marks landed and the Life
/// Palace's leading major star.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSummary {
    /// Marks in palace order, then bucket order.
    pub transformations: Vec<MarkedStar>,
    /// First major star of the Life Palace; `None` for an empty Life Palace.
    pub life_main_star: Option<StarKind>,
}

impl ChartSummary {
    /// Scan finished palaces; stars dropped from the chart contribute nothing.
    pub fn from_palaces(palaces: &[Palace], life_palace: u8) -> Self {
        let transformations = palaces
            .iter()
            .flat_map(|p| {
                p.stars.iter().flat_map(move |s| {
                    s.transformations.iter().map(move |&t| MarkedStar {
                        transformation: t,
                        star: s.kind,
                        palace: p.number,
                        palace_name: p.name,
                    })
                })
            })
            .collect();
        let life_main_star = palaces
            .iter()
            .find(|p| p.number == life_palace)
            .and_then(|p| p.main_stars().first())
            .map(|s| s.kind);
        Self {
            transformations,
            life_main_star,
        }
    }
}
