//! Placement of the floating detail card next to a graph node

use crate::value_objects::{Position2D, Size};
use serde::{Deserialize, Serialize};

/// Default gap between the card, the node and the viewport edges
pub const DEFAULT_CARD_MARGIN: f64 = 20.0;

/// Cap on the spare room that counts towards a quadrant's score, per axis
const MAX_SPARE_SCORE: f64 = 100.0;
const RIGHT_BONUS: f64 = 20.0;
const BOTTOM_BONUS: f64 = 10.0;

/// Side of the node the card opens towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn is_right(&self) -> bool {
        matches!(self, Quadrant::TopRight | Quadrant::BottomRight)
    }

    pub fn is_bottom(&self) -> bool {
        matches!(self, Quadrant::BottomLeft | Quadrant::BottomRight)
    }
}

/// Where the card's top-left corner goes, and which quadrant won
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardPlacement {
    pub position: Position2D,
    pub quadrant: Quadrant,
}

struct Candidate {
    quadrant: Quadrant,
    position: Position2D,
    available: Size,
}

fn build_candidate(quadrant: Quadrant, node: Position2D, card: Size, viewport: Size, margin: f64) -> Candidate {
    let (x, available_width) = if quadrant.is_right() {
        (node.x + margin, viewport.width - node.x - margin)
    } else {
        (node.x - card.width - margin, node.x - margin)
    };
    let (y, available_height) = if quadrant.is_bottom() {
        (node.y + margin, viewport.height - node.y - margin)
    } else {
        (node.y - card.height - margin, node.y - margin)
    };

    Candidate {
        quadrant,
        position: Position2D::new(x, y),
        available: Size::new(available_width, available_height),
    }
}

fn score_candidate(candidate: &Candidate, card: Size) -> Option<f64> {
    let spare_width = candidate.available.width - card.width;
    let spare_height = candidate.available.height - card.height;
    if spare_width < 0.0 || spare_height < 0.0 {
        return None;
    }

    let mut score = spare_width.min(MAX_SPARE_SCORE) + spare_height.min(MAX_SPARE_SCORE);
    if candidate.quadrant.is_right() {
        score += RIGHT_BONUS;
    }
    if candidate.quadrant.is_bottom() {
        score += BOTTOM_BONUS;
    }
    Some(score)
}

/// Clamp into `[low, high]`, favouring `low` when the range is empty
fn clamp_axis(value: f64, low: f64, high: f64) -> f64 {
    value.min(high).max(low)
}

/// Best quadrant for a `card_size` card anchored at `node_position`
///
/// Falls back to bottom-right when no quadrant has room. The returned
/// position is always clamped to `[margin, viewport - card - margin]` per axis.
pub fn get_best_card_position(
    node_position: Position2D,
    card_size: Size,
    viewport_size: Size,
    margin: f64,
) -> CardPlacement {
    let mut best: Option<(f64, Candidate)> = None;
    for quadrant in Quadrant::ALL {
        let candidate = build_candidate(quadrant, node_position, card_size, viewport_size, margin);
        if let Some(score) = score_candidate(&candidate, card_size) {
            if best.as_ref().map_or(true, |(top, _)| score > *top) {
                best = Some((score, candidate));
            }
        }
    }

    let chosen = match best {
        Some((_, candidate)) => candidate,
        None => build_candidate(Quadrant::BottomRight, node_position, card_size, viewport_size, margin),
    };

    let position = Position2D::new(
        clamp_axis(chosen.position.x, margin, viewport_size.width - card_size.width - margin),
        clamp_axis(chosen.position.y, margin, viewport_size.height - card_size.height - margin),
    );

    CardPlacement {
        position,
        quadrant: chosen.quadrant,
    }
}
