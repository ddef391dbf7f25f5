//! Passmark (notch) geometry.
//!
//! A passmark is a short mark on the cutting line used to align pieces when
//! sewing. The mark is built from one seam-allowance point: its base runs
//! from the seam line toward the allowance line, and the line type shapes
//! the mark around that base.

use std::f64::consts::{FRAC_PI_2, PI};

use smallvec::SmallVec;

use seamkit_core::Point;

use crate::node::PassmarkLineType;
use crate::path::AllowancePoint;

/// Segment list of one rendered passmark.
pub type PassmarkLines = SmallVec<[(Point, Point); 3]>;

/// Number of chords used to approximate the U-mark cap.
const U_CAP_CHORDS: usize = 4;

/// Builds the mark polylines for one seam-allowance point.
///
/// `allowance_point` is the matching point on the cutting contour; it gives
/// the default mark direction (the straightforward rule) and length. Manual
/// overrides on the point win over both. Returns no lines when the point's
/// geometry is degenerate.
pub fn build_passmark(
    sa: &AllowancePoint,
    allowance_point: Point,
    line_type: PassmarkLineType,
) -> PassmarkLines {
    let seam = sa.point;
    let default_length = seam.distance_to(&allowance_point);

    let length = if sa.manual_passmark_length {
        sa.passmark_length
    } else {
        default_length
    };
    if length <= 0.0 {
        return PassmarkLines::new();
    }
    let angle = if sa.manual_passmark_angle {
        sa.passmark_angle
    } else {
        seam.angle_to(&allowance_point)
    };
    let width = if sa.manual_passmark_width {
        sa.passmark_width
    } else {
        length / 2.0
    };

    let base_end = seam.polar(length, angle);
    let perp = angle + FRAC_PI_2;
    // One-sided marks open the other way when the clockwise flag is set.
    let side = if sa.passmark_clockwise_opening {
        -1.0
    } else {
        1.0
    };

    let mut lines = PassmarkLines::new();
    match line_type {
        PassmarkLineType::OneLine => {
            lines.push((seam, base_end));
        }
        PassmarkLineType::TwoLines => {
            for offset in [-width / 2.0, width / 2.0] {
                lines.push((seam.polar(offset, perp), base_end.polar(offset, perp)));
            }
        }
        PassmarkLineType::ThreeLines => {
            for offset in [-width / 2.0, 0.0, width / 2.0] {
                lines.push((seam.polar(offset, perp), base_end.polar(offset, perp)));
            }
        }
        PassmarkLineType::TMark => {
            lines.push((seam, base_end));
            lines.push((
                base_end.polar(-width / 2.0, perp),
                base_end.polar(width / 2.0, perp),
            ));
        }
        PassmarkLineType::VMark => {
            lines.push((seam, base_end.polar(-width / 2.0, perp)));
            lines.push((seam, base_end.polar(width / 2.0, perp)));
        }
        PassmarkLineType::UMark => {
            let radius = width / 2.0;
            let leg_a = seam.polar(-radius, perp);
            let leg_b = seam.polar(radius, perp);
            let cap_center = seam.polar((length - radius).max(0.0), angle);
            lines.push((leg_a, cap_center.polar(-radius, perp)));
            // Approximate the cap with a few chords from one leg to the other.
            let mut prev = cap_center.polar(-radius, perp);
            for i in 1..=U_CAP_CHORDS {
                let t = perp + PI * (i as f64) / (U_CAP_CHORDS as f64);
                let next = cap_center.polar(radius, t + PI);
                lines.push((prev, next));
                prev = next;
            }
            lines.push((cap_center.polar(radius, perp), leg_b));
        }
        PassmarkLineType::BoxMark => {
            let leg_a = seam.polar(-width / 2.0, perp);
            let leg_b = seam.polar(width / 2.0, perp);
            let cap_a = base_end.polar(-width / 2.0, perp);
            let cap_b = base_end.polar(width / 2.0, perp);
            lines.push((leg_a, cap_a));
            lines.push((cap_a, cap_b));
            lines.push((cap_b, leg_b));
        }
        PassmarkLineType::CheckMark => {
            lines.push((seam, base_end));
            lines.push((base_end, base_end.polar(side * width, perp)));
        }
    }
    lines
}
