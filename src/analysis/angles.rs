use crate::error::{GeometryError, Result};
use crate::math::angle_2d::{ccw_sweep_deg, ray_direction_deg, FULL_TURN_DEG};
use crate::math::Point2;
use crate::scene::{Scene, VertexData};

/// Sector angles measured at one vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorAngles {
    /// One angle per adjacent region, in kind-list order.
    ///
    /// Empty for a two-neighbour corner. For vertices with neither two nor
    /// three neighbours this holds one zero placeholder per neighbour.
    pub angles: Vec<f64>,
    /// `true` if a neighbour coincides with the vertex, in which case the
    /// direction towards it was taken as 0°.
    pub degenerate: bool,
}

#[derive(Debug, Clone, Copy)]
enum Winding {
    CounterClockwise,
    Clockwise,
}

/// Computes the sector angles around `vertex`.
///
/// For three neighbours `p0, p1, p2` the sector of region `i` is the angle
/// turned counter-clockwise from the ray to `pi` to the ray to `pi+1`. If the
/// kind-list runs clockwise those sectors sum to 720°, so the angles are
/// measured again the other way round before giving up.
///
/// # Errors
///
/// Returns `SceneError::MissingVertexReference` if a neighbour is not in the
/// scene, or `GeometryError::Inconsistent` if the three sectors do not add
/// up to a full turn in either winding.
pub fn sector_angles(scene: &Scene, vertex: &VertexData) -> Result<SectorAngles> {
    let neighbors = scene.neighbor_points(vertex)?;
    match neighbors.len() {
        2 => Ok(SectorAngles {
            angles: Vec::new(),
            degenerate: false,
        }),
        3 => three_sectors(&vertex.name, &vertex.point, &neighbors),
        n => Ok(SectorAngles {
            angles: vec![0.0; n],
            degenerate: false,
        }),
    }
}

fn three_sectors(name: &str, origin: &Point2, neighbors: &[Point2]) -> Result<SectorAngles> {
    let mut degenerate = false;
    let directions: Vec<f64> = neighbors
        .iter()
        .map(|p| {
            ray_direction_deg(origin, p).unwrap_or_else(|| {
                degenerate = true;
                0.0
            })
        })
        .collect();

    let ccw = sweep(&directions, Winding::CounterClockwise);
    if is_full_turn(&ccw) {
        return Ok(SectorAngles {
            angles: ccw,
            degenerate,
        });
    }

    let cw = sweep(&directions, Winding::Clockwise);
    if is_full_turn(&cw) {
        return Ok(SectorAngles {
            angles: cw,
            degenerate,
        });
    }

    Err(GeometryError::Inconsistent {
        vertex: name.to_owned(),
        sum: cw.iter().sum(),
    }
    .into())
}

/// Angle between each consecutive pair of rays, cyclically.
fn sweep(directions: &[f64], winding: Winding) -> Vec<f64> {
    let n = directions.len();
    (0..n)
        .map(|i| {
            let (from, to) = (directions[i], directions[(i + 1) % n]);
            match winding {
                Winding::CounterClockwise => ccw_sweep_deg(from, to),
                Winding::Clockwise => ccw_sweep_deg(to, from),
            }
        })
        .collect()
}

fn is_full_turn(angles: &[f64]) -> bool {
    let sum: f64 = angles.iter().sum();
    (sum.round() - FULL_TURN_DEG).abs() < f64::EPSILON
}
