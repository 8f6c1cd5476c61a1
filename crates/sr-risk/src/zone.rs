//! Risk-zone polygons.

use geo::{Area, BoundingRect, Intersects, LineString, Point, Polygon};
use rstar::AABB;

use sr_core::{GeoPoint, ZoneId};

use crate::{RiskError, RiskResult};

/// A polygonal region with a severity score.
///
/// Coordinates follow the node convention: longitude is `x`, latitude is `y`.
/// Construction validates the polygon, so every `RiskZone` has a finite,
/// non-degenerate boundary and a severity of at least 1.
#[derive(Clone, Debug)]
pub struct RiskZone {
    pub id:       ZoneId,
    pub name:     String,
    pub severity: u32,
    boundary:     Polygon<f64>,
    envelope:     AABB<[f64; 2]>,
}

impl RiskZone {
    /// Build a zone from an exterior ring.  The ring may be given open or
    /// closed (first vertex repeated at the end).
    pub fn new(
        id: ZoneId,
        name: impl Into<String>,
        ring: &[GeoPoint],
        severity: u32,
    ) -> RiskResult<Self> {
        let exterior: Vec<(f64, f64)> = ring.iter().map(|p| p.to_tuple()).collect();
        Self::from_polygon(id, name, Polygon::new(LineString::from(exterior), vec![]), severity)
    }

    /// Build a zone from an existing polygon (holes are honoured).
    pub fn from_polygon(
        id: ZoneId,
        name: impl Into<String>,
        boundary: Polygon<f64>,
        severity: u32,
    ) -> RiskResult<Self> {
        if severity == 0 {
            return Err(invalid(id, "severity must be positive"));
        }
        let non_finite = boundary
            .exterior()
            .coords()
            .chain(boundary.interiors().iter().flat_map(|hole| hole.coords()))
            .any(|c| !(c.x.is_finite() && c.y.is_finite()));
        if non_finite {
            return Err(invalid(id, "ring has a non-finite vertex"));
        }
        // A closed ring of a triangle has 4 coordinates.
        if boundary.exterior().0.len() < 4 {
            return Err(invalid(id, "ring needs at least three vertices"));
        }
        if boundary.unsigned_area() <= 0.0 {
            return Err(invalid(id, "ring encloses no area"));
        }
        let rect = boundary
            .bounding_rect()
            .ok_or_else(|| invalid(id, "ring has no bounding box"))?;
        let envelope = AABB::from_corners(
            [rect.min().x, rect.min().y],
            [rect.max().x, rect.max().y],
        );

        Ok(Self { id, name: name.into(), severity, boundary, envelope })
    }

    pub fn boundary(&self) -> &Polygon<f64> {
        &self.boundary
    }

    /// Axis-aligned bounding box `[lon, lat]`, as stored in the R-tree.
    pub fn envelope(&self) -> AABB<[f64; 2]> {
        self.envelope
    }

    /// `true` if `point` lies inside the zone or on its boundary.
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.boundary.intersects(&Point::new(point.lon, point.lat))
    }
}

fn invalid(id: ZoneId, reason: &str) -> RiskError {
    RiskError::InvalidZone { id, reason: reason.to_owned() }
}
