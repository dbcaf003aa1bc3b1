use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cartesian::NewCartesianPoint2d;
use crate::error::ArcGeoTypesError;
use crate::geo::datum::Datum;
use crate::geo::impls::{ChainProjection, IdentityProjection, InvertedProjection, WebMercator};
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;

/// Coordinate reference system identified by its EPSG code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crs {
    code: u32,
}

/// Kind of projection used by a [`Crs`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProjectionType {
    /// Geographic coordinates (longitude, latitude) on WGS84.
    None,
    /// Spherical Web Mercator.
    WebMercator,
    /// Universal Transverse Mercator on WGS84.
    Utm {
        /// Zone number, 1 to 60.
        zone: u8,
        /// Northern hemisphere.
        north: bool,
    },
    /// Projection that is not known to the crate.
    Unknown,
}

impl Crs {
    /// WGS84 geographic coordinates.
    pub const EPSG4326: Crs = Crs { code: 4326 };
    /// Web Mercator.
    pub const EPSG3857: Crs = Crs { code: 3857 };

    /// Creates a CRS from its EPSG code.
    pub const fn epsg(code: u32) -> Self {
        Self { code }
    }

    /// EPSG code of the CRS.
    pub fn code(&self) -> u32 {
        self.code
    }

    /// Projection used by the CRS.
    pub fn projection_type(&self) -> ProjectionType {
        match self.code {
            4326 => ProjectionType::None,
            3857 | 102100 | 102113 | 900913 => ProjectionType::WebMercator,
            32601..=32660 => ProjectionType::Utm {
                zone: (self.code - 32600) as u8,
                north: true,
            },
            32701..=32760 => ProjectionType::Utm {
                zone: (self.code - 32700) as u8,
                north: false,
            },
            _ => ProjectionType::Unknown,
        }
    }

    /// Projection from WGS84 geographic coordinates into this CRS, or `None` if the projection of the CRS is
    /// not supported.
    pub fn get_projection<P>(&self) -> Option<Box<dyn Projection<InPoint = P, OutPoint = P>>>
    where
        P: NewGeoPoint + NewCartesianPoint2d + Clone + 'static,
    {
        match self.projection_type() {
            ProjectionType::None => Some(Box::new(IdentityProjection::new())),
            ProjectionType::WebMercator => Some(Box::new(WebMercator::new(Datum::WGS84))),
            #[cfg(feature = "geodesy")]
            ProjectionType::Utm { zone, north } => {
                let definition = if north {
                    format!("utm zone={zone}")
                } else {
                    format!("utm zone={zone} south")
                };
                let projection =
                    crate::geo::impls::GeodesyProjection::<P, P>::new(&definition)?;
                Some(Box::new(projection))
            }
            _ => None,
        }
    }

    /// Projection converting points from `self` into `target`, or `None` if either of the systems is not
    /// supported.
    pub fn transformation_to<P>(
        &self,
        target: &Crs,
    ) -> Option<Box<dyn Projection<InPoint = P, OutPoint = P>>>
    where
        P: NewGeoPoint + NewCartesianPoint2d + Clone + 'static,
    {
        if self == target {
            return Some(Box::new(IdentityProjection::new()));
        }

        let source = self.get_projection::<P>()?;
        let target = target.get_projection::<P>()?;

        Some(Box::new(ChainProjection::new(
            Box::new(InvertedProjection::new(source)),
            target,
        )))
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "EPSG:{}", self.code)
    }
}

impl FromStr for Crs {
    type Err = ArcGeoTypesError;

    /// Parses `EPSG:4326`, `epsg:4326` or `4326`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let code = match trimmed.split_once(':') {
            Some((authority, code)) if authority.eq_ignore_ascii_case("epsg") => code,
            Some(_) => return Err(ArcGeoTypesError::InvalidCrs(s.to_string())),
            None => trimmed,
        };

        code.trim()
            .parse::<u32>()
            .map(Crs::epsg)
            .map_err(|_| ArcGeoTypesError::InvalidCrs(s.to_string()))
    }
}

impl Default for Crs {
    fn default() -> Self {
        Self::EPSG4326
    }
}
