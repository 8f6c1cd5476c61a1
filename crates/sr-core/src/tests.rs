//! Unit tests for sr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId, ZoneId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
        assert!(NodeId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn ordering() {
        assert!(ZoneId(0) < ZoneId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(ZoneId::INVALID.index(), u32::MAX as usize);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn midpoint_is_plain_average() {
        let b = GeoPoint::new(-73.9960, 40.7228);
        let c = GeoPoint::new(-73.9860, 40.7328);
        let m = b.midpoint(c);
        assert!((m.lon - -73.9910).abs() < 1e-12);
        assert!((m.lat - 40.7278).abs() < 1e-12);
    }

    #[test]
    fn midpoint_is_symmetric() {
        let a = GeoPoint::new(-74.0060, 40.7128);
        let e = GeoPoint::new(-73.9850, 40.7528);
        assert_eq!(a.midpoint(e), e.midpoint(a));
    }

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(-74.0060, 40.7128);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(-74.0, 40.0);
        let b = GeoPoint::new(-74.0, 41.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn tuple_is_lon_lat() {
        let p: GeoPoint = (-73.9850, 40.7528).into();
        assert_eq!(p.lon, -73.9850);
        assert_eq!(p.to_tuple(), (-73.9850, 40.7528));
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_finite());
        assert!(GeoPoint::new(0.0, 0.0).is_finite());
    }
}

#[cfg(test)]
mod catalog {
    use crate::{ConfigError, GeoPoint, MapConfig, NodeCatalog, NodeId};

    fn three_nodes() -> NodeCatalog {
        let mut c = NodeCatalog::new();
        c.add("a", GeoPoint::new(0.0, 0.0)).unwrap();
        c.add("b", GeoPoint::new(1.0, 0.0)).unwrap();
        c.add("c", GeoPoint::new(2.0, 0.0)).unwrap();
        c
    }

    #[test]
    fn ids_follow_declaration_order() {
        let c = three_nodes();
        assert_eq!(c.id_of("a"), Some(NodeId(0)));
        assert_eq!(c.id_of("c"), Some(NodeId(2)));
        assert_eq!(c.id_of("z"), None);
        assert_eq!(c.name(NodeId(1)), "b");
        assert_eq!(c.pos(NodeId(2)), GeoPoint::new(2.0, 0.0));
        assert_eq!(c.names().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut c = three_nodes();
        let err = c.add("b", GeoPoint::new(9.0, 9.0)).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateNode(n) if n == "b"));
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let mut c = NodeCatalog::new();
        let err = c.add("x", GeoPoint::new(f64::INFINITY, 0.0)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCoordinate { .. }));
        assert!(c.is_empty());
    }

    #[test]
    fn resolve_streets_in_order() {
        let map = MapConfig::new(three_nodes())
            .with_street("a", "b")
            .with_street("c", "b");
        let resolved = map.resolve_streets().unwrap();
        assert_eq!(resolved, vec![(NodeId(0), NodeId(1)), (NodeId(2), NodeId(1))]);
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let map = MapConfig::new(three_nodes()).with_street("a", "ghost");
        match map.validate().unwrap_err() {
            ConfigError::UnknownEndpoint { from, to, missing } => {
                assert_eq!((from.as_str(), to.as_str()), ("a", "ghost"));
                assert_eq!(missing, "ghost");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn self_loop_rejected() {
        let map = MapConfig::new(three_nodes()).with_street("a", "a");
        assert!(matches!(map.validate(), Err(ConfigError::SelfLoop(_))));
    }

    #[test]
    fn reversed_duplicate_rejected() {
        let map = MapConfig::new(three_nodes())
            .with_street("a", "b")
            .with_street("b", "a");
        assert!(matches!(map.validate(), Err(ConfigError::DuplicateStreet { .. })));
    }

    #[test]
    fn isolated_node_is_valid() {
        let map = MapConfig::new(three_nodes()).with_street("a", "b");
        assert!(map.validate().is_ok());
    }
}

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use crate::{load_map_csv, load_map_reader, ConfigError, NodeId};

    const NODES: &str = "\
name,lon,lat
A_Home,-74.0060,40.7128
B_Intersection,-73.9960,40.7228
C_Risky_Area,-73.9860,40.7328
";

    const STREETS: &str = "\
from,to
A_Home,B_Intersection
B_Intersection,C_Risky_Area
";

    #[test]
    fn loads_from_readers() {
        let map = load_map_reader(Cursor::new(NODES), Cursor::new(STREETS)).unwrap();
        assert_eq!(map.catalog().len(), 3);
        assert_eq!(map.streets().len(), 2);
        assert_eq!(map.catalog().id_of("C_Risky_Area"), Some(NodeId(2)));
        assert_eq!(map.catalog().pos(NodeId(0)).lon, -74.0060);
    }

    #[test]
    fn loads_from_files() {
        let mut nodes = tempfile::NamedTempFile::new().unwrap();
        nodes.write_all(NODES.as_bytes()).unwrap();
        let mut streets = tempfile::NamedTempFile::new().unwrap();
        streets.write_all(STREETS.as_bytes()).unwrap();

        let map = load_map_csv(nodes.path(), streets.path()).unwrap();
        assert_eq!(map.catalog().len(), 3);
    }

    #[test]
    fn bad_coordinate_is_parse_error() {
        let nodes = "name,lon,lat\nA,not-a-number,1.0\n";
        let err = load_map_reader(Cursor::new(nodes), Cursor::new("from,to\n")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn street_to_undeclared_node_fails_load() {
        let streets = "from,to\nA_Home,Z_Unknown\n";
        let err = load_map_reader(Cursor::new(NODES), Cursor::new(streets)).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEndpoint { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_map_csv(&dir.path().join("nope.csv"), &dir.path().join("nope2.csv"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
