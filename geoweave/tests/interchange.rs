use approx::assert_abs_diff_eq;
use assert_matches::assert_matches;
use geoweave::geojson::{GeoJsonReader, GeoJsonWriter};
use geoweave::wkt::{WktError, WktReader, WktWriter};
use geoweave::GeoweaveError;
use geoweave_types::cartesian::{CartesianPoint2d, Point2};
use geoweave_types::impls::Polygon;
use geoweave_types::{CartesianFactory, Geom, GeometryHint};

#[test]
fn wkt_round_trip() {
    let writer = WktWriter::new();
    for text in [
        "POINT (1 2)",
        "MULTIPOINT ((1 2), (3 4))",
        "LINESTRING (0 0, 1.5 1, 2 -2)",
        "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0), (1 1, 2 1, 2 2, 1 1))",
        "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)), ((5 5, 6 5, 6 6, 5 5)))",
        "GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1))",
    ] {
        let geometry = geoweave::read_wkt(text)
            .expect("valid WKT")
            .expect("not empty");
        assert_eq!(writer.write(&geometry), text);
    }
}

#[test]
fn wkt_point() {
    let point = geoweave::read_wkt("POINT(1 2)").unwrap();
    assert_matches!(point, Some(Geom::Point(p)) if p == Point2::new(1.0, 2.0));

    assert_matches!(geoweave::read_wkt("POINT EMPTY"), Ok(None));
    assert_matches!(
        geoweave::read_wkt("POINT(1)"),
        Err(GeoweaveError::Wkt(WktError::UnexpectedToken { .. }))
    );
}

#[test]
fn wkt_nested_collections_fail() {
    let levels = 200_000;
    let text = format!(
        "{}{}",
        "GEOMETRYCOLLECTION(".repeat(levels),
        ")".repeat(levels)
    );
    assert_matches!(
        geoweave::read_wkt(&text),
        Err(GeoweaveError::Wkt(WktError::NestingTooDeep { limit: 128, .. }))
    );
}

#[test]
fn ewkt_srid() {
    let reader = WktReader::new(CartesianFactory::<Point2>::new());
    let spatial = reader
        .read_spatial("SRID=4326;POINT Z (1.5 2.25 10)")
        .unwrap()
        .unwrap();

    assert_eq!(spatial.srid, 4326);
    let Geom::Point(point) = spatial.geometry else {
        panic!("expected a point, got {:?}", spatial.geometry);
    };
    assert_abs_diff_eq!(point.x(), 1.5);
    assert_abs_diff_eq!(point.y(), 2.25);
}

#[test]
fn multipolygon_members() {
    let geometry = geoweave::read_wkt(
        "MULTIPOLYGON(((0 0,10 0,10 10,0 10,0 0),(2 2,4 2,4 4,2 2)),((20 20,30 20,30 30,20 20)))",
    )
    .unwrap()
    .unwrap();

    assert_eq!(geometry.hint(), GeometryHint::MultiPolygon);
    assert_matches!(geometry, Geom::PolygonBag(bag) if bag.len() == 2 && bag.iter().next().map(|p| p.holes.len()) == Some(1));
}

#[test]
fn typed_read() {
    let polygon: Option<Polygon<Point2>> =
        geoweave::read_wkt_as("POLYGON((0 0, 4 0, 4 4, 0 0))").unwrap();
    assert_eq!(polygon.map(|p| p.outer.len()), Some(3));

    assert_matches!(
        geoweave::read_wkt_as::<Polygon<Point2>>("LINESTRING(0 0, 1 1)"),
        Err(GeoweaveError::Types(_))
    );
}

#[test]
fn geojson_round_trip() {
    let text = r#"{"type": "Polygon", "coordinates": [[[0, 0], [4, 0], [4, 4], [0, 0]]]}"#;
    let geometry = geoweave::read_geojson_str(text).unwrap().unwrap();
    let written = GeoJsonWriter::new().write(&geometry);

    let parsed = geojson::Geometry::from_json_value(written.clone()).expect("valid GeoJSON");
    assert_matches!(parsed.value, geojson::Value::Polygon(rings) if rings.len() == 1 && rings[0].len() == 4);

    let restored = geoweave::read_geojson_str(&written.to_string()).unwrap();
    assert_eq!(restored, Some(geometry));
}

#[test]
fn geojson_invalid_input() {
    assert_matches!(
        geoweave::read_geojson_str("{\"type\": "),
        Err(GeoweaveError::Json(_))
    );
    assert_matches!(
        geoweave::read_geojson_str(r#"{"type": "LineString", "coordinates": [[1, 2]]}"#),
        Ok(None)
    );
    assert_matches!(
        geoweave::read_geojson_str(r#"{"type": "Circle", "coordinates": [1, 2]}"#),
        Ok(None)
    );
}

#[test]
fn feature_collection() {
    let point = geojson::Geometry::new(geojson::Value::Point(vec![1.0, 2.0]));
    let line = geojson::Geometry::new(geojson::Value::LineString(vec![
        vec![0.0, 0.0],
        vec![3.0, 4.0],
    ]));
    let collection = geojson::FeatureCollection {
        bbox: None,
        features: vec![
            geojson::Feature::from(point),
            geojson::Feature::from(line),
            geojson::Feature {
                bbox: None,
                geometry: None,
                id: None,
                properties: None,
                foreign_members: None,
            },
        ],
        foreign_members: None,
    };

    let geometry = geoweave::read_geojson_str(&geojson::GeoJson::from(collection).to_string())
        .unwrap()
        .unwrap();
    assert_matches!(&geometry, Geom::GeometryBag(bag) if bag.len() == 2);

    let written = GeoJsonWriter::new().write(&geometry);
    assert_eq!(written["type"], "GeometryCollection");
    assert_eq!(written["geometries"][1]["type"], "LineString");
}

#[test]
fn geojson_crs() {
    let value = serde_json::json!({
        "type": "Feature",
        "crs": { "type": "name", "properties": { "name": "urn:ogc:def:crs:EPSG::3857" } },
        "geometry": { "type": "Point", "coordinates": [100.5, 0.25, 7] },
        "properties": null,
    });

    let spatial = GeoJsonReader::new(CartesianFactory::<Point2>::new())
        .extract_spatial(&value)
        .unwrap();
    assert_eq!(spatial.srid, 3857);
    assert_eq!(
        spatial.crs_name.as_deref(),
        Some("urn:ogc:def:crs:EPSG::3857")
    );

    let written = GeoJsonWriter::new().write_spatial(&spatial);
    assert_eq!(
        written["crs"]["properties"]["name"],
        "urn:ogc:def:crs:EPSG::3857"
    );
    let x = written["coordinates"][0].as_f64().unwrap();
    assert_abs_diff_eq!(x, 100.5);
}

#[test]
fn wkt_to_geojson() {
    let geometry = geoweave::read_wkt("MULTILINESTRING((0 0, 1 1), (2 2, 3 3))")
        .unwrap()
        .unwrap();
    let written = GeoJsonWriter::new().write(&geometry);
    let parsed = geojson::Geometry::from_json_value(written).expect("valid GeoJSON");
    assert_matches!(parsed.value, geojson::Value::MultiLineString(lines) if lines.len() == 2);

    let value = serde_json::json!({
        "type": "MultiLineString",
        "coordinates": [[[0, 0], [1, 1]], [[2, 2], [3, 3]]],
    });
    let extracted = GeoJsonReader::new(CartesianFactory::<Point2>::new()).extract_geometry(&value);
    assert_eq!(extracted, Some(geometry));
}
