use geoweave_types::{FactoryNum, GeometryFactory, Geom, SpatialGeometry};
use num_traits::FromPrimitive;

use super::error::WktError;
use super::token::Token;
use super::tokenizer::{TokenStream, Tokenizer, TokenizerOptions};

/// Maximum nesting depth of geometry collections.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Geometry tag of WKT text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum WktTag {
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl WktTag {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name.to_ascii_uppercase().as_str() {
            "POINT" => Self::Point,
            "LINESTRING" => Self::LineString,
            "LINEARRING" => Self::LinearRing,
            "POLYGON" => Self::Polygon,
            "MULTIPOINT" => Self::MultiPoint,
            "MULTILINESTRING" => Self::MultiLineString,
            "MULTIPOLYGON" => Self::MultiPolygon,
            "GEOMETRYCOLLECTION" => Self::GeometryCollection,
            _ => return None,
        })
    }

    /// Parses a tag word, possibly with a dimension suffix glued to it (`POINTZ`).
    ///
    /// Returns the tag and whether the suffix was present.
    fn parse(word: &str) -> Option<(Self, bool)> {
        if let Some(tag) = Self::from_name(word) {
            return Some((tag, false));
        }

        ["ZM", "Z", "M"].into_iter().find_map(|suffix| {
            let len = word.len().checked_sub(suffix.len())?;
            if !word.is_char_boundary(len) || !word[len..].eq_ignore_ascii_case(suffix) {
                return None;
            }

            Self::from_name(&word[..len]).map(|tag| (tag, true))
        })
    }
}

fn is_dimension_suffix(token: &Token) -> bool {
    token.is_word("Z") || token.is_word("M") || token.is_word("ZM")
}

/// Reads geometries from WKT and EWKT text.
///
/// All geometries are constructed with the factory given to the reader. Supported geometry tags
/// are `POINT`, `LINESTRING`, `LINEARRING`, `POLYGON`, `MULTIPOINT`, `MULTILINESTRING`,
/// `MULTIPOLYGON` and `GEOMETRYCOLLECTION`, each optionally followed by a `Z`, `M` or `ZM`
/// suffix. Coordinates can have up to two extra ordinates, which are read and discarded.
/// Geometry collections can be nested up to [`MAX_NESTING_DEPTH`] levels.
///
/// ```
/// use geoweave::wkt::WktReader;
/// use geoweave_types::{CartesianFactory, Geom};
/// use geoweave_types::cartesian::Point2;
///
/// let reader = WktReader::new(CartesianFactory::<Point2>::new());
/// let geometry = reader.read("POINT (1 2)").unwrap();
/// assert_eq!(geometry, Some(Geom::Point(Point2::new(1.0, 2.0))));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WktReader<F> {
    factory: F,
    options: TokenizerOptions,
}

impl<F: GeometryFactory> WktReader<F> {
    /// Creates a new reader.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            options: TokenizerOptions::default(),
        }
    }

    /// Sets tokenizer options.
    pub fn with_options(mut self, options: TokenizerOptions) -> Self {
        self.options = options;
        self
    }

    /// Factory used to construct geometries.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Reads a geometry from the text.
    ///
    /// Returns `Ok(None)` if the geometry is `EMPTY`. The `SRID=n;` prefix is accepted but its value
    /// is dropped, use [`WktReader::read_spatial`] to get it.
    pub fn read(&self, text: &str) -> Result<Option<Geom<F::Point>>, WktError> {
        Ok(self.read_spatial(text)?.map(|spatial| spatial.geometry))
    }

    /// Reads a geometry together with its SRID.
    ///
    /// If the text has no `SRID=n;` prefix, the SRID of the factory is used.
    pub fn read_spatial(&self, text: &str) -> Result<Option<SpatialGeometry<F::Point>>, WktError> {
        let tokens = TokenStream::new(Tokenizer::with_options(text, self.options))?;
        let mut parser = Parser {
            factory: &self.factory,
            tokens,
            depth: 0,
        };

        let srid = parser.read_srid()?.unwrap_or_else(|| self.factory.srid());
        let geometry = parser.read_geometry_tagged_text()?;

        while parser.tokens.current() == &Token::Eol {
            parser.tokens.move_next()?;
        }

        if parser.tokens.current() != &Token::Eof {
            return Err(parser.unexpected("end of input"));
        }

        Ok(geometry.map(|geometry| SpatialGeometry::new(geometry, srid)))
    }

    /// Reads one geometry from every non-blank line of the text.
    ///
    /// Each line is read separately, so an error in one line does not stop the iteration. Offsets
    /// of the errors are counted from the start of the whole text.
    pub fn read_lines<'s>(
        &'s self,
        text: &'s str,
    ) -> impl Iterator<Item = Result<Option<SpatialGeometry<F::Point>>, WktError>> + 's {
        text.split_inclusive('\n')
            .scan(0, |start, line| {
                let line_start = *start;
                *start += line.len();
                Some((line_start, line))
            })
            .filter(|(_, line)| !line.trim().is_empty())
            .map(move |(start, line)| self.read_spatial(line).map_err(|e| e.shifted(start)))
    }
}

struct Parser<'r, 'a, F> {
    factory: &'r F,
    tokens: TokenStream<'a>,
    depth: usize,
}

impl<F: GeometryFactory> Parser<'_, '_, F> {
    fn unexpected(&self, expected: &'static str) -> WktError {
        match self.tokens.current() {
            token if token.is_end() => WktError::UnexpectedEnd { expected },
            token => WktError::UnexpectedToken {
                found: token.to_string(),
                expected,
                offset: self.tokens.offset(),
            },
        }
    }

    fn invalid_number(&self) -> WktError {
        WktError::InvalidNumber {
            text: self.tokens.current().to_string(),
            offset: self.tokens.offset(),
        }
    }

    fn expect_punct(&mut self, c: char, expected: &'static str) -> Result<(), WktError> {
        if !self.tokens.current().is_punct(c) {
            return Err(self.unexpected(expected));
        }

        self.tokens.move_next()
    }

    fn read_srid(&mut self) -> Result<Option<i32>, WktError> {
        if !self.tokens.current().is_word("SRID") {
            return Ok(None);
        }

        self.tokens.move_next()?;
        self.expect_punct('=', "'='")?;

        let srid = match self.tokens.current() {
            Token::Integer(v) => i32::try_from(*v).map_err(|_| self.invalid_number())?,
            _ => return Err(self.unexpected("SRID value")),
        };

        self.tokens.move_next()?;
        self.expect_punct(';', "';'")?;

        Ok(Some(srid))
    }

    /// Reads `<tag> [Z|M|ZM] (<text> | EMPTY)`.
    fn read_geometry_tagged_text(&mut self) -> Result<Option<Geom<F::Point>>, WktError> {
        let tag_offset = self.tokens.offset();
        let (tag, has_suffix) = match self.tokens.current() {
            Token::Word(word) => {
                WktTag::parse(word).ok_or_else(|| WktError::UnknownTag(word.clone()))?
            }
            _ => return Err(self.unexpected("geometry tag")),
        };

        self.tokens.move_next()?;
        if !has_suffix && is_dimension_suffix(self.tokens.current()) {
            self.tokens.move_next()?;
        }

        let factory = self.factory;
        Ok(match tag {
            WktTag::Point => self.read_point_text()?.map(Geom::Point),
            WktTag::LineString => self
                .read_coordinates_text()?
                .map(|points| Geom::Polyline(factory.polyline(points))),
            WktTag::LinearRing => self
                .read_coordinates_text()?
                .map(|points| Geom::Ring(factory.ring(points))),
            WktTag::Polygon => self.read_polygon_text()?.map(Geom::Polygon),
            WktTag::MultiPoint => self
                .read_multi_point_text()?
                .map(|points| Geom::PointBag(factory.point_bag(points))),
            WktTag::MultiLineString => self.read_multi_line_string_text()?.map(|lines| {
                Geom::PolylineBag(
                    factory.polyline_bag(lines.into_iter().map(|l| factory.polyline(l)).collect()),
                )
            }),
            WktTag::MultiPolygon => self
                .read_list_text(Self::read_polygon_text)?
                .map(|polygons| Geom::PolygonBag(factory.polygon_bag(flatten(polygons)))),
            WktTag::GeometryCollection => self
                .read_collection_text(tag_offset)?
                .map(|members| Geom::GeometryBag(factory.geometry_bag(flatten(members)))),
        })
    }

    fn read_collection_text(
        &mut self,
        tag_offset: usize,
    ) -> Result<Option<Vec<Option<Geom<F::Point>>>>, WktError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(WktError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                offset: tag_offset,
            });
        }

        self.depth += 1;
        let members = self.read_list_text(Self::read_geometry_tagged_text);
        self.depth -= 1;
        members
    }

    /// Consumes `(` returning true, or `EMPTY` returning false.
    fn begin_text(&mut self) -> Result<bool, WktError> {
        let token = self.tokens.current();
        if token.is_punct('(') {
            self.tokens.move_next()?;
            Ok(true)
        } else if token.is_word("EMPTY") {
            self.tokens.move_next()?;
            Ok(false)
        } else {
            Err(self.unexpected("'(' or EMPTY"))
        }
    }

    /// Reads `( <item> {, <item>} )` or `EMPTY`.
    fn read_list_text<T>(
        &mut self,
        mut read_item: impl FnMut(&mut Self) -> Result<T, WktError>,
    ) -> Result<Option<Vec<T>>, WktError> {
        if !self.begin_text()? {
            return Ok(None);
        }

        let mut items = vec![read_item(self)?];
        while self.tokens.current().is_punct(',') {
            self.tokens.move_next()?;
            items.push(read_item(self)?);
        }

        self.expect_punct(')', "',' or ')'")?;
        Ok(Some(items))
    }

    fn is_number(&self) -> bool {
        match self.tokens.current() {
            Token::Integer(_) | Token::Float(_) => true,
            Token::Word(word) => special_value(word).is_some(),
            _ => false,
        }
    }

    fn read_number(&mut self) -> Result<FactoryNum<F>, WktError> {
        let value = match self.tokens.current() {
            Token::Integer(v) => FactoryNum::<F>::from_i64(*v),
            Token::Float(v) => FactoryNum::<F>::from_f64(*v),
            Token::Word(word) => match special_value(word) {
                Some(v) => FactoryNum::<F>::from_f64(v),
                None => return Err(self.unexpected("number")),
            },
            _ => return Err(self.unexpected("number")),
        };

        let value = value.ok_or_else(|| self.invalid_number())?;
        self.tokens.move_next()?;
        Ok(value)
    }

    /// Reads `<x> <y> [<z> [<m>]]`.
    fn read_coordinate(&mut self) -> Result<F::Point, WktError> {
        let x = self.read_number()?;
        let y = self.read_number()?;

        for _ in 0..2 {
            if !self.is_number() {
                break;
            }
            self.tokens.move_next()?;
        }

        Ok(self.factory.point(x, y))
    }

    fn read_point_text(&mut self) -> Result<Option<F::Point>, WktError> {
        if !self.begin_text()? {
            return Ok(None);
        }

        let point = self.read_coordinate()?;
        self.expect_punct(')', "')'")?;
        Ok(Some(point))
    }

    fn read_coordinates_text(&mut self) -> Result<Option<Vec<F::Point>>, WktError> {
        self.read_list_text(Self::read_coordinate)
    }

    fn read_polygon_text(
        &mut self,
    ) -> Result<Option<geoweave_types::impls::Polygon<F::Point>>, WktError> {
        let Some(rings) = self.read_list_text(Self::read_coordinates_text)? else {
            return Ok(None);
        };

        let mut rings = flatten(rings)
            .into_iter()
            .map(|points| self.factory.ring(points));
        let Some(outer) = rings.next() else {
            return Ok(None);
        };

        Ok(Some(self.factory.polygon(outer, rings.collect())))
    }

    /// Members of a multipoint can be written both as `x y` and `(x y)`.
    fn read_multi_point_text(&mut self) -> Result<Option<Vec<F::Point>>, WktError> {
        let points = self.read_list_text(|parser| {
            if parser.tokens.current().is_punct('(') || parser.tokens.current().is_word("EMPTY") {
                parser.read_point_text()
            } else {
                parser.read_coordinate().map(Some)
            }
        })?;

        Ok(points.map(flatten))
    }

    fn read_multi_line_string_text(&mut self) -> Result<Option<Vec<Vec<F::Point>>>, WktError> {
        Ok(self
            .read_list_text(Self::read_coordinates_text)?
            .map(flatten))
    }
}

/// Value of an unsigned `NaN`, `inf` or `infinity` word, in any case.
fn special_value(word: &str) -> Option<f64> {
    ["nan", "inf", "infinity"]
        .iter()
        .any(|name| word.eq_ignore_ascii_case(name))
        .then(|| word.parse().ok())
        .flatten()
}

/// Drops `EMPTY` members of a collection.
fn flatten<T>(items: Vec<Option<T>>) -> Vec<T> {
    items.into_iter().flatten().collect()
}
