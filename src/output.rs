use crate::errors::OutputError;
use crate::search::{Place, Review};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const HEADER: [&str; 7] = [
    "Name",
    "Category",
    "Lat",
    "Lng",
    "Review",
    "ReviewDate",
    "ReviewSummary",
];
pub const MISSING: &str = "N/A";

/// One (place, review) pair flattened into CSV columns.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub name: String,
    pub category: String,
    pub lat: String,
    pub lng: String,
    pub review: String,
    pub review_date: String,
    pub summary: String,
}

impl OutputRow {
    pub fn new(place: &Place, review: &Review, summary: String) -> Self {
        let gps = place.gps_coordinates.unwrap_or_default();
        Self {
            name: or_missing(place.title.as_deref()),
            category: or_missing(place.category.as_deref()),
            lat: coordinate(gps.latitude),
            lng: coordinate(gps.longitude),
            review: review.snippet.clone().unwrap_or_default(),
            review_date: or_missing(review.date.as_deref()),
            summary,
        }
    }

    fn as_record(&self) -> [&str; 7] {
        [
            self.name.as_str(),
            self.category.as_str(),
            self.lat.as_str(),
            self.lng.as_str(),
            self.review.as_str(),
            self.review_date.as_str(),
            self.summary.as_str(),
        ]
    }
}

fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}

fn coordinate(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

pub struct RowWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl RowWriter<File> {
    /// Truncates any existing file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, OutputError> {
        let file = File::create(path)?;
        Self::new(file)
    }
}

impl<W: Write> RowWriter<W> {
    pub fn new(writer: W) -> Result<Self, OutputError> {
        let mut inner = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        inner.write_record(HEADER)?;
        inner.flush()?;
        Ok(Self { inner })
    }

    pub fn write_row(&mut self, row: &OutputRow) -> Result<(), OutputError> {
        self.inner.write_record(row.as_record())?;
        // Rows already written must survive a later fatal error.
        self.inner.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> Result<W, OutputError> {
        self.inner
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}
