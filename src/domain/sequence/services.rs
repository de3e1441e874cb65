use super::entities::{Feature, FeatureRecord, Rgb, Strand};
use crate::domain::errors::{DisplayError, DisplayResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Marker attached to the names of the two halves of an origin-spanning feature
pub const CONTINUATION: &str = "...";

/// Domain service turning host records into row-ready features
pub struct FeatureNormalizer {
    seq_len: usize,
}

impl FeatureNormalizer {
    pub fn new(seq_len: usize) -> Self {
        Self { seq_len }
    }

    /// Validate records against the sequence, resolve colors and normalize.
    pub fn from_records(&self, records: &[FeatureRecord]) -> DisplayResult<Vec<Feature>> {
        let palette = TypePalette::from_records(records);
        let mut features = Vec::with_capacity(records.len());

        for record in records {
            self.check_position(record, record.start)?;
            self.check_position(record, record.end)?;

            let color = match &record.color {
                Some(code) => Rgb::parse(code)?,
                None => palette.color_for(&record.feature_type),
            };
            features.push(Feature::new(
                &record.name,
                &record.feature_type,
                color,
                Strand::from_sign(record.strand.unwrap_or(1)),
                record.start,
                record.end,
            ));
        }

        Ok(self.normalize(features))
    }

    /// Split origin-spanning features, then order longest first.
    pub fn normalize(&self, features: Vec<Feature>) -> Vec<Feature> {
        let mut features = self.split_wrapped(features);
        sort_by_length(&mut features);
        features
    }

    /// Every feature with `start > end` keeps its start and runs to the
    /// sequence end; a second fragment `1..=end` is appended.
    pub fn split_wrapped(&self, mut features: Vec<Feature>) -> Vec<Feature> {
        let mut tails = Vec::new();
        for feature in features.iter_mut().filter(|f| f.wraps_origin()) {
            let mut tail = feature.clone();
            tail.start = 1;
            tail.name = format!("{CONTINUATION}{}", feature.name);

            feature.end = self.seq_len;
            feature.name.push_str(CONTINUATION);
            tails.push(tail);
        }

        if !tails.is_empty() {
            log_debug!(
                LogComponent::Domain("FeatureNormalizer"),
                "split {} origin-spanning features",
                tails.len()
            );
        }
        features.extend(tails);
        features
    }

    /// Re-check already normalized features after the sequence changed.
    pub fn revalidate(&self, features: &[Feature]) -> DisplayResult<()> {
        match features.iter().find(|f| f.end > self.seq_len || f.start == 0) {
            Some(f) => Err(DisplayError::Validation(format!(
                "feature {:?} [{} - {}] lies outside a sequence of length {}",
                f.name, f.start, f.end, self.seq_len
            ))),
            None => Ok(()),
        }
    }

    fn check_position(&self, record: &FeatureRecord, position: usize) -> DisplayResult<()> {
        if position == 0 || position > self.seq_len {
            return Err(DisplayError::Validation(format!(
                "feature {:?} position {} outside 1..={}",
                record.name, position, self.seq_len
            )));
        }
        Ok(())
    }
}

/// Descending by `end - start`; equal spans keep their input order.
pub fn sort_by_length(features: &mut [Feature]) {
    features.sort_by(|a, b| b.span().cmp(&a.span()));
}

/// One evenly spaced hue per distinct feature type, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct TypePalette {
    entries: Vec<(String, Rgb)>,
}

impl TypePalette {
    pub fn from_types<'a>(types: impl IntoIterator<Item = &'a str>) -> Self {
        let mut names: Vec<String> = Vec::new();
        for t in types {
            if !names.iter().any(|n| n == t) {
                names.push(t.to_string());
            }
        }
        let n = names.len();
        let entries = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name, Rgb::from_hsv(i as f64 / n as f64, 1.0, 1.0)))
            .collect();
        Self { entries }
    }

    /// Only records without an explicit color take part in the spectrum.
    pub fn from_records(records: &[FeatureRecord]) -> Self {
        Self::from_types(
            records.iter().filter(|r| r.color.is_none()).map(|r| r.feature_type.as_str()),
        )
    }

    pub fn color_for(&self, feature_type: &str) -> Rgb {
        self.entries
            .iter()
            .find(|(name, _)| name == feature_type)
            .map(|(_, color)| *color)
            .unwrap_or(Rgb::new(0xFF, 0x00, 0x00))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
