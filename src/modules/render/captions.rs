use serde_json::Value;
use thiserror::Error;

/// Reported when a record carries no usable caption timing.
pub const FALLBACK_DURATION: &str = "60.00";

#[derive(Debug, Error, PartialEq)]
pub enum CaptionError {
    #[error("expected a list of caption entries")]
    NotAList,

    #[error("entry {index} is not an object")]
    NotAnObject { index: usize },

    #[error("entry {index} has no numeric `{field}`")]
    MissingTimestamp { index: usize, field: &'static str },

    #[error("entry {index} has an invalid `{field}` of {value}")]
    InvalidTimestamp {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("entry {index} ends at {end} before it starts at {start}")]
    EndsBeforeStart { index: usize, start: f64, end: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaptionEntry {
    pub start: f64,
    pub end: f64,
}

/// Ordered, validated caption timings for one video.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionTrack {
    entries: Vec<CaptionEntry>,
}

impl CaptionTrack {
    /// A missing or `null` track is empty rather than an error.
    pub fn from_value(value: Option<&Value>) -> Result<Self, CaptionError> {
        let items = match value {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(CaptionError::NotAList),
        };

        let entries = items
            .iter()
            .enumerate()
            .map(|(index, item)| parse_entry(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CaptionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End of the last caption in seconds, or the fallback when there is none.
    pub fn estimated_duration(&self) -> String {
        match self.entries().last() {
            Some(last) => last.end.to_string(),
            None => FALLBACK_DURATION.to_string(),
        }
    }

    /// Total time covered by captions, gaps excluded.
    pub fn spoken_seconds(&self) -> f64 {
        self.entries().iter().map(|entry| entry.end - entry.start).sum()
    }
}

fn parse_entry(index: usize, item: &Value) -> Result<CaptionEntry, CaptionError> {
    let fields = item.as_object().ok_or(CaptionError::NotAnObject { index })?;

    let timestamp = |field: &'static str| -> Result<f64, CaptionError> {
        let value = fields
            .get(field)
            .and_then(Value::as_f64)
            .ok_or(CaptionError::MissingTimestamp { index, field })?;
        if !value.is_finite() || value < 0.0 {
            return Err(CaptionError::InvalidTimestamp { index, field, value });
        }
        Ok(value)
    };

    let start = timestamp("start")?;
    let end = timestamp("end")?;
    if end < start {
        return Err(CaptionError::EndsBeforeStart { index, start, end });
    }

    Ok(CaptionEntry { start, end })
}
