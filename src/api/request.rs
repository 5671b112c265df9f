//! Request types for the shift wage API.
//!
//! This module defines the JSON request structure shared by the
//! `/calculate` and `/records` endpoints. Timestamps are accepted in the
//! `YYYY-MM-DDTHH:MM` form produced by HTML `datetime-local` inputs, with
//! optional seconds.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Break, Shift};

/// Request body describing one shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// When work started.
    #[serde(with = "form_datetime")]
    pub start_time: NaiveDateTime,
    /// When work ended.
    #[serde(with = "form_datetime")]
    pub end_time: NaiveDateTime,
    /// Break rows as submitted; unfilled rows may be included.
    #[serde(default)]
    pub breaks: Vec<BreakRequest>,
    /// Hourly rate in whole currency units.
    pub hourly_rate: i64,
}

/// One break row of a shift request. Either side may be left empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreakRequest {
    /// When the break started.
    #[serde(default, with = "form_datetime::option")]
    pub start_time: Option<NaiveDateTime>,
    /// When the break ended.
    #[serde(default, with = "form_datetime::option")]
    pub end_time: Option<NaiveDateTime>,
}

impl BreakRequest {
    /// Creates a fully filled break row.
    pub fn new(start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            start_time: Some(start_time),
            end_time: Some(end_time),
        }
    }
}

impl ShiftRequest {
    /// Converts the request into a domain [`Shift`].
    ///
    /// Break rows with neither side filled are skipped. A row with only one
    /// side filled is rejected with `IncompleteBreak`.
    pub fn into_shift(self) -> EngineResult<Shift> {
        let breaks = self
            .breaks
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match (row.start_time, row.end_time) {
                (None, None) => None,
                (Some(start), Some(end)) => Some(Ok(Break::new(start, end))),
                _ => Some(Err(EngineError::IncompleteBreak { index })),
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Shift {
            start_time: self.start_time,
            end_time: self.end_time,
            breaks,
            hourly_rate: self.hourly_rate,
        })
    }
}

/// Serde helpers for form-style timestamps.
mod form_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
    const INPUT_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    pub fn parse(value: &str) -> Option<NaiveDateTime> {
        INPUT_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    }

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(OUTPUT_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse(value.trim()).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{value}'")))
    }

    /// Optional timestamps; `null` and empty strings read as absent.
    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<NaiveDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDateTime>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                None => Ok(None),
                Some(value) if value.trim().is_empty() => Ok(None),
                Some(value) => parse(value.trim())
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{value}'"))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_deserialize_form_timestamps() {
        let json = r#"{
            "start_time": "2025-10-10T09:00",
            "end_time": "2025-10-10T18:00:00",
            "breaks": [{"start_time": "2025-10-10T12:00", "end_time": "2025-10-10T13:00"}],
            "hourly_rate": 1200
        }"#;
        let request: ShiftRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.start_time, make_datetime("2025-10-10 09:00"));
        assert_eq!(request.end_time, make_datetime("2025-10-10 18:00"));
        assert_eq!(
            request.breaks[0].start_time,
            Some(make_datetime("2025-10-10 12:00"))
        );
    }

    #[test]
    fn test_breaks_default_to_empty() {
        let json = r#"{"start_time": "2025-10-10T09:00", "end_time": "2025-10-10T17:00", "hourly_rate": 1000}"#;
        let request: ShiftRequest = serde_json::from_str(json).unwrap();
        assert!(request.breaks.is_empty());
    }

    #[test]
    fn test_empty_break_rows_are_skipped() {
        let json = r#"{
            "start_time": "2025-10-10T09:00",
            "end_time": "2025-10-10T17:00",
            "breaks": [
                {"start_time": "", "end_time": ""},
                {"start_time": "2025-10-10T12:00", "end_time": "2025-10-10T13:00"},
                {}
            ],
            "hourly_rate": 1000
        }"#;
        let request: ShiftRequest = serde_json::from_str(json).unwrap();
        let shift = request.into_shift().unwrap();

        assert_eq!(shift.breaks.len(), 1);
        assert_eq!(shift.breaks[0].start_time, make_datetime("2025-10-10 12:00"));
    }

    #[test]
    fn test_one_sided_break_is_rejected() {
        let request = ShiftRequest {
            start_time: make_datetime("2025-10-10 09:00"),
            end_time: make_datetime("2025-10-10 17:00"),
            breaks: vec![
                BreakRequest::default(),
                BreakRequest {
                    start_time: Some(make_datetime("2025-10-10 12:00")),
                    end_time: None,
                },
            ],
            hourly_rate: 1000,
        };

        match request.into_shift() {
            Err(EngineError::IncompleteBreak { index }) => assert_eq!(index, 1),
            other => panic!("Expected IncompleteBreak, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        let json = r#"{"start_time": "yesterday", "end_time": "2025-10-10T17:00", "hourly_rate": 1000}"#;
        let result: Result<ShiftRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialized_request_reads_back() {
        let request = ShiftRequest {
            start_time: make_datetime("2025-10-10 22:00"),
            end_time: make_datetime("2025-10-11 05:00"),
            breaks: vec![BreakRequest::new(
                make_datetime("2025-10-11 00:00"),
                make_datetime("2025-10-11 01:00"),
            )],
            hourly_rate: 1000,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["start_time"], "2025-10-10T22:00:00");

        let parsed: ShiftRequest = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.into_shift().unwrap(), request.into_shift().unwrap());
    }
}
