use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Subtitle used when the identity carries no year, make or model.
pub const GENERIC_LABEL: &str = "Vehicle";

/// Free-text vehicle identity as decoded upstream (e.g. from a VIN decoder).
///
/// Every field is a trimmed string; absent values are empty, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleDescriptor {
    pub make: String,
    pub model: String,
    pub year: String,
    pub body_class: String,
    pub vehicle_type: String,
}

impl VehicleDescriptor {
    pub fn new(
        make: impl AsRef<str>,
        model: impl AsRef<str>,
        year: impl AsRef<str>,
        body_class: impl AsRef<str>,
        vehicle_type: impl AsRef<str>,
    ) -> Self {
        Self {
            make: clean(make.as_ref()),
            model: clean(model.as_ref()),
            year: clean(year.as_ref()),
            body_class: clean(body_class.as_ref()),
            vehicle_type: clean(vehicle_type.as_ref()),
        }
    }

    /// Parses an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored, the first occurrence of a key wins and unknown keys are skipped.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut make = None;
        let mut model = None;
        let mut year = None;
        let mut body_class = None;
        let mut vehicle_type = None;
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "make" => &mut make,
                "model" => &mut model,
                "year" => &mut year,
                "bodyClass" => &mut body_class,
                "vehicleType" => &mut vehicle_type,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        Self::new(
            make.unwrap_or_default(),
            model.unwrap_or_default(),
            year.unwrap_or_default(),
            body_class.unwrap_or_default(),
            vehicle_type.unwrap_or_default(),
        )
    }

    /// Re-applies trimming, e.g. after deserializing from JSON.
    pub fn normalized(self) -> Self {
        Self::new(
            self.make,
            self.model,
            self.year,
            self.body_class,
            self.vehicle_type,
        )
    }

    pub fn with_make(mut self, make: impl AsRef<str>) -> Self {
        self.make = clean(make.as_ref());
        self
    }

    pub fn with_model(mut self, model: impl AsRef<str>) -> Self {
        self.model = clean(model.as_ref());
        self
    }

    pub fn with_year(mut self, year: impl AsRef<str>) -> Self {
        self.year = clean(year.as_ref());
        self
    }

    pub fn with_body_class(mut self, body_class: impl AsRef<str>) -> Self {
        self.body_class = clean(body_class.as_ref());
        self
    }

    pub fn with_vehicle_type(mut self, vehicle_type: impl AsRef<str>) -> Self {
        self.vehicle_type = clean(vehicle_type.as_ref());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_empty())
    }

    /// Space-joined non-empty `year make model`, or [`GENERIC_LABEL`].
    pub fn label(&self) -> String {
        let parts: Vec<&str> = [&self.year, &self.make, &self.model]
            .into_iter()
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
            .collect();
        let label = parts.join(" ");
        let label = label.trim();
        if label.is_empty() {
            GENERIC_LABEL.to_string()
        } else {
            label.to_string()
        }
    }

    /// The text hashed into the render seed. Empty fields stay as empty segments.
    pub fn seed_text(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.year, self.make, self.model, self.body_class, self.vehicle_type
        )
    }

    /// Lower-cased haystack searched by the classifier. The year does not participate.
    pub fn classification_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.body_class, self.vehicle_type, self.make, self.model
        )
        .to_lowercase()
    }

    /// Rejects characters that cannot be embedded in an XML 1.0 document.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.fields() {
            if let Some(ch) = value.chars().find(|&c| !is_xml_char(c)) {
                return Err(Error::InvalidCharacter { field, ch });
            }
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("make", self.make.as_str()),
            ("model", self.model.as_str()),
            ("year", self.year.as_str()),
            ("bodyClass", self.body_class.as_str()),
            ("vehicleType", self.vehicle_type.as_str()),
        ]
    }
}

fn clean(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_string()
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= '\u{20}' && c != '\u{fffe}' && c != '\u{ffff}')
}
