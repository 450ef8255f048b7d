use crate::{Error, Result, VehicleDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Body-type archetype a vehicle identity resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    #[default]
    Sedan,
    Suv,
    Truck,
    Hatch,
    Coupe,
}

impl BodyKind {
    pub const ALL: [BodyKind; 5] = [
        BodyKind::Sedan,
        BodyKind::Suv,
        BodyKind::Truck,
        BodyKind::Hatch,
        BodyKind::Coupe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BodyKind::Sedan => "sedan",
            BodyKind::Suv => "suv",
            BodyKind::Truck => "truck",
            BodyKind::Hatch => "hatch",
            BodyKind::Coupe => "coupe",
        }
    }

    /// Lenient lookup: anything unrecognized maps to [`BodyKind::Sedan`].
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sedan" => Ok(Self::Sedan),
            "suv" => Ok(Self::Suv),
            "truck" => Ok(Self::Truck),
            "hatch" => Ok(Self::Hatch),
            "coupe" => Ok(Self::Coupe),
            _ => Err(Error::UnknownBodyKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// Predicate over the lower-cased classification haystack.
pub type RuleFn = fn(haystack: &str) -> bool;

#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: BodyKind,
    pub matches: RuleFn,
}

/// Ordered list of body-type rules; the first matching rule wins.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
    fallback: BodyKind,
}

impl Default for Classifier {
    fn default() -> Self {
        let mut classifier = Self::new(BodyKind::Sedan);

        // Order is the tie-break: "Pickup Sport Utility" is a truck.
        classifier.add_fn(BodyKind::Truck, rule_truck);
        classifier.add_fn(BodyKind::Suv, rule_suv);
        classifier.add_fn(BodyKind::Hatch, rule_hatch);
        classifier.add_fn(BodyKind::Coupe, rule_coupe);

        classifier
    }
}

impl Classifier {
    pub fn new(fallback: BodyKind) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    pub fn add(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn add_fn(&mut self, kind: BodyKind, matches: RuleFn) {
        self.add(Rule { kind, matches });
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn classify(&self, descriptor: &VehicleDescriptor) -> BodyKind {
        self.classify_text(&descriptor.classification_text())
    }

    /// Classifies free text directly. The text is lower-cased before matching.
    pub fn classify_text(&self, text: &str) -> BodyKind {
        let haystack = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| (rule.matches)(&haystack))
            .map(|rule| rule.kind)
            .unwrap_or(self.fallback)
    }
}

/// Classifies with the default rule set.
pub fn classify(descriptor: &VehicleDescriptor) -> BodyKind {
    Classifier::default().classify(descriptor)
}

fn rule_truck(s: &str) -> bool {
    s.contains("pickup") || s.contains("truck")
}

fn rule_suv(s: &str) -> bool {
    s.contains("sport utility") || s.contains("suv") || s.contains("utility")
}

fn rule_hatch(s: &str) -> bool {
    s.contains("hatchback") || s.contains("hatch")
}

fn rule_coupe(s: &str) -> bool {
    s.contains("coupe")
}
