//! Line classification rules
//!
//! A network's line decision tree is an ordered slice of [`LineRule`]s. Each
//! rule names the mode codes it applies to, a condition over the decoded
//! fields and the product and label it produces. Evaluation is first match
//! wins over the concatenated rule sets, so the declaration order is the
//! only tie breaker.

use domain::{LineAttribute, Product};
use serde::{Deserialize, Serialize};

use crate::patterns;

/// Raw line fields as decoded from an upstream response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFields {
    /// Upstream line id
    pub id: Option<String>,
    /// Operating network or operator
    pub network: Option<String>,
    /// Raw mode code (`motType` for EFA, class bit index for HAFAS)
    pub mode_code: Option<String>,
    /// Line symbol (e.g. "S1", "U47")
    pub symbol: Option<String>,
    /// Line name
    pub name: Option<String>,
    /// Long descriptive name
    pub long_name: Option<String>,
    /// Train type abbreviation (e.g. "ICE", "RE")
    pub train_type: Option<String>,
    /// Train number
    pub train_num: Option<String>,
    /// Train type in words (e.g. "Intercity-Express", "S-Bahn")
    pub train_name: Option<String>,
}

macro_rules! field_setter {
    ($($field:ident),* $(,)?) => {
        $(
            #[doc = concat!("Set `", stringify!($field), "`")]
            #[must_use]
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )*
    };
}

impl LineFields {
    /// Empty field set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    field_setter!(id, network, symbol, name, long_name, train_type, train_num, train_name);

    /// Set the raw mode code
    #[must_use]
    pub fn mode(mut self, code: impl Into<String>) -> Self {
        self.mode_code = Some(code.into());
        self
    }

    /// Read a field, treating blank values as absent
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Symbol => &self.symbol,
            Field::Name => &self.name,
            Field::LongName => &self.long_name,
            Field::TrainType => &self.train_type,
            Field::TrainNum => &self.train_num,
            Field::TrainName => &self.train_name,
        };
        patterns::non_blank(value.as_deref())
    }

    /// Trimmed mode code, if any
    #[must_use]
    pub fn mode_code(&self) -> Option<&str> {
        patterns::non_blank(self.mode_code.as_deref())
    }
}

/// Text field a rule can inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Symbol,
    Name,
    LongName,
    TrainType,
    TrainNum,
    TrainName,
}

/// Mode codes a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeFilter {
    /// Any code, including none
    Any,
    /// Only when upstream sent no code
    Missing,
    /// Exactly this code
    Is(&'static str),
    /// One of these codes
    OneOf(&'static [&'static str]),
}

impl ModeFilter {
    fn matches(&self, code: Option<&str>) -> bool {
        match (self, code) {
            (Self::Any, _) => true,
            (Self::Missing, code) => code.is_none(),
            (Self::Is(expected), Some(code)) => *expected == code,
            (Self::OneOf(codes), Some(code)) => codes.contains(&code),
            (Self::Is(_) | Self::OneOf(_), None) => false,
        }
    }
}

/// Condition over the text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum When {
    /// Always true
    Always,
    /// Field equals the literal
    Is(Field, &'static str),
    /// Field equals one of the literals
    OneOf(Field, &'static [&'static str]),
    /// Field starts with the literal
    StartsWith(Field, &'static str),
    /// Field is present and non-blank
    Present(Field),
    /// Field is absent or blank
    Absent(Field),
    /// Field consists of ASCII digits only
    Numeric(Field),
    /// All conditions hold
    All(&'static [When]),
    /// At least one condition holds
    Any(&'static [When]),
}

impl When {
    /// Evaluate against a field set
    #[must_use]
    pub fn eval(&self, fields: &LineFields) -> bool {
        match *self {
            Self::Always => true,
            Self::Is(field, literal) => fields.get(field) == Some(literal),
            Self::OneOf(field, literals) => fields.get(field).is_some_and(|v| literals.contains(&v)),
            Self::StartsWith(field, prefix) => fields.get(field).is_some_and(|v| v.starts_with(prefix)),
            Self::Present(field) => fields.get(field).is_some(),
            Self::Absent(field) => fields.get(field).is_none(),
            Self::Numeric(field) => fields
                .get(field)
                .is_some_and(|v| v.bytes().all(|b| b.is_ascii_digit())),
            Self::All(conditions) => conditions.iter().all(|c| c.eval(fields)),
            Self::Any(conditions) => conditions.iter().any(|c| c.eval(fields)),
        }
    }
}

/// How a rule synthesizes the label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// No label
    Unset,
    /// Fixed text
    Literal(&'static str),
    /// Copy of a field
    Field(Field),
    /// Literal prefix followed by a field, e.g. `"ICE" + train_num`
    Prefixed(&'static str, Field),
    /// Field with a leading literal removed when present, e.g. `"Bus 31"` → `"31"`
    StripPrefix(Field, &'static str),
    /// First present field
    FirstOf(&'static [Field]),
}

impl Label {
    /// Render the label for a field set
    #[must_use]
    pub fn render(&self, fields: &LineFields) -> Option<String> {
        match *self {
            Self::Unset => None,
            Self::Literal(text) => Some(text.to_string()),
            Self::Field(field) => fields.get(field).map(str::to_string),
            Self::Prefixed(prefix, field) => {
                Some(format!("{prefix}{}", fields.get(field).unwrap_or_default()))
            },
            Self::StripPrefix(field, prefix) => fields.get(field).map(|value| {
                value
                    .strip_prefix(prefix)
                    .map(str::trim)
                    .filter(|rest| !rest.is_empty())
                    .unwrap_or(value)
                    .to_string()
            }),
            Self::FirstOf(candidates) => candidates
                .iter()
                .find_map(|field| fields.get(*field))
                .map(str::to_string),
        }
    }
}

/// One entry of a line decision tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRule {
    /// Mode codes this rule applies to
    pub mode: ModeFilter,
    /// Field condition
    pub when: When,
    /// Product assigned on match
    pub product: Option<Product>,
    /// Label synthesized on match
    pub label: Label,
    /// Attributes attached on match
    pub attributes: &'static [LineAttribute],
}

impl LineRule {
    /// Rule for the given mode filter
    #[must_use]
    pub const fn new(mode: ModeFilter, when: When, product: Product, label: Label) -> Self {
        Self {
            mode,
            when,
            product: Some(product),
            label,
            attributes: &[],
        }
    }

    /// Rule matching a train type literal, labelled as the type followed by
    /// the train number, e.g. `"ICE" + "123"`
    #[must_use]
    pub const fn train(mode: ModeFilter, train_type: &'static str, product: Product) -> Self {
        Self::new(
            mode,
            When::Is(Field::TrainType, train_type),
            product,
            Label::Prefixed(train_type, Field::TrainNum),
        )
    }

    /// Rule that deliberately leaves the product unclassified
    #[must_use]
    pub const fn unclassified(mode: ModeFilter, when: When, label: Label) -> Self {
        Self {
            mode,
            when,
            product: None,
            label,
            attributes: &[],
        }
    }

    /// Same rule with attributes
    #[must_use]
    pub const fn with_attributes(mut self, attributes: &'static [LineAttribute]) -> Self {
        self.attributes = attributes;
        self
    }

    /// Whether the rule applies to a field set
    #[must_use]
    pub fn matches(&self, fields: &LineFields) -> bool {
        self.mode.matches(fields.mode_code()) && self.when.eval(fields)
    }

    /// First matching rule across rule sets, in order
    #[must_use]
    pub fn first_match<'r>(rule_sets: &[&'r [Self]], fields: &LineFields) -> Option<&'r Self> {
        rule_sets
            .iter()
            .flat_map(|set| set.iter())
            .find(|rule| rule.matches(fields))
    }
}
