//! State field identifiers and values.

use std::fmt;
use std::str::FromStr;

use crate::error::{MbitError, MbitResult};

/// Number of fields in a state file.
pub const FIELD_COUNT: usize = 28;
/// Fields holding integers (everything except `state_file`).
pub(crate) const NUMERIC_COUNT: usize = FIELD_COUNT - 1;

const NAMES: [&str; FIELD_COUNT] = [
    "accelerometer_x",
    "accelerometer_y",
    "accelerometer_z",
    "button_a",
    "button_a_presses",
    "button_b",
    "button_b_presses",
    "pin0",
    "pin1",
    "pin2",
    "pin3",
    "pin4",
    "pin5",
    "pin6",
    "pin7",
    "pin8",
    "pin9",
    "pin10",
    "pin11",
    "pin12",
    "pin13",
    "pin14",
    "pin15",
    "pin16",
    "pin19",
    "pin20",
    "power",
    "state_file",
];

const FIRST_PIN: usize = 7;

/// Allowed values for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Domain {
    /// Any integer.
    Any,
    /// 0 or 1.
    Flag,
    /// Non-negative counter.
    Count,
    /// Non-empty file path.
    Path,
}

/// One of the fixed set of device state fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Field(usize);

impl Field {
    pub const ACCELEROMETER_X: Field = Field(0);
    pub const ACCELEROMETER_Y: Field = Field(1);
    pub const ACCELEROMETER_Z: Field = Field(2);
    pub const BUTTON_A: Field = Field(3);
    pub const BUTTON_A_PRESSES: Field = Field(4);
    pub const BUTTON_B: Field = Field(5);
    pub const BUTTON_B_PRESSES: Field = Field(6);
    pub const POWER: Field = Field(26);
    pub const STATE_FILE: Field = Field(27);

    /// Field for edge-connector pin `n` (0-16, 19 or 20).
    pub fn pin(n: u8) -> Option<Field> {
        match n {
            0..=16 => Some(Field(FIRST_PIN + n as usize)),
            19 => Some(Field(FIRST_PIN + 17)),
            20 => Some(Field(FIRST_PIN + 18)),
            _ => None,
        }
    }

    /// All fields in declaration order.
    pub fn all() -> impl Iterator<Item = Field> {
        (0..FIELD_COUNT).map(Field)
    }

    pub(crate) fn numeric() -> impl Iterator<Item = Field> {
        (0..NUMERIC_COUNT).map(Field)
    }

    /// Name as written in state files.
    pub fn name(self) -> &'static str {
        NAMES[self.0]
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }

    /// The press counter paired with a button field.
    pub fn presses(self) -> Option<Field> {
        match self {
            Field::BUTTON_A => Some(Field::BUTTON_A_PRESSES),
            Field::BUTTON_B => Some(Field::BUTTON_B_PRESSES),
            _ => None,
        }
    }

    pub(crate) fn domain(self) -> Domain {
        match self {
            Field::BUTTON_A | Field::BUTTON_B | Field::POWER => Domain::Flag,
            Field::BUTTON_A_PRESSES | Field::BUTTON_B_PRESSES => Domain::Count,
            Field::STATE_FILE => Domain::Path,
            _ => Domain::Any,
        }
    }

    /// Check `value` against this field's domain.
    pub fn validate(self, value: &StateValue) -> MbitResult<()> {
        let valid = match (self.domain(), value) {
            (Domain::Any, StateValue::Int(_)) => true,
            (Domain::Flag, StateValue::Int(v)) => matches!(v, 0 | 1),
            (Domain::Count, StateValue::Int(v)) => *v >= 0,
            (Domain::Path, StateValue::Text(path)) => !path.is_empty(),
            _ => false,
        };

        if valid {
            Ok(())
        } else {
            Err(MbitError::Validation {
                field: self.name(),
                value: value.describe(),
            })
        }
    }
}

impl FromStr for Field {
    type Err = MbitError;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> MbitResult<Self> {
        NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(s))
            .map(Field)
            .ok_or_else(|| MbitError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of a state field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateValue {
    Int(i64),
    Text(String),
}

impl StateValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            StateValue::Int(v) => Some(*v),
            StateValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StateValue::Int(_) => None,
            StateValue::Text(text) => Some(text),
        }
    }

    fn describe(&self) -> String {
        match self {
            StateValue::Int(v) => v.to_string(),
            StateValue::Text(text) => format!("{text:?}"),
        }
    }
}

impl From<i64> for StateValue {
    fn from(v: i64) -> Self {
        StateValue::Int(v)
    }
}

impl From<i32> for StateValue {
    fn from(v: i32) -> Self {
        StateValue::Int(i64::from(v))
    }
}

impl From<bool> for StateValue {
    fn from(v: bool) -> Self {
        StateValue::Int(i64::from(v))
    }
}

impl From<&str> for StateValue {
    fn from(v: &str) -> Self {
        StateValue::Text(v.to_string())
    }
}

impl From<String> for StateValue {
    fn from(v: String) -> Self {
        StateValue::Text(v)
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Int(v) => write!(f, "{v}"),
            StateValue::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("button_a".parse::<Field>().unwrap(), Field::BUTTON_A);
        assert_eq!("Button_A".parse::<Field>().unwrap(), Field::BUTTON_A);
        assert_eq!("STATE_FILE".parse::<Field>().unwrap(), Field::STATE_FILE);
        assert_eq!("pin20".parse::<Field>().unwrap(), Field::pin(20).unwrap());
    }

    #[test]
    fn test_unknown_names() {
        for name in ["pin17", "pin18", "button_c", "", "temperature"] {
            assert!(matches!(
                name.parse::<Field>(),
                Err(MbitError::UnknownField(_))
            ));
        }
    }

    #[test]
    fn test_pins() {
        assert_eq!(Field::pin(0).unwrap().name(), "pin0");
        assert_eq!(Field::pin(16).unwrap().name(), "pin16");
        assert_eq!(Field::pin(19).unwrap().name(), "pin19");
        assert!(Field::pin(17).is_none());
        assert!(Field::pin(21).is_none());
        assert_eq!(Field::all().filter(|f| f.name().starts_with("pin")).count(), 19);
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(Field::POWER.name(), "power");
        assert_eq!(Field::BUTTON_B_PRESSES.name(), "button_b_presses");
        assert_eq!(Field::ACCELEROMETER_Z.name(), "accelerometer_z");
        assert_eq!(Field::BUTTON_A.presses(), Some(Field::BUTTON_A_PRESSES));
        assert_eq!(Field::POWER.presses(), None);
        assert_eq!(Field::numeric().count(), NUMERIC_COUNT);
        assert!(Field::numeric().all(|f| f != Field::STATE_FILE));
    }

    #[test]
    fn test_validate() {
        assert!(Field::BUTTON_A.validate(&1.into()).is_ok());
        assert!(Field::BUTTON_A.validate(&2.into()).is_err());
        assert!(Field::POWER.validate(&(-1).into()).is_err());
        assert!(Field::BUTTON_A_PRESSES.validate(&1000.into()).is_ok());
        assert!(Field::BUTTON_A_PRESSES.validate(&(-1).into()).is_err());
        assert!(Field::ACCELEROMETER_X.validate(&(-2048).into()).is_ok());
        assert!(Field::pin(3).unwrap().validate(&5000.into()).is_ok());
        assert!(Field::STATE_FILE.validate(&"next.json".into()).is_ok());
        assert!(Field::STATE_FILE.validate(&"".into()).is_err());
        assert!(Field::STATE_FILE.validate(&1.into()).is_err());
        assert!(Field::pin(0).unwrap().validate(&"high".into()).is_err());
    }

    #[test]
    fn test_validation_message() {
        let err = Field::BUTTON_B.validate(&7.into()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value 7 for field button_b");
    }
}
