//! Persistent device state.
//!
//! `StateStore` holds button, pin, accelerometer and power values and
//! mirrors them to a JSON file. The file is reread before every write so
//! that edits made by other processes (simulated button presses, pin
//! changes) are picked up instead of overwritten.
//!
//! The `state_file` field is ordinary data: after a load, the next load or
//! dump targets whatever path the file named. A set of files that name each
//! other forms a script of states that the store walks through one load at
//! a time.
//!
//! File errors are never reported to callers. A failed load keeps the
//! in-memory values; a failed dump keeps running in memory. Each operation
//! tries the file again.

mod field;

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::error::{MbitError, MbitResult};

pub use field::{Field, StateValue, FIELD_COUNT};
use field::NUMERIC_COUNT;

/// State file used when no other path is configured.
pub const DEFAULT_STATE_FILE: &str = "microbit_state.json";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    values: [i64; NUMERIC_COUNT],
    state_file: String,
}

impl Snapshot {
    /// All zero except power, which is on.
    fn defaults(state_file: String) -> Self {
        let mut values = [0; NUMERIC_COUNT];
        values[Field::POWER.index()] = 1;
        Self { values, state_file }
    }

    /// Missing fields take their defaults; `fallback_path` stands in for a
    /// missing `state_file`. Unknown keys are ignored. A value outside its
    /// field's domain rejects the whole document.
    fn from_document(document: &Map<String, Value>, fallback_path: &str) -> MbitResult<Self> {
        let mut snapshot = Self::defaults(fallback_path.to_string());

        for field in Field::numeric() {
            let Some(value) = document.get(field.name()) else {
                continue;
            };
            let value = match value {
                Value::Bool(flag) => i64::from(*flag),
                other => other.as_i64().ok_or_else(|| {
                    MbitError::MalformedState(format!("{} is not an integer: {other}", field.name()))
                })?,
            };
            field.validate(&StateValue::Int(value))?;
            snapshot.values[field.index()] = value;
        }

        match document.get(Field::STATE_FILE.name()) {
            None => {}
            Some(Value::String(path)) if !path.is_empty() => snapshot.state_file = path.clone(),
            Some(other) => {
                return Err(MbitError::MalformedState(format!(
                    "state_file is not a path: {other}"
                )))
            }
        }

        Ok(snapshot)
    }

    fn to_document(&self) -> Map<String, Value> {
        let mut document: Map<String, Value> = Field::numeric()
            .map(|field| (field.name().to_string(), Value::from(self.values[field.index()])))
            .collect();
        document.insert(
            Field::STATE_FILE.name().to_string(),
            Value::String(self.state_file.clone()),
        );
        document
    }
}

/// Device state backed by a chain of JSON files.
#[derive(Debug, Clone)]
pub struct StateStore {
    snapshot: Snapshot,
    file_backed: bool,
}

impl StateStore {
    /// Create a store and try to load `path`. If the file is missing or
    /// unreadable the store starts from defaults with `state_file = path`.
    pub fn open(path: impl Into<String>) -> Self {
        let mut store = Self {
            snapshot: Snapshot::defaults(path.into()),
            file_backed: false,
        };
        store.load();
        store
    }

    /// Path the next load or dump will use.
    pub fn state_file(&self) -> &str {
        &self.snapshot.state_file
    }

    /// Whether the most recent load or dump reached the file.
    pub fn is_file_backed(&self) -> bool {
        self.file_backed
    }

    /// Current value of the named field.
    pub fn get(&self, name: &str) -> MbitResult<StateValue> {
        Ok(self.get_field(name.parse()?))
    }

    /// Current value of a numeric field.
    pub fn get_int(&self, name: &str) -> MbitResult<i64> {
        let field: Field = name.parse()?;
        match self.get_field(field) {
            StateValue::Int(v) => Ok(v),
            other => Err(MbitError::Validation {
                field: field.name(),
                value: other.to_string(),
            }),
        }
    }

    pub fn get_field(&self, field: Field) -> StateValue {
        if field == Field::STATE_FILE {
            StateValue::Text(self.snapshot.state_file.clone())
        } else {
            StateValue::Int(self.snapshot.values[field.index()])
        }
    }

    /// Integer value of `field`; `state_file` reads as 0.
    pub fn int(&self, field: Field) -> i64 {
        self.snapshot
            .values
            .get(field.index())
            .copied()
            .unwrap_or(0)
    }

    /// Validate, reload, apply and persist.
    pub fn set(&mut self, name: &str, value: impl Into<StateValue>) -> MbitResult<()> {
        self.set_field(name.parse()?, value)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<StateValue>) -> MbitResult<()> {
        let value = value.into();
        field.validate(&value)?;

        self.load();
        match value {
            StateValue::Int(v) => self.snapshot.values[field.index()] = v,
            StateValue::Text(path) => self.snapshot.state_file = path,
        }
        self.dump();
        Ok(())
    }

    /// Replace the in-memory state with the contents of the current state
    /// file. Keeps the current state if the file cannot be read or parsed.
    pub fn load(&mut self) {
        match self.read_snapshot() {
            Ok(snapshot) => {
                if snapshot.state_file != self.snapshot.state_file {
                    tracing::debug!(
                        from = %self.snapshot.state_file,
                        to = %snapshot.state_file,
                        "state file chained"
                    );
                }
                self.snapshot = snapshot;
                self.file_backed = true;
            }
            Err(err) => {
                tracing::debug!(
                    path = %self.snapshot.state_file,
                    error = %err,
                    "state load failed, keeping in-memory state"
                );
                self.file_backed = false;
            }
        }
    }

    /// Write the in-memory state to the current state file. Failures leave
    /// the store running in memory.
    pub fn dump(&mut self) {
        match self.write_snapshot() {
            Ok(()) => self.file_backed = true,
            Err(err) => {
                tracing::debug!(
                    path = %self.snapshot.state_file,
                    error = %err,
                    "state dump failed, continuing in memory"
                );
                self.file_backed = false;
            }
        }
    }

    /// Zero every value except power (on) and keep the current state file.
    pub fn reset(&mut self) {
        let state_file = std::mem::take(&mut self.snapshot.state_file);
        self.snapshot = Snapshot::defaults(state_file);
        self.dump();
    }

    /// Set `name` to 1 and bump its press counter, if it has one.
    pub fn press(&mut self, name: &str) -> MbitResult<()> {
        let field: Field = name.parse()?;
        self.set_field(field, 1)?;
        if let Some(presses) = field.presses() {
            let count = self.int(presses).saturating_add(1);
            self.set_field(presses, count)?;
        }
        Ok(())
    }

    /// Set `name` to 0.
    pub fn release(&mut self, name: &str) -> MbitResult<()> {
        self.set(name, 0)
    }

    /// Press, hold, release, then wait `hold` again, reloading after each
    /// pause.
    pub fn press_and_release(&mut self, name: &str, hold: Duration) -> MbitResult<()> {
        self.press(name)?;
        thread::sleep(hold);
        self.load();
        self.release(name)?;
        thread::sleep(hold);
        self.load();
        Ok(())
    }

    pub fn power_on(&mut self) -> MbitResult<()> {
        self.set_field(Field::POWER, 1)
    }

    pub fn power_off(&mut self) -> MbitResult<()> {
        self.set_field(Field::POWER, 0)
    }

    pub fn is_on(&self) -> bool {
        self.int(Field::POWER) > 0
    }

    fn read_snapshot(&self) -> MbitResult<Snapshot> {
        let text = std::fs::read_to_string(&self.snapshot.state_file)?;
        let document: Map<String, Value> = serde_json::from_str(&text)?;
        Snapshot::from_document(&document, &self.snapshot.state_file)
    }

    /// Sorted keys, 4-space indent. The file is replaced by rename so a
    /// concurrent reader never sees half of it.
    fn write_snapshot(&self) -> MbitResult<()> {
        let mut body = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(b"    "));
        self.snapshot.to_document().serialize(&mut serializer)?;
        body.push(b'\n');

        let target = Path::new(&self.snapshot.state_file);
        let dir = target
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        let mut staging = NamedTempFile::new_in(dir)?;
        staging.write_all(&body)?;
        // Keep the mode of a file someone else created.
        if let Ok(existing) = std::fs::metadata(target) {
            staging.as_file().set_permissions(existing.permissions())?;
        }
        staging.persist(target).map_err(|err| err.error)?;
        Ok(())
    }
}

/// `key:value` lines in name order.
impl fmt::Display for StateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<Field> = Field::all().collect();
        fields.sort_by_key(|field| field.name());
        let lines: Vec<String> = fields
            .into_iter()
            .map(|field| format!("{}:{}", field.name(), self.get_field(field)))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}
