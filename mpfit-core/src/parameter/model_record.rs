use super::{Identifier, IdentifierOption, ParameterError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A collection of parameters of a pure substance.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PureRecord<M> {
    pub identifier: Identifier,
    /// Molar weight in g/mol (= kg/kmol).
    pub molarweight: f64,
    pub model_record: M,
}

impl<M> PureRecord<M> {
    /// Create a new `PureRecord`.
    pub fn new(identifier: Identifier, molarweight: f64, model_record: M) -> Self {
        Self {
            identifier,
            molarweight,
            model_record,
        }
    }

    /// Read the records of the given substances from a json file.
    ///
    /// The records are returned in the order of `substances`.
    pub fn from_json<P>(
        substances: &[&str],
        file: P,
        identifier_option: IdentifierOption,
    ) -> Result<Vec<Self>, ParameterError>
    where
        P: AsRef<Path>,
        M: DeserializeOwned,
    {
        let reader = BufReader::new(File::open(file)?);
        let file_records: Vec<Self> = serde_json::from_reader(reader)?;
        Self::select(substances, file_records, identifier_option)
    }

    /// Pick the records of the given substances from a list of records.
    pub fn select(
        substances: &[&str],
        file_records: Vec<Self>,
        identifier_option: IdentifierOption,
    ) -> Result<Vec<Self>, ParameterError> {
        let mut queried: HashSet<&str> = substances.iter().copied().collect();
        if queried.len() != substances.len() {
            return Err(ParameterError::IncompatibleParameters(
                "A substance was defined more than once.".to_string(),
            ));
        }

        let mut records: HashMap<&str, Self> = HashMap::with_capacity(substances.len());
        for record in file_records {
            let id = record.identifier.as_str(identifier_option);
            if let Some(id) = id.and_then(|id| queried.take(id)) {
                records.insert(id, record);
            }
            if queried.is_empty() {
                break;
            }
        }

        if !queried.is_empty() {
            let mut missing: Vec<_> = queried.into_iter().collect();
            missing.sort_unstable();
            return Err(ParameterError::ComponentsNotFound(missing.join(", ")));
        }

        Ok(substances
            .iter()
            .filter_map(|s| records.remove(s))
            .collect())
    }
}

impl<M: fmt::Display> fmt::Display for PureRecord<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PureRecord(")?;
        write!(f, "\n\tidentifier={},", self.identifier)?;
        write!(f, "\n\tmolarweight={},", self.molarweight)?;
        write!(f, "\n\tmodel_record={},", self.model_record)?;
        write!(f, "\n)")
    }
}
