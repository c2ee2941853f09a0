use crate::DemoError;

pub const DEFAULT_INITIAL_CAPACITY: usize = 8;
pub const DEFAULT_KEY_COUNT: usize = 10;

/// Knobs of the demo run, read from positional arguments:
///
/// ```text
/// demo [initial_capacity] [key_count]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Bucket count of the fill-and-drain table
    pub initial_capacity: usize,
    /// How many `key-i` entries get inserted and removed again
    pub key_count: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            key_count: DEFAULT_KEY_COUNT,
        }
    }
}

impl DemoConfig {
    /// Builds the config from the arguments after the program name,
    /// anything left out keeps its default.
    ///
    /// A capacity of 0 parses fine here, the table itself rejects it.
    pub fn from_args<I>(args: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        if let Some(arg) = args.next() {
            config.initial_capacity = parse_count("initial_capacity", &arg)?;
        }
        if let Some(arg) = args.next() {
            config.key_count = parse_count("key_count", &arg)?;
        }
        if let Some(extra) = args.next() {
            return Err(DemoError::InvalidArgument(format!(
                "unexpected argument {extra:?}"
            )));
        }

        Ok(config)
    }
}

fn parse_count(name: &str, arg: &str) -> Result<usize, DemoError> {
    arg.parse()
        .map_err(|e| DemoError::InvalidArgument(format!("{name} {arg:?}: {e}")))
}
