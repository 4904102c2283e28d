use crate::describe::DescribeProvider;
use crate::error::Result;

/// Provider returning a fixed describe string
///
/// Used by tests and by the `--describe` command-line override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDescribe {
    output: String,
}

impl StaticDescribe {
    /// Create a provider that always answers with `output`
    pub fn new(output: impl Into<String>) -> Self {
        StaticDescribe {
            output: output.into(),
        }
    }
}

impl DescribeProvider for StaticDescribe {
    fn describe(&self) -> Result<String> {
        Ok(self.output.clone())
    }
}
