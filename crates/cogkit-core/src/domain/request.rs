use crate::domain::error::DomainError;
use crate::domain::machine_name::MachineName;

/// The names and description the caller asked for.
///
/// Where the theme goes is not part of the request; see
/// [`crate::domain::ThemeLayout`]. Built with chained setters:
///
/// ```rust
/// use cogkit_core::domain::ScaffoldRequest;
///
/// let request = ScaffoldRequest::new()
///     .name("Test Theme")
///     .description("A theme for tests.");
/// assert_eq!(request.description_text(), Some("A theme for tests."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldRequest {
    name: Option<String>,
    machine_name: Option<String>,
    description: Option<String>,
}

impl ScaffoldRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn machine_name(mut self, machine_name: impl Into<String>) -> Self {
        self.machine_name = Some(machine_name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Validate the names and derive the machine name.
    ///
    /// An explicit machine name wins over the one derived from `name`; both
    /// go through the same normalisation. When only a machine name is given
    /// it also serves as the display name.
    ///
    /// # Errors
    /// - `MissingThemeName` when neither name is given (or both are empty)
    /// - `EmptyMachineName` when normalisation leaves nothing
    pub fn identify(&self) -> Result<ThemeIdentity, DomainError> {
        let name = non_empty(self.name.as_deref());
        let machine_input = non_empty(self.machine_name.as_deref());

        let source = machine_input.or(name).ok_or(DomainError::MissingThemeName)?;
        let machine_name = MachineName::derive(source)?;

        let display_name = name
            .map(str::to_string)
            .unwrap_or_else(|| machine_name.to_string());

        Ok(ThemeIdentity {
            name: display_name,
            machine_name,
        })
    }
}

/// The validated names of the theme being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeIdentity {
    pub name: String,
    pub machine_name: MachineName,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
