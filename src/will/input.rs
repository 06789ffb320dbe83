//! The will description supplied by the caller.
use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};

/// A specific gift of one item to one beneficiary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificGift {
    pub beneficiary: String,
    /// Description of the gifted item, e.g. "My Car"
    pub gift: String,
}

/// A share of the residuary estate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResiduaryShare {
    pub beneficiary: String,
    /// Percentage of the residue, 0 to 100
    pub percentage: f64,
}

/// Structured content of a last will and testament.
///
/// Optional names may be missing or empty; a blank name counts as absent.
///
/// # Examples
///
/// ```
/// use testament_docx::WillInput;
///
/// let will = WillInput::new("Jane A. Doe", "John Smith")
///     .with_gift("Alice", "My Car")
///     .with_residuary("Bob", 100.0)
///     .with_witness("W1")
///     .with_witness("W2");
/// assert!(will.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WillInput {
    pub testator_name: String,
    pub executor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_executor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_guardian_name: Option<String>,
    #[serde(default)]
    pub specific_gifts: Vec<SpecificGift>,
    #[serde(default)]
    pub residuary_beneficiaries: Vec<ResiduaryShare>,
    #[serde(default)]
    pub witnesses: Vec<String>,
}

fn present(name: &Option<String>) -> Option<&str> {
    name.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl WillInput {
    pub fn new(testator_name: impl Into<String>, executor_name: impl Into<String>) -> Self {
        Self {
            testator_name: testator_name.into(),
            executor_name: executor_name.into(),
            ..Self::default()
        }
    }

    pub fn with_alternate_executor(mut self, name: impl Into<String>) -> Self {
        self.alternate_executor_name = Some(name.into());
        self
    }

    pub fn with_guardian(mut self, name: impl Into<String>) -> Self {
        self.guardian_name = Some(name.into());
        self
    }

    pub fn with_alternate_guardian(mut self, name: impl Into<String>) -> Self {
        self.alternate_guardian_name = Some(name.into());
        self
    }

    pub fn with_gift(mut self, beneficiary: impl Into<String>, gift: impl Into<String>) -> Self {
        self.specific_gifts.push(SpecificGift {
            beneficiary: beneficiary.into(),
            gift: gift.into(),
        });
        self
    }

    pub fn with_residuary(mut self, beneficiary: impl Into<String>, percentage: f64) -> Self {
        self.residuary_beneficiaries.push(ResiduaryShare {
            beneficiary: beneficiary.into(),
            percentage,
        });
        self
    }

    pub fn with_witness(mut self, name: impl Into<String>) -> Self {
        self.witnesses.push(name.into());
        self
    }

    /// Alternate executor, if one was named.
    pub fn alternate_executor(&self) -> Option<&str> {
        present(&self.alternate_executor_name)
    }

    /// Guardian, if one was named.
    pub fn guardian(&self) -> Option<&str> {
        present(&self.guardian_name)
    }

    pub fn alternate_guardian(&self) -> Option<&str> {
        present(&self.alternate_guardian_name)
    }

    /// Sum of all residuary percentages.
    pub fn residuary_total(&self) -> f64 {
        self.residuary_beneficiaries
            .iter()
            .map(|share| share.percentage)
            .sum()
    }

    /// Check the preconditions document generation relies on.
    ///
    /// A residuary total other than 100 is accepted and only logged.
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.testator_name) {
            return Err(Error::InvalidInput("testator name is required".into()));
        }
        if is_blank(&self.executor_name) {
            return Err(Error::InvalidInput("executor name is required".into()));
        }

        for (i, gift) in self.specific_gifts.iter().enumerate() {
            if is_blank(&gift.beneficiary) {
                return Err(Error::InvalidInput(format!(
                    "specific gift {} has no beneficiary",
                    i + 1
                )));
            }
            if is_blank(&gift.gift) {
                return Err(Error::InvalidInput(format!(
                    "specific gift {} to {} has no description",
                    i + 1,
                    gift.beneficiary
                )));
            }
        }

        for share in &self.residuary_beneficiaries {
            if !share.percentage.is_finite() || !(0.0..=100.0).contains(&share.percentage) {
                return Err(Error::InvalidInput(format!(
                    "residuary share for {} must be between 0 and 100, got {}",
                    share.beneficiary, share.percentage
                )));
            }
        }

        let total = self.residuary_total();
        if !self.residuary_beneficiaries.is_empty() && (total - 100.0).abs() > 1e-9 {
            log::warn!("residuary shares sum to {}%, not 100%", total);
        }

        Ok(())
    }

    /// Parse a will description from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse will description: {}", e)))
    }

    /// Render this will description as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize will description: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> WillInput {
        WillInput::new("Jane A. Doe", "John Smith")
            .with_gift("Alice", "My Car")
            .with_residuary("Bob", 100.0)
            .with_witness("W1")
            .with_witness("W2")
    }

    #[test]
    fn test_valid_will() {
        assert!(jane().validate().is_ok());
    }

    #[test]
    fn test_blank_optional_names_are_absent() {
        let will = jane()
            .with_guardian("   ")
            .with_alternate_executor("")
            .with_alternate_guardian(" Carol ");
        assert_eq!(will.guardian(), None);
        assert_eq!(will.alternate_executor(), None);
        assert_eq!(will.alternate_guardian(), Some("Carol"));
    }

    #[test]
    fn test_rejects_missing_names() {
        let err = WillInput::new(" ", "John").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        let err = WillInput::new("Jane", "").validate().unwrap_err();
        assert!(err.to_string().contains("executor"));
    }

    #[test]
    fn test_rejects_bad_percentages() {
        for pct in [f64::NAN, f64::INFINITY, -1.0, 100.5] {
            let will = WillInput::new("Jane", "John").with_residuary("Bob", pct);
            assert!(
                matches!(will.validate(), Err(Error::InvalidInput(_))),
                "{pct} should be rejected"
            );
        }
    }

    #[test]
    fn test_uneven_total_is_accepted() {
        let will = WillInput::new("Jane", "John")
            .with_residuary("Bob", 30.0)
            .with_residuary("Carol", 30.0);
        assert!(will.validate().is_ok());
        assert_eq!(will.residuary_total(), 60.0);
    }

    #[test]
    fn test_rejects_incomplete_gift() {
        let will = WillInput::new("Jane", "John").with_gift("Alice", " ");
        let err = will.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: specific gift 1 to Alice has no description"
        );
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
testatorName: Jane A. Doe
executorName: John Smith
alternateExecutorName: ""
specificGifts:
  - beneficiary: Alice
    gift: My Car
residuaryBeneficiaries:
  - beneficiary: Bob
    percentage: 100.0
witnesses: [W1, W2]
"#;
        let will = WillInput::from_yaml(yaml).unwrap();
        assert_eq!(will, jane().with_alternate_executor(""));
        assert_eq!(will.alternate_executor(), None);
        assert_eq!(will.guardian_name, None);
    }

    #[test]
    fn test_yaml_round_trip() {
        let will = jane().with_guardian("Gina");
        let yaml = will.to_yaml().unwrap();
        assert!(yaml.contains("testatorName"));
        assert_eq!(WillInput::from_yaml(&yaml).unwrap(), will);
    }

    #[test]
    fn test_from_yaml_reports_config_error() {
        let err = WillInput::from_yaml("testatorName: [unclosed").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
