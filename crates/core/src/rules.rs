//! Substitution rules for company and project placeholders
//!
//! A run carries exactly two substitutions: the fixed company placeholder
//! and the project key supplied by the caller. They are built once and
//! passed by reference into every pass.

use crate::{Error, Result};

/// Company placeholder baked into every template project
pub const COMPANY_PLACEHOLDER: &str = "Cloned";

/// A single `(placeholder, replacement)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    placeholder: String,
    replacement: String,
}

impl Substitution {
    /// Create a substitution
    ///
    /// # Errors
    ///
    /// Returns an error if the placeholder is empty.
    pub fn new(placeholder: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
        let placeholder = placeholder.into();
        if placeholder.is_empty() {
            return Err(Error::InvalidRules("placeholder must not be empty".to_string()));
        }
        Ok(Self {
            placeholder,
            replacement: replacement.into(),
        })
    }

    /// Text searched for
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Text written in its place
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every occurrence of the placeholder in `text`
    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.placeholder, &self.replacement)
    }

    /// Check whether `text` contains the placeholder
    pub fn occurs_in(&self, text: &str) -> bool {
        text.contains(&self.placeholder)
    }
}

/// Immutable rename configuration for one run
///
/// # Examples
///
/// ```
/// use gk_core::RenameRules;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let rules = RenameRules::new("CommerceMono", "HRMS", None)?;
/// assert_eq!(rules.apply("namespace CommerceMono"), "namespace HRMS");
/// assert_eq!(rules.root_dir_name(), "Cloned_HRMS");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRules {
    company: Substitution,
    project: Substitution,
}

impl RenameRules {
    /// Build rules for the fixed company placeholder and the given project pair
    ///
    /// `new_company` defaults to an empty replacement when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if `old_project` or `new_project` is empty.
    pub fn new(old_project: &str, new_project: &str, new_company: Option<&str>) -> Result<Self> {
        Self::from_parts(
            Substitution::new(COMPANY_PLACEHOLDER, new_company.unwrap_or_default())?,
            Substitution::new(old_project, new_project)?,
        )
    }

    /// Build rules from explicit substitutions
    ///
    /// # Errors
    ///
    /// Returns an error if the project replacement is empty.
    pub fn from_parts(company: Substitution, project: Substitution) -> Result<Self> {
        if project.replacement.is_empty() {
            return Err(Error::InvalidRules(
                "project replacement must not be empty".to_string(),
            ));
        }
        Ok(Self { company, project })
    }

    /// Company placeholder substitution
    pub fn company(&self) -> &Substitution {
        &self.company
    }

    /// Project key substitution
    pub fn project(&self) -> &Substitution {
        &self.project
    }

    /// Rewrite text: company first, then project
    ///
    /// The order matters when one placeholder is a substring of the other.
    pub fn apply(&self, text: &str) -> String {
        self.project.apply(&self.company.apply(text))
    }

    /// Whether a name contains either placeholder
    pub fn matches(&self, name: &str) -> bool {
        self.company.occurs_in(name) || self.project.occurs_in(name)
    }

    /// New base name for a file
    pub fn rename_file(&self, name: &str) -> String {
        self.apply(name)
    }

    /// New base name for a directory
    ///
    /// Directories keep the company placeholder when no company replacement
    /// is configured.
    pub fn rename_dir(&self, name: &str) -> String {
        let name = if self.company.replacement.is_empty() {
            name.to_string()
        } else {
            self.company.apply(name)
        };
        self.project.apply(&name)
    }

    /// Name of the new root directory, `<company placeholder>_<new project>`
    pub fn root_dir_name(&self) -> String {
        format!("{}_{}", self.company.placeholder, self.project.replacement)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    fn rules() -> RenameRules {
        RenameRules::new("CommerceMono", "HRMS", None).unwrap()
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        assert!(Substitution::new("", "x").is_err());
    }

    #[test]
    fn test_empty_project_rejected() {
        assert!(RenameRules::new("", "HRMS", None).is_err());
        assert!(RenameRules::new("CommerceMono", "", None).is_err());
    }

    #[test]
    fn test_empty_company_replacement_allowed() {
        let rules = rules();
        assert_eq!(rules.company().placeholder(), "Cloned");
        assert_eq!(rules.company().replacement(), "");
    }

    #[test]
    fn test_apply_replaces_all_occurrences() {
        let rules = rules();
        assert_eq!(
            rules.apply("CommerceMono.Api uses CommerceMono.Application"),
            "HRMS.Api uses HRMS.Application"
        );
    }

    #[test]
    fn test_apply_strips_company_without_replacement() {
        let rules = rules();
        assert_eq!(rules.apply("Cloned.CommerceMono"), ".HRMS");
    }

    #[test]
    fn test_company_applied_before_project() {
        // The project key contains the company placeholder.
        let rules = RenameRules::new("ClonedShop", "Store", Some("Acme")).unwrap();

        assert_eq!(rules.apply("ClonedShop"), "AcmeShop");
        assert_eq!(rules.rename_dir("ClonedShop.Api"), "AcmeShop.Api");
    }

    #[test]
    fn test_matches_either_placeholder() {
        let rules = rules();
        assert!(rules.matches("CommerceMono.sln"));
        assert!(rules.matches("Cloned_HRMS"));
        assert!(!rules.matches("Makefile"));
    }

    #[test]
    fn test_rename_dir_keeps_company_without_replacement() {
        let rules = rules();
        assert_eq!(rules.rename_dir("Cloned.CommerceMono"), "Cloned.HRMS");
        assert_eq!(rules.rename_file("Cloned.CommerceMono"), ".HRMS");
    }

    #[test]
    fn test_rename_dir_with_company_replacement() {
        let rules = RenameRules::new("CommerceMono", "HRMS", Some("Acme")).unwrap();
        assert_eq!(rules.rename_dir("Cloned_HRMS"), "Acme_HRMS");
    }

    #[test]
    fn test_root_dir_name() {
        assert_eq!(rules().root_dir_name(), "Cloned_HRMS");
    }

    #[test]
    fn test_apply_is_idempotent_once_placeholders_are_gone() {
        let rules = rules();
        let once = rules.apply("namespace CommerceMono;");
        assert_eq!(rules.apply(&once), once);
    }
}
