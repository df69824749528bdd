//! Named logger profiles ("groups")
//!
//! A profile bundles one rule-text blob with its display options. The book
//! holds every profile plus the name of the active one.

use std::collections::BTreeMap;

use conlog_rules::RuleText;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::layer::ConfigLayer;
use crate::settings::DEFAULT_COLUMN_WIDTH;

/// A stored logger profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Canonical rule text
    #[serde(default)]
    pub text: String,
    /// Prefix lines with a timestamp
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub include_time: bool,
    /// Column width; absent means the default width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_width: Option<usize>,
}

impl Profile {
    /// Build a profile from text typed by the user; the text is normalized
    pub fn from_user(raw: &str, include_time: bool, column_width: usize) -> Self {
        Self {
            text: RuleText::from_user(raw).into_canonical(),
            include_time,
            column_width: (column_width != DEFAULT_COLUMN_WIDTH).then_some(column_width),
        }
    }

    pub fn rule_text(&self) -> RuleText {
        RuleText::from_canonical(self.text.clone())
    }

    /// Text as shown in an editor
    pub fn formatted(&self) -> String {
        self.rule_text().formatted()
    }

    pub fn column_width(&self) -> usize {
        self.column_width.unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// The configuration layer contributed by this profile
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            rules: self.rule_text().rules(),
            include_time: self.include_time,
            column_width: self.column_width.map(|width| width.to_string()),
            default_level: None,
        }
    }
}

/// Every stored profile plus the selected group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileBook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    #[serde(default)]
    pub groups: BTreeMap<String, Profile>,
}

impl ProfileBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group names sorted ignoring case
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        names.sort_by_key(|name| name.to_lowercase());
        names
    }

    /// Find an existing group whose name equals `name` ignoring case
    fn find_case_insensitive(&self, name: &str) -> Option<&str> {
        self.groups
            .keys()
            .map(String::as_str)
            .find(|existing| existing.to_lowercase() == name.to_lowercase())
    }

    /// Create an empty group. Names must be unique ignoring case.
    pub fn add_group(&mut self, name: &str) -> ConfigResult<()> {
        let name = validate_name(name)?;
        if let Some(existing) = self.find_case_insensitive(name) {
            return Err(ConfigError::DuplicateGroup(existing.to_string()));
        }
        self.groups.insert(name.to_string(), Profile::default());
        Ok(())
    }

    /// Remove a group; clears the selection if it pointed at this group
    pub fn remove_group(&mut self, name: &str) -> ConfigResult<Profile> {
        let profile = self
            .groups
            .remove(name)
            .ok_or_else(|| ConfigError::UnknownGroup(name.to_string()))?;
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        }
        Ok(profile)
    }

    pub fn select(&mut self, name: &str) -> ConfigResult<()> {
        if !self.groups.contains_key(name) {
            return Err(ConfigError::UnknownGroup(name.to_string()));
        }
        self.selected = Some(name.to_string());
        Ok(())
    }

    /// Store a profile under `name`, creating the group if needed
    pub fn save_profile(&mut self, name: &str, profile: Profile) -> ConfigResult<()> {
        let name = validate_name(name)?;
        if !self.groups.contains_key(name) {
            if let Some(existing) = self.find_case_insensitive(name) {
                return Err(ConfigError::DuplicateGroup(existing.to_string()));
            }
        }
        self.groups.insert(name.to_string(), profile);
        Ok(())
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.groups.get(name)
    }

    /// The selected profile, if the selection names an existing group
    pub fn selected_profile(&self) -> Option<(&str, &Profile)> {
        let name = self.selected.as_deref()?;
        self.groups.get(name).map(|profile| (name, profile))
    }
}

fn validate_name(name: &str) -> ConfigResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        Err(ConfigError::EmptyGroupName)
    } else {
        Ok(name)
    }
}
