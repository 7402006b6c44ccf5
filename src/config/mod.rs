//! Shell configuration
//!
//! Initial menu data, navbar actions and the signed-in profile. Loaded from the
//! embedded `assets/shell.json`; the built-in defaults are used when that file
//! fails to parse or validate.

use serde::Deserialize;

use crate::domain::models::{MenuEntry, MenuIcon, NavAction, UserProfile, validate_menu};
use crate::shared::errors::Result;
use crate::shared::logging::{log_config_fallback, log_config_loaded};

const SHELL_JSON: &str = include_str!("../../assets/shell.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    pub brand: String,
    pub menu: Vec<MenuEntry>,
    pub primary_actions: Vec<NavAction>,
    pub social_actions: Vec<NavAction>,
    pub profile: UserProfile,
}

impl ShellConfig {
    /// Load the embedded configuration, falling back to defaults
    pub fn load() -> Self {
        match Self::from_json(SHELL_JSON) {
            Ok(config) => {
                log_config_loaded(config.menu.len(), config.all_actions().count());
                config
            }
            Err(e) => {
                log_config_fallback(&e);
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: ShellConfig = serde_json::from_str(json)?;
        validate_menu(&config.menu)?;
        Ok(config)
    }

    /// Every navbar destination, in display order
    pub fn all_actions(&self) -> impl Iterator<Item = &NavAction> {
        self.primary_actions.iter().chain(self.social_actions.iter())
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand: "Logo".to_string(),
            menu: vec![
                MenuEntry::new("dashboard", "Dashboard").with_icon(MenuIcon::Dashboard),
                MenuEntry::new("jobApplications", "Job Applications")
                    .with_icon(MenuIcon::Work)
                    .with_children(vec![
                        MenuEntry::new("applied", "Applied"),
                        MenuEntry::new("interviews", "Interviews"),
                    ]),
                MenuEntry::new("qualifications", "Qualifications").with_icon(MenuIcon::Work),
                MenuEntry::new("about", "About").with_icon(MenuIcon::Info),
                MenuEntry::new("contact", "Contact").with_icon(MenuIcon::ContactMail),
            ],
            primary_actions: vec![
                NavAction::new("Home", MenuIcon::Home),
                NavAction::new("Jobs", MenuIcon::Work),
                NavAction::new("Employers", MenuIcon::Business),
            ],
            social_actions: vec![
                NavAction::new("Notifications", MenuIcon::Notifications),
                NavAction::new("Messaging", MenuIcon::Message),
            ],
            profile: UserProfile {
                name: "John Doe".to_string(),
                title: "Software Engineer".to_string(),
                avatar_url: None,
            },
        }
    }
}
