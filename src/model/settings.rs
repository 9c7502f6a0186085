//! Settings page fixture: switches, system selects and retention days.
//!
//! The values are a page-local draft. "Save" only reports what would be
//! saved; nothing is written anywhere.

use crate::resource::Choice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub id: &'static str,
    pub label: &'static str,
    pub enabled: bool,
}

pub const LANGUAGES: &[Choice] = &[
    Choice::new("en", "English"),
    Choice::new("es", "Spanish"),
    Choice::new("fr", "French"),
];

pub const TIMEZONES: &[Choice] = &[
    Choice::new("utc", "UTC"),
    Choice::new("est", "EST"),
    Choice::new("pst", "PST"),
];

pub const MIN_RETENTION_DAYS: u32 = 1;

/// One focusable row of the settings page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    Notification(usize),
    Security(usize),
    Language,
    Timezone,
    Retention,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub notifications: Vec<Toggle>,
    pub security: Vec<Toggle>,
    pub language: usize,
    pub timezone: usize,
    pub retention_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let t = |id, label, enabled| Toggle { id, label, enabled };
        Self {
            notifications: vec![
                t("email", "Email Notifications", true),
                t("push", "Push Notifications", true),
                t("sms", "SMS Notifications", false),
            ],
            security: vec![
                t("2fa", "Two-Factor Authentication", true),
                t("session", "Session Timeout (30 minutes)", true),
                t("ip", "IP Restriction", false),
            ],
            language: 0,
            timezone: 0,
            retention_days: 30,
        }
    }
}

impl Settings {
    pub fn items(&self) -> Vec<SettingsItem> {
        let mut items: Vec<SettingsItem> = (0..self.notifications.len())
            .map(SettingsItem::Notification)
            .collect();
        items.extend((0..self.security.len()).map(SettingsItem::Security));
        items.extend([
            SettingsItem::Language,
            SettingsItem::Timezone,
            SettingsItem::Retention,
        ]);
        items
    }

    pub fn toggle(&mut self, item: SettingsItem) -> Option<&Toggle> {
        let toggle = match item {
            SettingsItem::Notification(i) => self.notifications.get_mut(i)?,
            SettingsItem::Security(i) => self.security.get_mut(i)?,
            _ => return None,
        };
        toggle.enabled = !toggle.enabled;
        Some(toggle)
    }

    /// Step a select or the retention counter. Toggles ignore this.
    pub fn adjust(&mut self, item: SettingsItem, forward: bool) {
        let step = |idx: &mut usize, len: usize| {
            *idx = if forward {
                (*idx + 1) % len
            } else {
                (*idx + len - 1) % len
            };
        };
        match item {
            SettingsItem::Language => step(&mut self.language, LANGUAGES.len()),
            SettingsItem::Timezone => step(&mut self.timezone, TIMEZONES.len()),
            SettingsItem::Retention => {
                self.retention_days = if forward {
                    self.retention_days.saturating_add(1)
                } else {
                    self.retention_days
                        .saturating_sub(1)
                        .max(MIN_RETENTION_DAYS)
                };
            }
            _ => {}
        }
    }

    pub fn language(&self) -> Choice {
        LANGUAGES[self.language % LANGUAGES.len()]
    }

    pub fn timezone(&self) -> Choice {
        TIMEZONES[self.timezone % TIMEZONES.len()]
    }

    /// Flat key/value view of every setting, used when "saving".
    pub fn values(&self) -> Vec<(String, String)> {
        let mut values: Vec<(String, String)> = self
            .notifications
            .iter()
            .chain(&self.security)
            .map(|t| (t.id.to_string(), t.enabled.to_string()))
            .collect();
        values.push(("language".into(), self.language().value.into()));
        values.push(("timezone".into(), self.timezone().value.into()));
        values.push(("retention_days".into(), self.retention_days.to_string()));
        values
    }
}

/// Data-management actions, each behind a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataAction {
    Backup,
    Restore,
    Delete,
}

impl DataAction {
    pub fn title(self) -> &'static str {
        match self {
            Self::Backup => "Backup Data",
            Self::Restore => "Restore Data",
            Self::Delete => "Delete Data",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Backup => "Are you sure you want to create a backup of all your data? This process may take a few minutes.",
            Self::Restore => "Are you sure you want to restore data from a backup? This will overwrite current data.",
            Self::Delete => "Are you sure you want to delete all data? This action cannot be undone.",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            Self::Backup => "Backup",
            Self::Restore => "Restore",
            Self::Delete => "Delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.language().value, "en");
        assert_eq!(s.timezone().value, "utc");
        assert_eq!(s.retention_days, 30);
        assert_eq!(s.items().len(), 9);
    }

    #[test]
    fn test_toggle_only_switches() {
        let mut s = Settings::default();
        assert_eq!(s.toggle(SettingsItem::Notification(2)).map(|t| t.enabled), Some(true));
        assert!(s.toggle(SettingsItem::Language).is_none());
        assert!(s.toggle(SettingsItem::Security(9)).is_none());
    }

    #[test]
    fn test_retention_floor() {
        let mut s = Settings::default();
        s.retention_days = 1;
        s.adjust(SettingsItem::Retention, false);
        assert_eq!(s.retention_days, MIN_RETENTION_DAYS);
        s.adjust(SettingsItem::Retention, true);
        assert_eq!(s.retention_days, 2);
    }

    #[test]
    fn test_select_wraps() {
        let mut s = Settings::default();
        s.adjust(SettingsItem::Language, false);
        assert_eq!(s.language().value, "fr");
        s.adjust(SettingsItem::Timezone, true);
        assert_eq!(s.timezone().label, "EST");
    }

    #[test]
    fn test_values() {
        let values = Settings::default().values();
        assert!(values.contains(&("sms".to_string(), "false".to_string())));
        assert!(values.contains(&("retention_days".to_string(), "30".to_string())));
    }
}
