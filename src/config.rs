//! User configuration — keybindings, motion, and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/folio/config.toml` (default `~/.config/folio/config.toml`).
//! View state (dark mode etc.) is deliberately *not* stored here.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::core::section::Section;

/// Errors raised while persisting the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ToggleDarkMode,
    ToggleMenu,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    NextSection,
    PrevSection,
    JumpAbout,
    JumpSkills,
    JumpProjects,
    JumpExperience,
    OpenResume,
    OpenGitHub,
    OpenLinkedIn,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for serialisation).
    pub const ALL: &[Action] = &[
        Action::ToggleDarkMode,
        Action::ToggleMenu,
        Action::ScrollUp,
        Action::ScrollDown,
        Action::PageUp,
        Action::PageDown,
        Action::Top,
        Action::Bottom,
        Action::NextSection,
        Action::PrevSection,
        Action::JumpAbout,
        Action::JumpSkills,
        Action::JumpProjects,
        Action::JumpExperience,
        Action::OpenResume,
        Action::OpenGitHub,
        Action::OpenLinkedIn,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::ToggleDarkMode => "toggle_dark_mode",
            Action::ToggleMenu => "toggle_menu",
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::Top => "top",
            Action::Bottom => "bottom",
            Action::NextSection => "next_section",
            Action::PrevSection => "prev_section",
            Action::JumpAbout => "jump_about",
            Action::JumpSkills => "jump_skills",
            Action::JumpProjects => "jump_projects",
            Action::JumpExperience => "jump_experience",
            Action::OpenResume => "open_resume",
            Action::OpenGitHub => "open_github",
            Action::OpenLinkedIn => "open_linkedin",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }

    /// The section a jump action navigates to.
    pub fn jump_target(self) -> Option<Section> {
        match self {
            Action::JumpAbout => Some(Section::About),
            Action::JumpSkills => Some(Section::Skills),
            Action::JumpProjects => Some(Section::Projects),
            Action::JumpExperience => Some(Section::Experience),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared (platform-specific modifiers like SUPER are ignored).
    /// SHIFT is already folded into the case of a character key, so it is
    /// not compared for `Char` codes.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mut mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        if matches!(self.code, KeyCode::Char(_)) {
            mask.remove(KeyModifiers::SHIFT);
        }
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"↑"`, `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        self.render(|code| match code {
            KeyCode::Up => Some("↑"),
            KeyCode::Down => Some("↓"),
            KeyCode::Left => Some("←"),
            KeyCode::Right => Some("→"),
            KeyCode::PageUp => Some("PgUp"),
            KeyCode::PageDown => Some("PgDn"),
            _ => None,
        })
    }

    /// Serialise to config-file format (e.g. `"Up"`, `"Ctrl+c"`, `"q"`).
    fn to_config_string(&self) -> String {
        self.render(|code| match code {
            KeyCode::Up => Some("Up"),
            KeyCode::Down => Some("Down"),
            KeyCode::Left => Some("Left"),
            KeyCode::Right => Some("Right"),
            KeyCode::PageUp => Some("PageUp"),
            KeyCode::PageDown => Some("PageDown"),
            _ => None,
        })
    }

    fn render(&self, arrows: impl Fn(KeyCode) -> Option<&'static str>) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        if let Some(name) = arrows(self.code) {
            s.push_str(name);
            return s;
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::BackTab => "BackTab".into(),
            KeyCode::Backspace => "Backspace".into(),
            KeyCode::Delete => "Delete".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Up"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        // Single characters keep their case ("G" and "g" differ).
        let mut chars = key_part.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(KeyBind::new(KeyCode::Char(c), modifiers));
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" | "bksp" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

const DEFAULT_SCROLL_STEP: u16 = 3;

/// Application configuration — keybindings and motion settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Play entrance animations.
    pub animations: bool,
    /// Rows moved per scroll key press / mouse wheel notch.
    pub scroll_step: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            animations: true,
            scroll_step: DEFAULT_SCROLL_STEP,
        }
    }
}

impl AppConfig {
    /// Built-in keybindings.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::{Char, Down, End, Home, Tab, Up};
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(ToggleDarkMode, vec![KeyBind::new(Char('d'), n)]);
        m.insert(ToggleMenu, vec![KeyBind::new(Char('m'), n)]);
        m.insert(ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(PageUp, vec![KeyBind::new(KeyCode::PageUp, n)]);
        m.insert(
            PageDown,
            vec![KeyBind::new(KeyCode::PageDown, n), KeyBind::new(Char(' '), n)],
        );
        m.insert(Top, vec![KeyBind::new(Home, n)]);
        m.insert(Bottom, vec![KeyBind::new(End, n)]);
        m.insert(NextSection, vec![KeyBind::new(Char('n'), n), KeyBind::new(Tab, n)]);
        m.insert(PrevSection, vec![KeyBind::new(Char('p'), n)]);
        m.insert(JumpAbout, vec![KeyBind::new(Char('1'), n)]);
        m.insert(JumpSkills, vec![KeyBind::new(Char('2'), n)]);
        m.insert(JumpProjects, vec![KeyBind::new(Char('3'), n)]);
        m.insert(JumpExperience, vec![KeyBind::new(Char('4'), n)]);
        m.insert(OpenResume, vec![KeyBind::new(Char('r'), n)]);
        m.insert(OpenGitHub, vec![KeyBind::new(Char('g'), n)]);
        m.insert(OpenLinkedIn, vec![KeyBind::new(Char('l'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: scroll | {}: next section | {}: dark mode | {}: menu | {}: quit",
            self.short_binding(Action::ScrollUp),
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::NextSection),
            self.short_binding(Action::ToggleDarkMode),
            self.short_binding(Action::ToggleMenu),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from `path`, falling back to defaults for anything
    /// missing or malformed.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse_config(&contents),
            Err(err) => {
                tracing::warn!("could not read {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Persist current config to `path`.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, self.serialise()).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                tracing::warn!("config line {}: expected `key = value`", lineno + 1);
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "animations" => {
                    match value {
                        "true" => config.animations = true,
                        "false" => config.animations = false,
                        other => tracing::warn!("config: animations = {other:?} is not a bool"),
                    }
                    continue;
                }
                "scroll_step" => {
                    match value.parse::<u16>() {
                        Ok(v) => config.scroll_step = v.clamp(1, 20),
                        Err(_) => tracing::warn!("config: scroll_step = {value:?} is not a number"),
                    }
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::warn!("config: unknown key {key:?}");
                continue;
            };

            let mut parsed = Vec::new();
            for part in value.split(',') {
                let part = part.trim().trim_matches('"');
                match KeyBind::parse(part) {
                    Some(bind) => parsed.push(bind),
                    None => tracing::warn!("config: cannot parse key {part:?} for {key}"),
                }
            }
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# folio configuration".to_string(),
            String::new(),
            "# Motion".to_string(),
            format!("animations = {}", self.animations),
            format!("scroll_step = {}", self.scroll_step),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab, BackTab,".to_string(),
            "#   Backspace, Delete, Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the default config file path (`$XDG_CONFIG_HOME/folio/config.toml`).
pub fn default_config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("folio").join("config.toml")
}
