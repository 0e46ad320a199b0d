//! HTML page rendering from the template directory

use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Pages served by the web front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Login,
    Signup,
    Dashboard,
    Chemicals,
    Equipment,
    EquipmentForm,
    ChemicalForm,
    Orders,
    ResourceManagement,
}

impl Page {
    pub fn template(&self) -> &'static str {
        match self {
            Page::Landing => "landing.html",
            Page::Login => "login.html",
            Page::Signup => "signup.html",
            Page::Dashboard => "home.html",
            Page::Chemicals => "chemicals.html",
            Page::Equipment => "equipment.html",
            Page::EquipmentForm => "equipment_form.html",
            Page::ChemicalForm => "form.html",
            Page::Orders => "orders.html",
            Page::ResourceManagement => "resource_management.html",
        }
    }
}

/// Category of a flash message, used as the alert style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Info => "info",
            FlashLevel::Warning => "warning",
            FlashLevel::Danger => "danger",
        }
    }
}

impl std::str::FromStr for FlashLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(FlashLevel::Success),
            "info" => Ok(FlashLevel::Info),
            "warning" => Ok(FlashLevel::Warning),
            "danger" => Ok(FlashLevel::Danger),
            _ => Err(format!("Invalid flash level: {}", s)),
        }
    }
}

/// One-shot message shown on the next rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Cookie representation: `level:message`
    pub fn encode(&self) -> String {
        format!("{}:{}", self.level.as_str(), self.message)
    }

    pub fn decode(value: &str) -> Option<Self> {
        let (level, message) = value.split_once(':')?;
        Some(Self::new(level.parse().ok()?, message))
    }

    fn to_html(&self) -> String {
        format!(
            r#"<div class="alert alert-{}" role="alert">{}</div>"#,
            self.level.as_str(),
            escape_html(&self.message)
        )
    }
}

/// Values substituted into a page template
#[derive(Debug, Default)]
pub struct PageContext {
    pub username: Option<String>,
    pub flash: Option<Flash>,
}

#[derive(Clone)]
pub struct PageRenderer {
    dir: PathBuf,
}

impl PageRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load a page template and fill in `{{ username }}` and `{{ flash }}`
    pub async fn render(&self, page: Page, context: &PageContext) -> AppResult<String> {
        let path = self.dir.join(page.template());
        let template = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::NotFound(format!("Page {} not found", page.template()))
            } else {
                AppError::Internal(format!("Failed to read {}: {}", path.display(), e))
            }
        })?;

        Ok(fill_template(&template, context))
    }
}

fn fill_template(template: &str, context: &PageContext) -> String {
    let username = context
        .username
        .as_deref()
        .map(escape_html)
        .unwrap_or_default();
    let flash = context
        .flash
        .as_ref()
        .map(Flash::to_html)
        .unwrap_or_default();

    template
        .replace("{{ username }}", &username)
        .replace("{{ flash }}", &flash)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
