use folio_models::theme::{ColorMode, ThemePreference};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE_NAME: &str = "base.html";
pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    HomePageTemplate("home.html"),
    ContactPageTemplate("contact.html"),
    NotFoundPageTemplate("not_found.html"),
}

/// Values shared by every page, consumed by the base layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    pub site_title: String,
    pub description: String,
    pub owner: String,
    /// Path of the current page, marks the active navbar link and keys the
    /// page transition.
    pub path: String,
    pub color_mode: ColorMode,
    pub theme: ThemePreference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePageTemplate {
    pub layout: PageLayout,
    pub open_to_work: bool,
    pub bio: Vec<String>,
    pub about: Vec<String>,
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPageTemplate {
    pub layout: PageLayout,
    pub endpoint: String,
    pub limits: ContactFieldLimits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactFieldLimits {
    pub name_min: usize,
    pub name_max: usize,
    pub subject_min: usize,
    pub subject_max: usize,
    pub message_min: usize,
    pub message_max: usize,
}

impl Default for ContactFieldLimits {
    fn default() -> Self {
        use folio_models::contact::*;
        Self {
            name_min: NAME_MIN_LENGTH,
            name_max: NAME_MAX_LENGTH,
            subject_min: SUBJECT_MIN_LENGTH,
            subject_max: SUBJECT_MAX_LENGTH,
            message_min: MESSAGE_MIN_LENGTH,
            message_max: MESSAGE_MAX_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundPageTemplate {
    pub layout: PageLayout,
}
