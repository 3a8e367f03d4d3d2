use std::sync::Arc;

use anyhow::Context;
use folio_di::Build;
use folio_templates_contracts::{
    Template, TemplateService, BASE_TEMPLATE, BASE_TEMPLATE_NAME, TEMPLATES,
};
use tera::Tera;

#[derive(Debug, Clone, Build)]
pub struct TemplateServiceImpl {
    #[state]
    state: State,
}

#[derive(Debug, Clone)]
struct State(Result<Arc<Tera>, Arc<str>>);

impl Default for State {
    fn default() -> Self {
        let tera = load_templates()
            .map(Arc::new)
            .map_err(|err| {
                tracing::error!("Failed to load templates: {err:#}");
                format!("{err:#}").into()
            });
        Self(tera)
    }
}

fn load_templates() -> anyhow::Result<Tera> {
    let mut tera = Tera::default();

    tera.add_raw_template(BASE_TEMPLATE_NAME, BASE_TEMPLATE)
        .context("Failed to add base template")?;

    for &(name, template) in TEMPLATES {
        tera.add_raw_template(name, template)
            .with_context(|| format!("Failed to add template {name}"))?;
    }

    Ok(tera)
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String> {
        let tera = self
            .state
            .0
            .as_ref()
            .map_err(|err| anyhow::anyhow!("Templates are unavailable: {err}"))?;
        let context = tera::Context::from_serialize(template)?;
        tera.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use folio_models::theme::{ColorMode, ThemePreference};
    use folio_templates_contracts::{
        ContactFieldLimits, ContactPageTemplate, HomePageTemplate, NotFoundPageTemplate,
        PageLayout, SocialLink,
    };

    use super::*;

    fn layout(path: &str) -> PageLayout {
        PageLayout {
            site_title: "Max's Portfolio".into(),
            description: "Portfolio".into(),
            owner: "Max".into(),
            path: path.into(),
            color_mode: ColorMode::Dark,
            theme: ThemePreference::System,
        }
    }

    fn sut() -> TemplateServiceImpl {
        TemplateServiceImpl {
            state: Default::default(),
        }
    }

    #[test]
    fn home() {
        let html = sut()
            .render(&HomePageTemplate {
                layout: layout("/"),
                open_to_work: true,
                bio: vec!["I build <things>.".into()],
                about: vec![],
                links: vec![SocialLink {
                    label: "let's collaborate on github".into(),
                    href: "https://github.com/max".into(),
                }],
            })
            .unwrap();

        assert!(html.contains(r#"<html lang="en" class="dark" data-theme="system">"#));
        assert!(html.contains(r#"<a href="/" class="active" aria-current="page">home</a>"#));
        assert!(html.contains("<a href=\"/contact\">contact</a>"));
        assert!(html.contains("Open to work"));
        assert!(html.contains("I build &lt;things&gt;."));
        assert!(!html.contains("more about me"));
        assert!(html.contains(r#"<div class="page-transition" data-path="&#x2F;">"#));
    }

    #[test]
    fn contact() {
        let html = sut()
            .render(&ContactPageTemplate {
                layout: layout("/contact"),
                endpoint: "/api/send-telegram".into(),
                limits: ContactFieldLimits::default(),
            })
            .unwrap();

        assert!(html.contains(r#"maxlength="50""#));
        assert!(html.contains(r#"maxlength="100""#));
        assert!(html.contains(r#"maxlength="500""#));
        assert!(html.contains("0/500"));
        assert!(html.contains("/assets/contact.js"));
        assert!(html.contains("<title>Contact | Max&#x27;s Portfolio</title>"));
    }

    #[test]
    fn not_found() {
        let html = sut()
            .render(&NotFoundPageTemplate {
                layout: layout("/nope"),
            })
            .unwrap();

        assert!(html.contains("<code>&#x2F;nope</code>"));
        assert!(!html.contains("class=\"active\""));
    }
}
