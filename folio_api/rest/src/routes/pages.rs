use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    http::{header::VARY, HeaderName, StatusCode},
    response::{Html, IntoResponse, Response},
    routing, Router,
};
use folio_templates_contracts::{
    ContactFieldLimits, ContactPageTemplate, HomePageTemplate, NotFoundPageTemplate, PageLayout,
    Template, TemplateService,
};

use crate::{
    errors::internal_server_error, extractors::theme::ThemeHint, RestServerSiteConfig,
    CONTACT_ENDPOINT,
};

const ACCEPT_CH: HeaderName = HeaderName::from_static("accept-ch");
const CLIENT_HINTS: &str = "Sec-CH-Prefers-Color-Scheme";
const VARY_VALUE: &str = "Cookie, Sec-CH-Prefers-Color-Scheme";

struct PagesState<Template> {
    template: Arc<Template>,
    site: Arc<RestServerSiteConfig>,
}

impl<Template> Clone for PagesState<Template> {
    fn clone(&self) -> Self {
        Self {
            template: Arc::clone(&self.template),
            site: Arc::clone(&self.site),
        }
    }
}

impl<Template> PagesState<Template> {
    fn layout(&self, path: &str, hint: ThemeHint) -> PageLayout {
        PageLayout {
            site_title: self.site.title.clone(),
            description: self.site.description.clone(),
            owner: self.site.owner.clone(),
            path: path.into(),
            color_mode: hint.color_mode,
            theme: hint.theme,
        }
    }
}

pub fn router(
    template: Arc<impl TemplateService>,
    site: Arc<RestServerSiteConfig>,
) -> Router<()> {
    Router::new()
        .route("/", routing::get(home))
        .route("/contact", routing::get(contact))
        .fallback(not_found)
        .with_state(PagesState { template, site })
}

async fn home(state: State<PagesState<impl TemplateService>>, hint: ThemeHint) -> Response {
    let template = HomePageTemplate {
        layout: state.layout("/", hint),
        open_to_work: state.site.open_to_work,
        bio: state.site.bio.clone(),
        about: state.site.about.clone(),
        links: state.site.links.clone(),
    };
    render(&*state.template, StatusCode::OK, &template)
}

async fn contact(state: State<PagesState<impl TemplateService>>, hint: ThemeHint) -> Response {
    let template = ContactPageTemplate {
        layout: state.layout("/contact", hint),
        endpoint: CONTACT_ENDPOINT.into(),
        limits: ContactFieldLimits::default(),
    };
    render(&*state.template, StatusCode::OK, &template)
}

async fn not_found(
    state: State<PagesState<impl TemplateService>>,
    OriginalUri(uri): OriginalUri,
    hint: ThemeHint,
) -> Response {
    let template = NotFoundPageTemplate {
        layout: state.layout(uri.path(), hint),
    };
    render(&*state.template, StatusCode::NOT_FOUND, &template)
}

fn render<T: Template + 'static>(
    service: &impl TemplateService,
    status: StatusCode,
    template: &T,
) -> Response {
    match service.render(template) {
        Ok(html) => (
            status,
            [(ACCEPT_CH, CLIENT_HINTS), (VARY, VARY_VALUE)],
            Html(html),
        )
            .into_response(),
        Err(err) => internal_server_error(err.context(format!("Failed to render {}", T::NAME))),
    }
}
