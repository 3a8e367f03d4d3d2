use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_extern_impl::telegram::TelegramApiServiceImpl;
use folio_shared_impl::time::TimeServiceImpl;
use folio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<Contact, Template>;

// Core
pub type Contact = ContactFeatureServiceImpl<Time, TelegramApi>;

// Extern
pub type TelegramApi = TelegramApiServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Templates
pub type Template = TemplateServiceImpl;
