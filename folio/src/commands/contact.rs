use anyhow::{bail, Context};
use clap::Args;
use folio_client::{
    ClientEnvironment, ContactField, ContactForm, HttpContactApi, SubmitError,
};
use folio_config::Config;
use url::Url;

#[derive(Debug, Args)]
pub struct ContactCommand {
    /// Base url of the folio server [default: the configured http address]
    #[arg(long)]
    url: Option<Url>,
    /// Your name
    #[arg(long)]
    name: String,
    /// Your email address
    #[arg(long)]
    email: String,
    /// Subject of the message
    #[arg(long)]
    subject: String,
    /// The message to send
    message: String,
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let url = match self.url {
            Some(url) => url,
            None => format!("http://{}/", config.http.address)
                .parse()
                .context("Failed to build server url from the http address")?,
        };

        let api = HttpContactApi::new(&url)?;
        let mut form = ContactForm::new(api, ClientEnvironment::detect());
        form.set_field(ContactField::Name, self.name);
        form.set_field(ContactField::Email, self.email);
        form.set_field(ContactField::Subject, self.subject);
        form.set_field(ContactField::Message, self.message);

        match form.submit().await {
            Ok(()) => {
                println!("{}", form.status().button_label());
                Ok(())
            }
            Err(SubmitError::Validation(errors)) => {
                for error in &errors.0 {
                    eprintln!("{}: {}", error.field.as_str(), error.message);
                }
                bail!("Invalid contact submission")
            }
            Err(err) => Err(err).context("Failed to send contact submission"),
        }
    }
}
