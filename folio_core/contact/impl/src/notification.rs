use chrono::{DateTime, FixedOffset, Utc};
use folio_models::{
    client_address::ClientAddressInfo,
    contact::{BrowserInfo, ContactSubmission},
};
use url::Url;

const LOCAL_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const UTC_TIME_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Render the notification sent to the chat for a submission.
///
/// The text is meant for the HTML parse mode, so every interpolated value is
/// escaped.
pub fn format_notification(
    submission: &ContactSubmission,
    client_address: &ClientAddressInfo,
    now: DateTime<Utc>,
    local_offset: FixedOffset,
) -> String {
    let name = escape(&submission.name);
    let email = escape(&submission.email);
    let subject = escape(&submission.subject);
    let message = escape(&submission.message);
    let address = escape(&client_address.address);
    let source = escape(client_address.source);
    let local_time = now.with_timezone(&local_offset).format(LOCAL_TIME_FORMAT);
    let utc_time = now.format(UTC_TIME_FORMAT);
    let browser_info = format_browser_info(&submission.browser);
    let [ip_info, ip_location, whatismyipaddress, ip2location] =
        lookup_urls(&client_address.address).map(|url| escape(&url));

    format!(
        "🔔 New Contact Form Message

👤 Name: {name}
📧 Email: {email}
📝 Subject: {subject}
💬 Message: {message}

📌 Sender Information:
🌐 IP Address: {address} (Source: {source})
⏰ Local Time: {local_time}
🕒 UTC Time: {utc_time}
{browser_info}
🔍 IP Info: {ip_info}
🗺️ IP Location: {ip_location}
🔎 Additional IP Tools:
 - {whatismyipaddress}
 - {ip2location}"
    )
}

fn format_browser_info(browser: &BrowserInfo) -> String {
    [
        ("🌐 User Agent", &browser.user_agent),
        ("💻 Platform", &browser.platform),
        ("🏢 Vendor", &browser.vendor),
        ("🌍 Language", &browser.language),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        let value = value.as_deref().filter(|x| !x.is_empty())?;
        Some(format!("{label}: {}\n", escape(value)))
    })
    .collect()
}

/// External lookup pages for the given address.
fn lookup_urls(address: &str) -> [String; 4] {
    [
        lookup_url("https://ipapi.co/", &[address, "json", ""]),
        lookup_url("https://www.ipapi.co/", &[address, ""]),
        lookup_url("https://whatismyipaddress.com/ip/", &[address]),
        lookup_url("https://www.ip2location.com/demo/", &[address]),
    ]
}

fn lookup_url(base: &'static str, segments: &[&str]) -> String {
    let Ok(mut url) = Url::parse(base) else {
        return base.into();
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url.into()
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn submission(browser: BrowserInfo) -> ContactSubmission {
        ContactSubmission {
            name: "Max Mustermann".try_into().unwrap(),
            email: "max.mustermann@example.de".try_into().unwrap(),
            subject: "Project inquiry".try_into().unwrap(),
            message: "Hello World! Let's build <something>.".try_into().unwrap(),
            browser,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 12, 4, 5).unwrap()
    }

    #[test]
    fn full_message() {
        let browser = BrowserInfo {
            user_agent: Some("Mozilla/5.0 (X11; Linux x86_64)".into()),
            platform: Some("Linux x86_64".into()),
            vendor: Some("Google Inc.".into()),
            language: Some("en-US".into()),
        };
        let client_address = ClientAddressInfo {
            address: "1.2.3.4".into(),
            source: "x-forwarded-for",
        };

        let result = format_notification(
            &submission(browser),
            &client_address,
            now(),
            FixedOffset::east_opt(3 * 3600).unwrap(),
        );

        assert_eq!(
            result,
            "🔔 New Contact Form Message

👤 Name: Max Mustermann
📧 Email: max.mustermann@example.de
📝 Subject: Project inquiry
💬 Message: Hello World! Let's build &lt;something&gt;.

📌 Sender Information:
🌐 IP Address: 1.2.3.4 (Source: x-forwarded-for)
⏰ Local Time: 10/14/2026, 3:04:05 PM
🕒 UTC Time: Wed, 14 Oct 2026 12:04:05 GMT
🌐 User Agent: Mozilla/5.0 (X11; Linux x86_64)
💻 Platform: Linux x86_64
🏢 Vendor: Google Inc.
🌍 Language: en-US

🔍 IP Info: https://ipapi.co/1.2.3.4/json/
🗺️ IP Location: https://www.ipapi.co/1.2.3.4/
🔎 Additional IP Tools:
 - https://whatismyipaddress.com/ip/1.2.3.4
 - https://www.ip2location.com/demo/1.2.3.4"
        );
    }

    #[test]
    fn unknown_address_without_browser_info() {
        let result = format_notification(
            &submission(BrowserInfo::default()),
            &ClientAddressInfo::unknown(),
            now(),
            FixedOffset::east_opt(0).unwrap(),
        );

        assert!(result.contains("🌐 IP Address: unknown (Source: Not detected)\n"));
        assert!(result.contains("🕒 UTC Time: Wed, 14 Oct 2026 12:04:05 GMT\n\n🔍 IP Info"));
        assert!(result.contains("⏰ Local Time: 10/14/2026, 12:04:05 PM\n"));
        assert!(result.contains("https://ipapi.co/unknown/json/"));
        assert!(!result.contains("User Agent"));
    }

    #[test]
    fn only_present_browser_fields() {
        let browser = BrowserInfo {
            language: Some("tr-TR".into()),
            vendor: Some(String::new()),
            ..Default::default()
        };

        let result = format_notification(
            &submission(browser),
            &ClientAddressInfo::unknown(),
            now(),
            FixedOffset::east_opt(0).unwrap(),
        );

        assert!(result.contains("GMT\n🌍 Language: tr-TR\n\n🔍"));
        assert!(!result.contains("Vendor"));
    }

    #[test]
    fn lookup_urls_encode_address() {
        let [ip_info, ..] = lookup_urls("1.2.3.4/../admin?x=1");
        assert_eq!(ip_info, "https://ipapi.co/1.2.3.4%2F..%2Fadmin%3Fx=1/json/");

        let [.., ip2location] = lookup_urls("2001:db8::1");
        assert_eq!(ip2location, "https://www.ip2location.com/demo/2001:db8::1");
    }

    #[test]
    fn escape_html() {
        assert_eq!(escape("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }
}
