//! Static files served under `/assets/`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub name: &'static str,
    pub content_type: &'static str,
    pub content: &'static str,
}

macro_rules! assets {
    ($( $ident:ident ( $name:literal, $content_type:literal ), )*) => {
        $(
            pub const $ident: Asset = Asset {
                name: $name,
                content_type: $content_type,
                content: include_str!(concat!("../static/", $name)),
            };
        )*

        pub const ASSETS: &[Asset] = &[$($ident),*];
    };
}

assets! {
    THEME_SCRIPT("theme-script.js", "text/javascript; charset=utf-8"),
    THEME_TOGGLE_SCRIPT("theme-toggle.js", "text/javascript; charset=utf-8"),
    CONTACT_SCRIPT("contact.js", "text/javascript; charset=utf-8"),
    STYLESHEET("style.css", "text/css; charset=utf-8"),
}

/// Look up an asset by its file name.
pub fn get(name: &str) -> Option<&'static Asset> {
    ASSETS.iter().find(|asset| asset.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(get("theme-script.js"), Some(&THEME_SCRIPT));
        assert_eq!(get("style.css").map(|x| x.content_type), Some("text/css; charset=utf-8"));
        assert_eq!(get("../Cargo.toml"), None);
    }

    #[test]
    fn not_empty() {
        for asset in ASSETS {
            assert!(!asset.content.trim().is_empty(), "{}", asset.name);
        }
    }
}
