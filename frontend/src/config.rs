use log::Level;

pub const RELAY_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const LEAD_RECIPIENT: &str = "cynthia@pelerara.com.br";
pub const CONTACT_EMAIL: &str = "contato@pelerara.com.br";
pub const WHATSAPP_NUMBER: &str = "5531999940277";
pub const WHATSAPP_DISPLAY: &str = "+55 31 9 9994-0277";
pub const WEBSITE_URL: &str = "https://pelerara.com.br";
pub const PRESENTATION_URL: &str =
    "https://drive.google.com/drive/folders/1EG8ASKLsmkevH9GkI0D-ZlWBr47CjV67?usp=sharing";
pub const LEAD_SOURCE: &str = "Website Oficial - Formulário de Investidores";

/// Credentials for the hosted email relay, baked in at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Returns `None` unless all three values are present and non-empty.
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Option<Self> {
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(String::from);
        Some(Self {
            service_id: non_empty(service_id)?,
            template_id: non_empty(template_id)?,
            public_key: non_empty(public_key)?,
        })
    }

    pub fn from_build_env() -> Option<Self> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    /// Public key with everything but the last four characters masked.
    pub fn masked_key(&self) -> String {
        let chars: Vec<char> = self.public_key.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("***{}", tail)
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_config_requires_all_three_values() {
        assert!(RelayConfig::from_parts(Some("svc"), Some("tpl"), None).is_none());
        assert!(RelayConfig::from_parts(Some("svc"), Some(""), Some("key")).is_none());
        assert!(RelayConfig::from_parts(None, Some("tpl"), Some("key")).is_none());

        let config = RelayConfig::from_parts(Some("svc"), Some(" tpl "), Some("key")).unwrap();
        assert_eq!(config.template_id, "tpl");
    }

    #[test]
    fn masked_key_keeps_only_the_tail() {
        let config = RelayConfig::from_parts(Some("s"), Some("t"), Some("abcdef123")).unwrap();
        assert_eq!(config.masked_key(), "***f123");

        let short = RelayConfig::from_parts(Some("s"), Some("t"), Some("ab")).unwrap();
        assert_eq!(short.masked_key(), "***ab");
    }
}
