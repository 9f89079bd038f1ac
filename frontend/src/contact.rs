use crate::config::{CONTACT_EMAIL, WHATSAPP_NUMBER};
use crate::i18n::Translations;
use crate::mailto::mailto_url;

pub fn whatsapp_url(message: &str) -> String {
    format!(
        "https://api.whatsapp.com/send?phone={}&text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

/// "I want to invest" quick email, localized.
pub fn investment_interest_mailto(t: &Translations) -> String {
    mailto_url(CONTACT_EMAIL, t.investment_email_subject, t.investment_email_body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn whatsapp_link_carries_number_and_encoded_text() {
        let url = whatsapp_url("Olá! Quero investir.");
        assert_eq!(
            url,
            "https://api.whatsapp.com/send?phone=5531999940277&text=Ol%C3%A1%21%20Quero%20investir."
        );
    }

    #[test]
    fn interest_mail_follows_the_language() {
        let pt = investment_interest_mailto(Language::PtBr.translations());
        let en = investment_interest_mailto(Language::En.translations());
        assert!(pt.starts_with("mailto:contato@pelerara.com.br?subject=Interesse"));
        assert!(en.starts_with("mailto:contato@pelerara.com.br?subject=Investment"));
        assert!(en.contains("Name%3A%0APhone%3A"));
    }
}
