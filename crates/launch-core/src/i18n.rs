use crate::config::DEFAULT_LOCALE;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Message {
    ClickToStart,
    AudioNotice,
}

pub struct I18n {
    locale: String,
}

impl I18n {
    pub fn new(locale: impl Into<String>) -> I18n {
        I18n {
            locale: locale.into(),
        }
    }

    pub fn to_string(&self, msg: Message) -> String {
        let lang = self.locale.split(['-', '_']).next().unwrap_or(DEFAULT_LOCALE);
        let text = match (lang.to_ascii_lowercase().as_str(), msg) {
            ("fr", Message::ClickToStart) => "Cliquer pour démarrer",
            ("fr", Message::AudioNotice) => {
                "Le navigateur exige une interaction pour activer le son."
            }
            ("de", Message::ClickToStart) => "Zum Starten klicken",
            ("de", Message::AudioNotice) => {
                "Der Browser erlaubt Ton erst nach einer Benutzeraktion."
            }
            ("es", Message::ClickToStart) => "Haz clic para empezar",
            ("es", Message::AudioNotice) => {
                "El navegador requiere una interacción para activar el audio."
            }
            (_, Message::ClickToStart) => "Click to start",
            (_, Message::AudioNotice) => "Audio requires a user interaction in the browser.",
        };
        text.to_string()
    }
}

impl Default for I18n {
    fn default() -> Self {
        I18n::new(DEFAULT_LOCALE)
    }
}
