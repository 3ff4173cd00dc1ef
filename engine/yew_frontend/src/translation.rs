// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use core_protocol::id::LanguageId;
use std::str::FromStr;
use yew::functional::{hook, use_context};

/// Falls back to English if no language was provided.
#[hook]
pub fn use_translation() -> Box<dyn Translation> {
    let language_id = use_context::<LanguageId>().unwrap_or_default();
    translation_for(language_id)
}

pub fn translation_for(language_id: LanguageId) -> Box<dyn Translation> {
    // Doesn't allocate, since translations are zero-sized types.
    match language_id {
        LanguageId::English => Box::new(English),
        LanguageId::Spanish => Box::new(Spanish),
        LanguageId::French => Box::new(French),
    }
}

/// Declare static translations.
macro_rules! s {
    ($name: ident) => {
        fn $name(&self) -> &'static str;
    };
    ($name: ident, $value: literal) => {
        fn $name(&self) -> &'static str {
            $value
        }
    };
}

/// Message templates may contain `{{$1}}...{{/$1}}` tags, see [`crate::format_message`].
pub trait Translation {
    // The name of the language.
    s!(label);

    // Privacy notice.
    s!(privacy_title, "Leo and your privacy");
    s!(
        about_description,
        "Leo is an AI-powered smart assistant, built right into the browser. {{$1}}Learn more about Leo{{/$1}}."
    );
    s!(
        about_description_2,
        "Leo does not collect identifiers such as your IP address that can be linked to you. No personal data is retained by the AI model or any third-party model providers."
    );
    s!(
        about_description_3,
        "Conversations are not persisted beyond the current session and are not used for model training."
    );
    s!(accept_button_label, "I understand");
}

pub struct English;

impl Translation for English {
    s!(label, "English");

    // Defaults are already in English.
}

pub struct Spanish;

impl Translation for Spanish {
    s!(label, "Español");
    s!(privacy_title, "Leo y tu privacidad");
    s!(
        about_description,
        "Leo es un asistente inteligente con IA, integrado directamente en el navegador. {{$1}}Más información sobre Leo{{/$1}}."
    );
    s!(
        about_description_2,
        "Leo no recopila identificadores que puedan vincularse contigo, como tu dirección IP. Ni el modelo de IA ni los proveedores de modelos externos conservan datos personales."
    );
    s!(
        about_description_3,
        "Las conversaciones no se conservan después de la sesión actual y no se usan para entrenar modelos."
    );
    s!(accept_button_label, "Entendido");
}

pub struct French;

impl Translation for French {
    s!(label, "Français");
    s!(privacy_title, "Leo et votre vie privée");
    s!(
        about_description,
        "Leo est un assistant intelligent basé sur l'IA, intégré directement au navigateur. {{$1}}En savoir plus sur Leo{{/$1}}."
    );
    s!(
        about_description_2,
        "Leo ne collecte aucun identifiant pouvant être associé à vous, comme votre adresse IP. Aucune donnée personnelle n'est conservée par le modèle d'IA ni par des fournisseurs de modèles tiers."
    );
    s!(
        about_description_3,
        "Les conversations ne sont pas conservées au-delà de la session en cours et ne servent pas à entraîner des modèles."
    );
    s!(accept_button_label, "J'ai compris");
}

/// Keys of localized strings, spelled the way the message catalog spells them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LocaleKey {
    AboutDescription,
    AboutDescription2,
    AboutDescription3,
    PrivacyTitle,
    AcceptButtonLabel,
}

impl LocaleKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AboutDescription => "aboutDescription",
            Self::AboutDescription2 => "aboutDescription_2",
            Self::AboutDescription3 => "aboutDescription_3",
            Self::PrivacyTitle => "privacyTitle",
            Self::AcceptButtonLabel => "acceptButtonLabel",
        }
    }
}

impl FromStr for LocaleKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "aboutDescription" => Self::AboutDescription,
            "aboutDescription_2" => Self::AboutDescription2,
            "aboutDescription_3" => Self::AboutDescription3,
            "privacyTitle" => Self::PrivacyTitle,
            "acceptButtonLabel" => Self::AcceptButtonLabel,
            _ => return Err(()),
        })
    }
}

/// Looks up a localized string by key.
pub fn get_locale(t: &dyn Translation, key: LocaleKey) -> &'static str {
    match key {
        LocaleKey::AboutDescription => t.about_description(),
        LocaleKey::AboutDescription2 => t.about_description_2(),
        LocaleKey::AboutDescription3 => t.about_description_3(),
        LocaleKey::PrivacyTitle => t.privacy_title(),
        LocaleKey::AcceptButtonLabel => t.accept_button_label(),
    }
}

#[cfg(test)]
mod tests {
    use crate::format_message::parse;
    use crate::translation::{get_locale, translation_for, LocaleKey};
    use core_protocol::id::LanguageId;

    const KEYS: [LocaleKey; 5] = [
        LocaleKey::AboutDescription,
        LocaleKey::AboutDescription2,
        LocaleKey::AboutDescription3,
        LocaleKey::PrivacyTitle,
        LocaleKey::AcceptButtonLabel,
    ];

    const LANGUAGES: [LanguageId; 3] = [
        LanguageId::English,
        LanguageId::Spanish,
        LanguageId::French,
    ];

    #[test]
    fn key_names() {
        for key in KEYS {
            assert_eq!(key.as_str().parse::<LocaleKey>(), Ok(key));
        }
        assert_eq!("aboutDescription_4".parse::<LocaleKey>(), Err(()));
    }

    #[test]
    fn get_locale_by_key() {
        let t = translation_for(LanguageId::English);
        assert_eq!(
            get_locale(&*t, LocaleKey::PrivacyTitle),
            "Leo and your privacy"
        );
        assert_eq!(
            get_locale(&*t, LocaleKey::AcceptButtonLabel),
            "I understand"
        );
        assert_eq!(
            get_locale(&*t, "aboutDescription_3".parse().unwrap()),
            t.about_description_3()
        );
    }

    #[test]
    fn every_language_is_complete() {
        for language_id in LANGUAGES {
            let t = translation_for(language_id);
            for key in KEYS {
                assert!(!get_locale(&*t, key).is_empty(), "{language_id:?} {key:?}");
            }
            // Each about description must keep exactly its one link.
            let segments = parse(t.about_description()).unwrap();
            assert_eq!(segments.iter().filter(|s| s.is_tag("$1")).count(), 1);
        }
    }

    #[test]
    fn translations_differ() {
        let english = translation_for(LanguageId::English);
        let spanish = translation_for(LanguageId::Spanish);
        assert_ne!(english.privacy_title(), spanish.privacy_title());
        assert_eq!(spanish.label(), "Español");
    }
}
