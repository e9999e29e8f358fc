//! Configuration documents shaped like the deployed site's.

use serde_json::{Value, json};

/// Full home-page configuration: dictionaries, sections and media links.
#[must_use]
pub fn home_document() -> Value {
    json!({
        "pressKit": {
            "en": {
                "title": "Press Kit",
                "tagline": "Indie folk from the coast",
                "email": "Your email",
                "language": { "en": "English", "es": "Spanish" }
            },
            "es": {
                "title": "Kit de Prensa",
                "tagline": "Folk independiente desde la costa",
                "email": "Tu correo",
                "language": { "en": "Inglés", "es": "Español" }
            }
        },
        "gallery": {
            "en": { "onstage": "On Stage", "portrait": "Portrait" },
            "es": { "onstage": "En el escenario", "portrait": "Retrato" }
        },
        "videos": {
            "en": {
                "liveShows": { "acousticset": "Acoustic Set", "festival": "Festival", "rooftop": "Rooftop" },
                "musicVideos": { "firstsingle": "First Single" }
            },
            "es": {
                "liveShows": { "acousticset": "Set acústico", "festival": "Festival", "rooftop": "Azotea" },
                "musicVideos": { "firstsingle": "Primer sencillo" }
            }
        },
        "sections": [
            {
                "type": "gallery",
                "title": "Press Photos",
                "items": [
                    { "src": "img/onstage.jpg", "caption": "On Stage", "type": "image" },
                    { "src": "img/portrait.jpg", "caption": "Portrait", "type": "image" }
                ]
            },
            {
                "type": "videos",
                "title": "Live Shows",
                "items": [
                    { "id": "abc123", "title": "Acoustic Set" },
                    { "id": "def456", "title": "Festival" },
                    { "id": "ghi789", "title": "Rooftop" }
                ]
            },
            {
                "type": "videos",
                "title": "Music Videos",
                "items": [{ "id": "xyz001", "title": "First Single" }]
            }
        ],
        "mediaLinks": {
            "en": {
                "items": [
                    { "title": "Coastal Sounds interview", "url": "https://example.com/interview", "date": "March 2024" },
                    { "title": "Album review", "url": "https://example.com/review", "date": "January 2024" }
                ]
            },
            "es": {
                "items": [
                    { "title": "Entrevista en Radio Costa", "url": "https://example.com/entrevista", "date": "Abril 2024" }
                ]
            }
        }
    })
}

/// [`home_document`] as JSON text, the way it is served.
#[must_use]
pub fn home_json() -> String {
    home_document().to_string()
}

/// The smallest document with one gallery section.
#[must_use]
pub fn single_photo_json() -> String {
    json!({
        "sections": [{
            "type": "gallery",
            "title": "Press Photos",
            "items": [{ "src": "a.jpg", "caption": "One" }]
        }]
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use presskit_config::{Configuration, validate};

    #[test]
    fn home_fixture_is_consistent() -> Result<()> {
        let config = Configuration::from_value(home_document())?;
        assert_eq!(config.sections().len(), 3);
        assert!(validate(&config).is_empty());
        Ok(())
    }
}
