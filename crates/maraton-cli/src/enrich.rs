//! Artist-record enrichment passes
//!
//! Two one-off maintenance transforms over the artist file: deriving the
//! artist image from a show link in the description, and rewriting the
//! captions of radio-show artists. Both are pure over the in-memory
//! records; the caller decides where the result is written.

use std::sync::OnceLock;

use maraton_core::{Artist, Performance};
use regex::Regex;
use tracing::info;

/// Stages whose artists are radio shows with a hosted page.
const RADIO_STAGES: [&str; 2] = ["bogracs", "tilos-caravan-studio"];

fn show_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https://tilos\.hu/show/(\w+)").expect("valid pattern"))
}

fn name_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" [&+] ").expect("valid pattern"))
}

/// Derive `image` from the first show link in each artist's description.
///
/// Show pages publish their cover under a predictable upload path, so the
/// URL is rewritten rather than fetched. Returns the number of records
/// updated.
pub fn backfill_images(artists: &mut [Artist]) -> usize {
    let mut updated = 0;
    for artist in artists.iter_mut() {
        let Some(description) = artist.description.as_deref() else {
            continue;
        };
        let Some(capture) = show_link().captures(description) else {
            continue;
        };
        let image = format!("https://tilos.hu/upload/episode-new/{}.jpg", &capture[1]);
        info!("Updated image for {}: {}", artist.name, image);
        artist.image = Some(image);
        updated += 1;
    }
    updated
}

/// Rewrite the descriptions of radio-show artists to the standard
/// caption, e.g. `A Worst of Tilos műsorkészítői.`
///
/// Only artists whose (first) performance is on a radio stage are
/// touched. Returns the number of records updated.
pub fn annotate_radio_shows(artists: &mut [Artist], performances: &[Performance]) -> usize {
    let mut updated = 0;
    for artist in artists.iter_mut() {
        let Some(performance) = performances.iter().find(|p| p.artist_id == artist.id) else {
            continue;
        };
        if !RADIO_STAGES.contains(&performance.stage_id.as_str()) {
            continue;
        }
        let caption = format!(
            "{} {} műsorkészítői.",
            definite_article(&artist.name),
            joined_names(&artist.name)
        );
        info!("Updated description for {}: {}", artist.name, caption);
        artist.description = Some(caption);
        updated += 1;
    }
    updated
}

/// Hungarian definite article for a name.
fn definite_article(name: &str) -> &'static str {
    const VOWELS: &str = "aeiouáéíóúőűüö";
    match name.chars().next().and_then(|c| c.to_lowercase().next()) {
        Some(c) if VOWELS.contains(c) => "Az",
        _ => "A",
    }
}

/// Collaborations listed as `X & Y` or `X + Y` read as `X és Y` in the
/// caption.
fn joined_names(name: &str) -> String {
    if name_separator().is_match(name) {
        name_separator()
            .split(name)
            .collect::<Vec<_>>()
            .join(" és ")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn artist(id: &str, name: &str, description: Option<&str>) -> Artist {
        Artist {
            id: id.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            image: None,
            extra: Default::default(),
        }
    }

    fn radio_slot(artist_id: &str, stage_id: &str) -> Performance {
        Performance {
            id: format!("06-06-{}", artist_id),
            artist_id: artist_id.to_string(),
            day_id: "day-1".to_string(),
            stage_id: stage_id.to_string(),
            start_time: chrono::DateTime::parse_from_rfc3339("2025-06-06T14:00:00+02:00")
                .unwrap(),
            end_time: chrono::DateTime::parse_from_rfc3339("2025-06-06T16:00:00+02:00").unwrap(),
            description: String::new(),
            extra: Default::default(),
        }
    }

    #[test]
    fn backfill_derives_the_upload_url() {
        let mut artists = vec![artist(
            "worst",
            "Worst of Tilos",
            Some("A Worst of Tilos műsorkészítői. - https://tilos.hu/show/worst"),
        )];
        assert_eq!(backfill_images(&mut artists), 1);
        assert_eq!(
            artists[0].image.as_deref(),
            Some("https://tilos.hu/upload/episode-new/worst.jpg")
        );
    }

    #[test]
    fn backfill_skips_artists_without_a_link() {
        let mut artists = vec![
            artist("a", "A", None),
            artist("b", "B", Some("No links here")),
        ];
        assert_eq!(backfill_images(&mut artists), 0);
        assert_eq!(artists[1].image, None);
    }

    #[test]
    fn annotate_rewrites_radio_show_captions() {
        let mut artists = vec![artist("worst", "Worst of Tilos", Some("old text"))];
        let performances = vec![radio_slot("worst", "bogracs")];
        assert_eq!(annotate_radio_shows(&mut artists, &performances), 1);
        assert_eq!(
            artists[0].description.as_deref(),
            Some("A Worst of Tilos műsorkészítői.")
        );
    }

    #[test]
    fn annotate_skips_non_radio_stages() {
        let mut artists = vec![artist("dj-a", "DJ A", Some("bio"))];
        let performances = vec![radio_slot("dj-a", "fo-szinpad")];
        assert_eq!(annotate_radio_shows(&mut artists, &performances), 0);
        assert_eq!(artists[0].description.as_deref(), Some("bio"));
    }

    #[test]
    fn article_uses_az_before_vowels() {
        assert_eq!(definite_article("Amorf Ördögök"), "Az");
        assert_eq!(definite_article("Éjszakai műszak"), "Az");
        assert_eq!(definite_article("Worst of Tilos"), "A");
    }

    #[test]
    fn collaborations_are_joined_with_es() {
        assert_eq!(joined_names("X & Y"), "X és Y");
        assert_eq!(joined_names("X + Y + Z"), "X és Y és Z");
        assert_eq!(joined_names("Solo Act"), "Solo Act");
    }
}
