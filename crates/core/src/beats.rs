//! Beat catalogs and sequencing across a run of scenes.
//!
//! Animals uses its own observational catalog; every other category shares
//! the generic catalog. Requests longer than a catalog cycle through it
//! again, so beat text repeats while camera move and seed keep varying.

use serde::Serialize;

use crate::category::Category;

/// A short scripted narrative unit for one scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Beat {
    pub title: &'static str,
    pub description: &'static str,
}

const fn beat(title: &'static str, description: &'static str) -> Beat {
    Beat { title, description }
}

/// Observational beats for wildlife content.
pub const ANIMAL_BEATS: [Beat; 8] = [
    beat("Habitat Reveal", "Wide establishing view of the habitat before the subject appears."),
    beat("First Sighting", "The animal enters frame, unaware of the camera, moving naturally."),
    beat("Close Study", "Detail on markings, eyes, and texture while the animal pauses."),
    beat("Foraging", "The animal searches for food, showing instinctive behavior."),
    beat(
        "Alert Moment",
        "Something in the environment catches its attention; ears and posture shift.",
    ),
    beat("Behavior Highlight", "The signature behavior of the species plays out in full."),
    beat("Rest", "The animal settles, grooms, or rests in a safe spot."),
    beat("Calm Exit", "The animal moves off into the habitat as the light changes."),
];

/// Generic story beats for every non-animal category.
pub const GENERIC_BEATS: [Beat; 10] = [
    beat("Hook", "An arresting opening image that poses a question the viewer wants answered."),
    beat("Setup", "Introduce the subject, the place, and what they are trying to do."),
    beat("Gather", "Collect the materials, tools, or information needed for the task."),
    beat("First Step", "Begin the work with confident, deliberate action."),
    beat("Complication", "A problem appears: weather, a broken tool, or an unexpected obstacle."),
    beat("Adapt", "Improvise a solution using what is at hand."),
    beat("Progress", "Visible progress; the result starts to take shape."),
    beat("Turning Point", "The decisive moment where success or failure is settled."),
    beat("Payoff", "The finished result shown clearly and satisfyingly."),
    beat("Closing Shot", "A reflective final image that lingers on the outcome."),
];

/// The ordered beat catalog used for a category.
pub fn beat_catalog(category: Category) -> &'static [Beat] {
    match category {
        Category::Animals => &ANIMAL_BEATS,
        _ => &GENERIC_BEATS,
    }
}

/// Build exactly `n` beats for a category, cycling the catalog as needed.
pub fn build_beats(n: usize, category: Category) -> Vec<Beat> {
    let catalog = beat_catalog(category);
    let repeat_count = n / catalog.len() + 1;
    catalog
        .iter()
        .copied()
        .cycle()
        .take(catalog.len() * repeat_count)
        .take(n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_catalog() {
        for category in Category::ALL {
            let catalog = beat_catalog(category);
            assert!(!catalog.is_empty());
            for beat in catalog {
                assert!(!beat.title.is_empty());
                assert!(!beat.description.is_empty());
            }
        }
    }

    #[test]
    fn animals_use_eight_beat_catalog() {
        assert_eq!(beat_catalog(Category::Animals).len(), 8);
        for category in Category::ALL.into_iter().filter(|c| *c != Category::Animals) {
            assert_eq!(beat_catalog(category).len(), 10, "{category:?}");
        }
    }

    #[test]
    fn single_beat_boundary() {
        let beats = build_beats(1, Category::Movie);
        assert_eq!(beats, vec![GENERIC_BEATS[0]]);
    }

    #[test]
    fn zero_beats_is_empty() {
        assert!(build_beats(0, Category::Diy).is_empty());
    }

    #[test]
    fn exact_catalog_length() {
        let beats = build_beats(10, Category::Diy);
        assert_eq!(beats, GENERIC_BEATS.to_vec());
    }

    #[test]
    fn cycles_past_catalog_end() {
        let beats = build_beats(12, Category::Diy);
        assert_eq!(beats.len(), 12);
        assert_eq!(&beats[..10], &GENERIC_BEATS[..]);
        assert_eq!(beats[10], GENERIC_BEATS[0]);
        assert_eq!(beats[11], GENERIC_BEATS[1]);
    }

    #[test]
    fn animal_catalog_cycles_at_eight() {
        let beats = build_beats(9, Category::Animals);
        assert_eq!(beats.len(), 9);
        assert_eq!(beats[8], ANIMAL_BEATS[0]);
    }

    #[test]
    fn long_runs_keep_exact_length() {
        assert_eq!(build_beats(35, Category::Survival).len(), 35);
    }
}
