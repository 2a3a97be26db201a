//! Simulated metric and headline generation.
//!
//! Ratings, review counts and headlines are synthetic. The generator only
//! guarantees that they are bounded and that headlines come from the fixed
//! [`HEADLINE_TEMPLATES`] catalog.

use std::sync::Arc;

use crate::domain::entities::{REVIEWS_MAX, REVIEWS_MIN, Rating, Snapshot};
use crate::utils::random::RandomSource;

/// Headline catalog. `{name}` and `{location}` are substituted on render.
pub const HEADLINE_TEMPLATES: [&str; 10] = [
    "Why {name} is {location}'s Sweetest Spot in 2025",
    "Discover {name}: {location}'s Hidden Gem in 2025",
    "{name} - The Best in {location} According to Customers",
    "2025's Must-Visit: {name} in {location}",
    "Top Rated: Why {name} Dominates {location}",
    "Experience Excellence: {name} - {location}'s Favorite",
    "{name} - Redefining Quality in {location} for 2025",
    "The Ultimate Guide to {name} in {location}",
    "Customer Choice: {name} Named Best in {location}",
    "{name}: {location}'s Premier Destination This Year",
];

const NAME_PLACEHOLDER: &str = "{name}";
const LOCATION_PLACEHOLDER: &str = "{location}";

/// Renders a template in a single pass.
///
/// Placeholders that appear inside substituted values are left as-is.
fn render(template: &str, name: &str, location: &str) -> String {
    let mut out = String::with_capacity(template.len() + name.len() + location.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(after) = tail.strip_prefix(NAME_PLACEHOLDER) {
            out.push_str(name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(LOCATION_PLACEHOLDER) {
            out.push_str(location);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

/// Every headline the catalog can produce for a business.
pub fn catalog_headlines(name: &str, location: &str) -> Vec<String> {
    HEADLINE_TEMPLATES
        .iter()
        .map(|template| render(template, name, location))
        .collect()
}

/// Produces ratings, review counts and headlines from a [`RandomSource`].
#[derive(Clone)]
pub struct SnapshotGenerator {
    random: Arc<dyn RandomSource>,
}

impl SnapshotGenerator {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Generates a full snapshot for a new record.
    ///
    /// Draws three values, in order: rating, reviews, headline.
    pub fn generate_metrics(&self, name: &str, location: &str) -> Snapshot {
        let rating = self.next_rating();
        let reviews = self.next_reviews();
        let headline = self.generate_headline(name, location);

        Snapshot {
            rating,
            reviews,
            headline,
        }
    }

    /// Picks a headline uniformly from the catalog.
    ///
    /// The previous headline of a record is not excluded; repeats are possible.
    pub fn generate_headline(&self, name: &str, location: &str) -> String {
        let index = self.next_index(HEADLINE_TEMPLATES.len());
        render(HEADLINE_TEMPLATES[index], name, location)
    }

    /// `4 + u` rounded to one decimal.
    fn next_rating(&self) -> Rating {
        let unit = self.next_unit();
        let tenths = ((unit + 4.0) * 10.0).round() as i16;
        Rating::clamped(tenths)
    }

    /// `floor(u * 200) + 50`.
    fn next_reviews(&self) -> i32 {
        let span = f64::from(REVIEWS_MAX - REVIEWS_MIN + 1);
        let offset = (self.next_unit() * span).floor() as i32;
        (REVIEWS_MIN + offset).clamp(REVIEWS_MIN, REVIEWS_MAX)
    }

    fn next_index(&self, len: usize) -> usize {
        let index = (self.next_unit() * len as f64).floor() as usize;
        index.min(len - 1)
    }

    fn next_unit(&self) -> f64 {
        let unit = self.random.next_unit();
        if unit.is_finite() {
            unit.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::random::{SequenceRandom, ThreadRandom};

    fn generator(values: &[f64]) -> SnapshotGenerator {
        SnapshotGenerator::new(Arc::new(SequenceRandom::new(values.to_vec())))
    }

    #[test]
    fn test_catalog_has_at_least_ten_templates() {
        assert!(HEADLINE_TEMPLATES.len() >= 10);
        for template in HEADLINE_TEMPLATES {
            assert!(template.contains(NAME_PLACEHOLDER));
            assert!(template.contains(LOCATION_PLACEHOLDER));
        }
    }

    #[test]
    fn test_render_substitutes_both_placeholders() {
        let headline = render(HEADLINE_TEMPLATES[0], "Cake & Co", "Mumbai");
        assert_eq!(headline, "Why Cake & Co is Mumbai's Sweetest Spot in 2025");
    }

    #[test]
    fn test_render_does_not_expand_inside_values() {
        let headline = render("{name} in {location}", "{location}", "Pune");
        assert_eq!(headline, "{location} in Pune");
    }

    #[test]
    fn test_render_keeps_unknown_braces() {
        let headline = render("{brand} {name}", "Cafe", "Goa");
        assert_eq!(headline, "{brand} Cafe");
    }

    #[test]
    fn test_minimum_draws() {
        let snapshot = generator(&[0.0]).generate_metrics("Cake & Co", "Mumbai");

        assert_eq!(snapshot.rating, Rating::MIN);
        assert_eq!(snapshot.reviews, REVIEWS_MIN);
        assert_eq!(
            snapshot.headline,
            "Why Cake & Co is Mumbai's Sweetest Spot in 2025"
        );
    }

    #[test]
    fn test_maximum_draws() {
        let snapshot = generator(&[0.999_999]).generate_metrics("Cake & Co", "Mumbai");

        assert_eq!(snapshot.rating, Rating::MAX);
        assert_eq!(snapshot.reviews, REVIEWS_MAX);
        assert_eq!(
            snapshot.headline,
            "Cake & Co: Mumbai's Premier Destination This Year"
        );
    }

    #[test]
    fn test_draw_order_is_rating_reviews_headline() {
        let snapshot = generator(&[0.0, 0.999, 0.5]).generate_metrics("Bake", "Delhi");

        assert_eq!(snapshot.rating.to_string(), "4.0");
        assert_eq!(snapshot.reviews, 249);
        assert_eq!(
            snapshot.headline,
            "Experience Excellence: Bake - Delhi's Favorite"
        );
    }

    #[test]
    fn test_mid_range_draw() {
        let snapshot = generator(&[0.26]).generate_metrics("Bake", "Delhi");

        assert_eq!(snapshot.rating.to_string(), "4.3");
        assert_eq!(snapshot.reviews, 102);
        assert_eq!(
            snapshot.headline,
            "Bake - The Best in Delhi According to Customers"
        );
    }

    #[test]
    fn test_out_of_range_source_is_clamped() {
        let snapshot = generator(&[1.0]).generate_metrics("Bake", "Delhi");
        assert_eq!(snapshot.rating, Rating::MAX);
        assert_eq!(snapshot.reviews, REVIEWS_MAX);

        let snapshot = generator(&[-3.0]).generate_metrics("Bake", "Delhi");
        assert_eq!(snapshot.rating, Rating::MIN);
        assert_eq!(snapshot.reviews, REVIEWS_MIN);

        let snapshot = generator(&[f64::NAN]).generate_metrics("Bake", "Delhi");
        assert_eq!(snapshot.rating, Rating::MIN);
    }

    #[test]
    fn test_random_snapshots_stay_in_bounds() {
        let generator = SnapshotGenerator::new(Arc::new(ThreadRandom));
        let catalog = catalog_headlines("Cake & Co", "Mumbai");

        for _ in 0..1000 {
            let snapshot = generator.generate_metrics("Cake & Co", "Mumbai");

            assert!(snapshot.rating >= Rating::MIN && snapshot.rating <= Rating::MAX);
            assert!((REVIEWS_MIN..=REVIEWS_MAX).contains(&snapshot.reviews));
            assert!(catalog.contains(&snapshot.headline));

            let text = snapshot.rating.to_string();
            let (_, fraction) = text.split_once('.').unwrap();
            assert_eq!(fraction.len(), 1);
        }
    }

    #[test]
    fn test_generate_headline_uses_independent_draw() {
        let generator = generator(&[0.0, 0.75]);

        let first = generator.generate_headline("Bake", "Delhi");
        let second = generator.generate_headline("Bake", "Delhi");

        assert_eq!(first, "Why Bake is Delhi's Sweetest Spot in 2025");
        assert_eq!(second, "The Ultimate Guide to Bake in Delhi");
    }

    #[test]
    fn test_generate_headline_does_not_mutate_inputs() {
        let name = String::from("Bake");
        let location = String::from("Delhi");

        let _ = generator(&[0.3]).generate_headline(&name, &location);

        assert_eq!(name, "Bake");
        assert_eq!(location, "Delhi");
    }
}
