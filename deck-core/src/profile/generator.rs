//! Synthetic profile generation from fixed vocabularies.

use rand::Rng;
use tracing::debug;

use super::types::{Profile, ProfileId};

pub const TAGS: &[&str] = &[
    "Coffee", "Hiking", "Movies", "Live Music", "Board Games", "Cats", "Dogs", "Traveler",
    "Foodie", "Tech", "Art", "Runner", "Climbing", "Books", "Yoga", "Photography",
];

pub const FIRST_NAMES: &[&str] = &[
    "Alex", "Sam", "Jordan", "Taylor", "Casey", "Avery", "Riley", "Morgan", "Quinn", "Cameron",
    "Jamie", "Drew", "Parker", "Reese", "Emerson", "Rowan", "Shawn", "Harper", "Skyler", "Devon",
];

pub const CITIES: &[&str] = &[
    "Brooklyn", "Manhattan", "Queens", "Jersey City", "Hoboken", "Astoria",
    "Williamsburg", "Bushwick", "Harlem", "Lower East Side",
];

pub const JOBS: &[&str] = &[
    "Product Designer", "Software Engineer", "Data Analyst", "Barista", "Teacher",
    "Photographer", "Architect", "Chef", "Nurse", "Marketing Manager", "UX Researcher",
];

pub const BIOS: &[&str] = &[
    "Weekend hikes and weekday lattes.",
    "Dog parent. Amateur chef. Karaoke enthusiast.",
    "Trying every taco in the city, for science.",
    "Bookstore browser and movie quote machine.",
    "Gym sometimes, Netflix always.",
    "Looking for the best slice in town.",
    "Will beat you at Mario Kart.",
    "Currently planning the next trip.",
];

pub const IMAGE_SEEDS: &[&str] = &[
    "1515462277126-2b47b9fa09e6",
    "1520975916090-3105956dac38",
    "1519340241574-2cec6aef0c01",
    "1554151228-14d9def656e4",
    "1548142813-c348350df52b",
    "1517841905240-472988babdf9",
    "1535713875002-d1d0cf377fde",
    "1545996124-0501ebae84d0",
    "1524504388940-b1c1722653e1",
    "1531123897727-8f129e1688ce",
];

/// Tag draws per profile, before deduplication.
const TAG_DRAWS: usize = 4;
const MIN_IMAGES: usize = 2;
const MAX_IMAGES: usize = 4;
const MIN_AGE: u8 = 18;
const MAX_AGE: u8 = 39;

fn sample<'a, R: Rng + ?Sized>(rng: &mut R, vocab: &[&'a str]) -> &'a str {
    vocab[rng.random_range(0..vocab.len())]
}

/// Draw `TAG_DRAWS` tags with replacement and drop repeats, keeping first-seen order.
fn pick_tags<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(TAG_DRAWS);
    for _ in 0..TAG_DRAWS {
        let tag = sample(rng, TAGS);
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

pub fn image_url(seed: &str) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?auto=format&fit=crop&w=1200&q=80",
        seed
    )
}

/// Generate `count` profiles. `batch` tags the ids so decks from different
/// resets never share an id; callers pass the generation time in ms.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, batch: u64) -> Vec<Profile> {
    let profiles: Vec<Profile> = (0..count)
        .map(|i| {
            let photo_count = rng.random_range(MIN_IMAGES..=MAX_IMAGES);
            let images = (0..photo_count)
                .map(|_| image_url(sample(rng, IMAGE_SEEDS)))
                .collect();

            Profile {
                id: ProfileId::new(i, batch),
                name: sample(rng, FIRST_NAMES).to_string(),
                age: rng.random_range(MIN_AGE..=MAX_AGE),
                city: sample(rng, CITIES).to_string(),
                title: sample(rng, JOBS).to_string(),
                bio: sample(rng, BIOS).to_string(),
                tags: pick_tags(rng),
                images,
            }
        })
        .collect();

    debug!("Generated {} profiles (batch {})", profiles.len(), batch);
    profiles
}
