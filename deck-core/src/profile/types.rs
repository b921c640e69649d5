use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identity of a generated profile, e.g. `p_3_lz4k9x1c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(String);

impl ProfileId {
    /// Build an id from the profile's position in its batch and the batch tag.
    pub fn new(index: usize, batch: u64) -> Self {
        Self(format!("p_{}_{}", index, to_base36(batch)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One synthetic person card. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub age: u8,
    pub city: String,
    pub title: String,
    pub bio: String,
    /// Deduplicated, first-appearance order.
    pub tags: Vec<String>,
    /// Ordered image URLs; the first is the card photo.
    pub images: Vec<String>,
}

impl Profile {
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// `"{title} • {city}"`, shown under the name on the card.
    pub fn summary(&self) -> String {
        format!("{} \u{2022} {}", self.title, self.city)
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_id_format() {
        assert_eq!(ProfileId::new(0, 0).as_str(), "p_0_0");
        assert_eq!(ProfileId::new(3, 35).as_str(), "p_3_z");
        assert_eq!(ProfileId::new(11, 36).as_str(), "p_11_10");
    }

    #[test]
    fn test_summary_joins_title_and_city() {
        let profile = Profile {
            id: ProfileId::new(0, 1),
            name: "Alex".to_string(),
            age: 27,
            city: "Brooklyn".to_string(),
            title: "Chef".to_string(),
            bio: String::new(),
            tags: vec![],
            images: vec![],
        };
        assert_eq!(profile.summary(), "Chef \u{2022} Brooklyn");
        assert_eq!(profile.primary_image(), None);
    }
}
