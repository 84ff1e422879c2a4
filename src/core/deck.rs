//! # Content Store
//!
//! The ordered, immutable sequence of pages shown by Folio. Data is compiled
//! in: there is no loading state and nothing mutates a deck after it is built.
//!
//! Index 0 is always the cover. The cover ignores the text and image fields of
//! its `Page` record and renders `CoverContent` instead.

use std::collections::HashSet;
use std::fmt;

/// A single folio. Cheap to copy, borrowed everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Stable identity key (drives enter/exit identity, never the index).
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub content: &'static str,
    pub image: &'static str,
}

impl Page {
    /// A cover record: everything but the id is empty.
    pub const fn cover(id: &'static str) -> Self {
        Self {
            id,
            title: "",
            subtitle: "",
            content: "",
            image: "",
        }
    }
}

/// What the cover template draws in place of the page fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverContent {
    pub logo_url: &'static str,
    /// Seed for the placeholder used when the logo cannot be fetched.
    pub logo_placeholder_seed: &'static str,
    pub headline: &'static str,
    pub subheading: &'static str,
    pub tagline: &'static str,
}

/// One image the media layer should resolve, keyed by page id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub key: String,
    pub url: String,
    pub placeholder_url: String,
}

/// Pixel size requested for content page placeholders.
pub const PAGE_PLACEHOLDER_SIZE: (u32, u32) = (1200, 800);
/// Pixel size requested for the cover logo placeholder.
pub const LOGO_PLACEHOLDER_SIZE: (u32, u32) = (200, 200);

/// Builds the deterministic placeholder URL for an image seed.
///
/// ```text
/// placeholder_url("https://picsum.photos/seed", "intro", 1200, 800)
///   → "https://picsum.photos/seed/intro/1200/800"
/// ```
pub fn placeholder_url(base: &str, seed: &str, width: u32, height: u32) -> String {
    format!("{}/{}/{}/{}", base.trim_end_matches('/'), seed, width, height)
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeckError {
    /// A deck needs at least the cover.
    Empty,
    /// Two pages share an id, which would break transition identity.
    DuplicateId(String),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Empty => write!(f, "deck has no pages"),
            DeckError::DuplicateId(id) => write!(f, "duplicate page id: {id}"),
        }
    }
}

impl std::error::Error for DeckError {}

#[derive(Debug, Clone)]
pub struct Deck {
    pages: Vec<Page>,
    cover: CoverContent,
}

impl Deck {
    /// Builds a deck, checking that it is non-empty and that ids are unique.
    pub fn new(pages: Vec<Page>, cover: CoverContent) -> Result<Self, DeckError> {
        if pages.is_empty() {
            return Err(DeckError::Empty);
        }
        let mut seen = HashSet::new();
        for page in &pages {
            if !seen.insert(page.id) {
                return Err(DeckError::DuplicateId(page.id.to_string()));
            }
        }
        Ok(Self { pages, cover })
    }

    /// The compiled-in institution deck.
    pub fn builtin() -> Self {
        Self {
            pages: BUILTIN_PAGES.to_vec(),
            cover: BUILTIN_COVER,
        }
    }

    /// Returns the page at `index`. Panics when `index >= len()`; callers go
    /// through the navigator, which never leaves the bounds.
    pub fn page_at(&self, index: usize) -> &Page {
        &self.pages[index]
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false for a constructed deck; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn is_cover(&self, index: usize) -> bool {
        index == 0
    }

    pub fn cover(&self) -> &CoverContent {
        &self.cover
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Resolves an identity key back to its current position.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|page| page.id == id)
    }

    /// Lists every image the deck needs: the cover logo (keyed by the cover's
    /// id) and the image of each content page.
    pub fn image_requests(&self, placeholder_base: &str) -> Vec<ImageRequest> {
        let mut requests = Vec::with_capacity(self.pages.len());

        let (logo_w, logo_h) = LOGO_PLACEHOLDER_SIZE;
        requests.push(ImageRequest {
            key: self.pages[0].id.to_string(),
            url: self.cover.logo_url.to_string(),
            placeholder_url: placeholder_url(
                placeholder_base,
                self.cover.logo_placeholder_seed,
                logo_w,
                logo_h,
            ),
        });

        let (page_w, page_h) = PAGE_PLACEHOLDER_SIZE;
        for page in self.pages.iter().skip(1) {
            requests.push(ImageRequest {
                key: page.id.to_string(),
                url: page.image.to_string(),
                placeholder_url: placeholder_url(placeholder_base, page.id, page_w, page_h),
            });
        }

        requests
    }
}

// ============================================================================
// Built-in content
// ============================================================================

const INSTITUTION: &str = "Sai Vidya Institute of Technology";

pub const BUILTIN_COVER: CoverContent = CoverContent {
    logo_url: "https://saividya.ac.in/images/logo.png",
    logo_placeholder_seed: "svitlogo",
    headline: "SAI VIDYA",
    subheading: "INSTITUTE OF TECHNOLOGY",
    tagline: "Learn to lead",
};

pub const BUILTIN_PAGES: [Page; 8] = [
    Page::cover("cover"),
    Page {
        id: "intro",
        title: INSTITUTION,
        subtitle: "Institution Overview",
        content: "Established in 2008 in Rajanukunte, Bengaluru, SVIT is a NAAC Grade A accredited institution. Founded by the Sri Sai Vidya Vikas Shikshana Samithi, our 12-acre campus is a hub for \"Learning to Lead\" in the heart of Karnataka.",
        image: "https://picsum.photos/seed/svit-overview/1200/800",
    },
    Page {
        id: "vision",
        title: INSTITUTION,
        subtitle: "Vision & Mission",
        content: "Our vision is to contribute dedicated, skilled, and intelligent engineers to architect a strong India. We provide quality skill-based training and promote research, innovation, and ethical practices in a supportive environment.",
        image: "https://picsum.photos/seed/svit-vision/1200/800",
    },
    Page {
        id: "leadership",
        title: INSTITUTION,
        subtitle: "Visionary Leadership",
        content: "Led by Founder Prof. M. R. Holla, a distinguished academician with 50+ years of experience, and Principal Dr. HS Ramesh Babu, our leadership team ensures academic excellence and administrative integrity at every level.",
        image: "https://picsum.photos/seed/svit-leader/1200/800",
    },
    Page {
        id: "academics",
        title: INSTITUTION,
        subtitle: "Engineering Programs",
        content: "We offer specialized B.E. programs in CSE (AI & ML, Data Science), Information Science, Electronics & Communication, Civil, and Mechanical Engineering, all affiliated with VTU and approved by AICTE.",
        image: "https://picsum.photos/seed/svit-engineers/1200/800",
    },
    Page {
        id: "infrastructure",
        title: INSTITUTION,
        subtitle: "Campus Infrastructure",
        content: "Our modern infrastructure includes advanced laboratories, a Makers Space Lab for prototyping, state-of-the-art computer centers, and extensive library resources designed for the engineers of tomorrow.",
        image: "https://picsum.photos/seed/svit-infra/1200/800",
    },
    Page {
        id: "placements",
        title: INSTITUTION,
        subtitle: "Placement & Support",
        content: "With a philosophy that \"to reap the benefits tomorrow, we must sow the seeds today,\" we provide 100% placement assistance and rigorous training in aptitude, soft skills, and technical knowledge.",
        image: "https://picsum.photos/seed/svit-jobs/1200/800",
    },
    Page {
        id: "conclusion",
        title: INSTITUTION,
        subtitle: "Join the Legacy",
        content: "Empowering engineers of tomorrow with industry-driven curriculum and top placements. Join Sai Vidya Institute of Technology and start your journey toward professional excellence and social responsibility.",
        image: "https://picsum.photos/seed/svit-join/1200/800",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_deck_shape() {
        let deck = Deck::builtin();
        assert_eq!(deck.len(), 8);
        assert!(deck.is_cover(0));
        assert!(!deck.is_cover(1));
        assert_eq!(deck.page_at(0).id, "cover");
        assert_eq!(deck.page_at(7).subtitle, "Join the Legacy");
    }

    #[test]
    fn test_builtin_deck_passes_validation() {
        let deck = Deck::new(BUILTIN_PAGES.to_vec(), BUILTIN_COVER).unwrap();
        assert_eq!(deck.len(), BUILTIN_PAGES.len());
    }

    #[test]
    fn test_cover_record_is_blank() {
        let cover = Deck::builtin().page_at(0).to_owned();
        assert!(cover.title.is_empty());
        assert!(cover.subtitle.is_empty());
        assert!(cover.content.is_empty());
        assert!(cover.image.is_empty());
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert_eq!(Deck::new(vec![], BUILTIN_COVER).unwrap_err(), DeckError::Empty);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let pages = vec![Page::cover("cover"), Page::cover("a"), Page::cover("a")];
        assert_eq!(
            Deck::new(pages, BUILTIN_COVER).unwrap_err(),
            DeckError::DuplicateId("a".to_string())
        );
    }

    #[test]
    #[should_panic]
    fn test_page_at_out_of_range_panics() {
        let deck = Deck::builtin();
        let _ = deck.page_at(deck.len());
    }

    #[test]
    fn test_position_of_resolves_ids() {
        let deck = Deck::builtin();
        assert_eq!(deck.position_of("cover"), Some(0));
        assert_eq!(deck.position_of("vision"), Some(2));
        assert_eq!(deck.position_of("missing"), None);
    }

    #[test]
    fn test_placeholder_url_is_deterministic() {
        assert_eq!(
            placeholder_url("https://picsum.photos/seed/", "intro", 1200, 800),
            "https://picsum.photos/seed/intro/1200/800"
        );
        assert_eq!(
            placeholder_url("http://x", "intro", 1, 2),
            placeholder_url("http://x", "intro", 1, 2)
        );
    }

    #[test]
    fn test_image_requests_cover_logo_and_pages() {
        let deck = Deck::builtin();
        let requests = deck.image_requests("http://ph");
        assert_eq!(requests.len(), deck.len());

        assert_eq!(requests[0].key, "cover");
        assert_eq!(requests[0].url, BUILTIN_COVER.logo_url);
        assert_eq!(requests[0].placeholder_url, "http://ph/svitlogo/200/200");

        assert_eq!(requests[1].key, "intro");
        assert_eq!(requests[1].url, "https://picsum.photos/seed/svit-overview/1200/800");
        assert_eq!(requests[1].placeholder_url, "http://ph/intro/1200/800");
    }
}
