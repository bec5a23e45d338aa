//! Read-only site content, compiled into the binary.

use crate::error::SyncError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const SITE_TOML: &str = include_str!("content/site.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionName {
    Site,
    Hero,
    Stats,
    AlbumCube,
    Features,
    Solutions,
    ParallaxGallery,
    Pricing,
    Testimonials,
    Contact,
    Footer,
}

impl SectionName {
    pub const ALL: [SectionName; 11] = [
        SectionName::Site,
        SectionName::Hero,
        SectionName::Stats,
        SectionName::AlbumCube,
        SectionName::Features,
        SectionName::Solutions,
        SectionName::ParallaxGallery,
        SectionName::Pricing,
        SectionName::Testimonials,
        SectionName::Contact,
        SectionName::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionName::Site => "site",
            SectionName::Hero => "hero",
            SectionName::Stats => "stats",
            SectionName::AlbumCube => "album-cube",
            SectionName::Features => "features",
            SectionName::Solutions => "solutions",
            SectionName::ParallaxGallery => "parallax-gallery",
            SectionName::Pricing => "pricing",
            SectionName::Testimonials => "testimonials",
            SectionName::Contact => "contact",
            SectionName::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionName {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionName::ALL
            .into_iter()
            .find(|name| name.as_str() == s.trim())
            .ok_or_else(|| SyncError::config(format!("unknown section {s:?}")))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub title: String,
    pub description: String,
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub section: SectionName,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeroContent {
    pub background_image: String,
    pub brand_name: String,
    pub decode_text: String,
    pub decode_chars: String,
    pub subtitle: String,
    pub cta_primary: String,
    pub cta_primary_target: SectionName,
    pub cta_secondary: String,
    pub cta_secondary_target: SectionName,
    pub corner_label: String,
    pub corner_detail: String,
    pub nav_items: Vec<NavItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsContent {
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumCubeContent {
    pub scroll_hint: String,
    /// Right, left, top, bottom, front, back.
    pub cube_textures: Vec<String>,
    pub albums: Vec<Album>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturesContent {
    pub section_label: String,
    pub section_title: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Solution {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub metrics: String,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolutionsContent {
    pub section_label: String,
    pub section_title: String,
    pub solutions: Vec<Solution>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageRef {
    pub id: u32,
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryImage {
    pub id: u32,
    pub src: String,
    pub title: String,
    pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParallaxGalleryContent {
    pub section_label: String,
    pub section_title: String,
    pub gallery_label: String,
    pub gallery_title: String,
    pub marquee_texts: Vec<String>,
    pub end_cta_text: String,
    pub end_cta_target: SectionName,
    pub parallax_images_top: Vec<ImageRef>,
    pub parallax_images_bottom: Vec<ImageRef>,
    pub gallery_images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Popular,
    Enterprise,
    Custom,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusLabels {
    pub popular: String,
    pub enterprise: String,
    pub custom: String,
}

impl StatusLabels {
    pub fn label(&self, status: PlanStatus) -> &str {
        match status {
            PlanStatus::Popular => &self.popular,
            PlanStatus::Enterprise => &self.enterprise,
            PlanStatus::Custom => &self.custom,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta: String,
    #[serde(default)]
    pub payment_url: Option<String>,
    #[serde(default)]
    pub status: Option<PlanStatus>,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingContent {
    pub section_label: String,
    pub section_title: String,
    pub bottom_note: String,
    pub bottom_cta_text: String,
    pub bottom_cta_target: SectionName,
    pub status_labels: StatusLabels,
    pub plans: Vec<Plan>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialsContent {
    pub section_label: String,
    pub section_title: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactContent {
    pub section_label: String,
    pub section_title: String,
    pub intro: String,
    pub side_title: String,
    pub side_text: String,
    pub submit_label: String,
    pub sending_label: String,
    pub success_message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FooterImage {
    pub id: u32,
    pub src: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FooterContent {
    pub portrait_image: String,
    pub portrait_alt: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub artist_label: String,
    pub artist_name: String,
    pub artist_subtitle: String,
    pub brand_name: String,
    pub brand_description: String,
    pub quick_links_title: String,
    pub quick_links: Vec<String>,
    pub contact_title: String,
    pub email_label: String,
    pub email: String,
    pub phone_label: String,
    pub phone: String,
    pub address_label: String,
    pub address: String,
    pub newsletter_title: String,
    pub newsletter_description: String,
    pub newsletter_button_text: String,
    pub subscribe_alert_message: String,
    pub copyright_text: String,
    pub bottom_links: Vec<String>,
    pub social_links: Vec<SocialLink>,
    pub gallery_images: Vec<FooterImage>,
}

/// All section content. Nothing mutates it after `builtin`/`parse`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ContentRegistry {
    site: SiteContent,
    hero: HeroContent,
    stats: StatsContent,
    album_cube: AlbumCubeContent,
    features: FeaturesContent,
    solutions: SolutionsContent,
    parallax_gallery: ParallaxGalleryContent,
    pricing: PricingContent,
    testimonials: TestimonialsContent,
    contact: ContactContent,
    footer: FooterContent,
}

impl ContentRegistry {
    /// The content shipped with the binary.
    pub fn builtin() -> Result<Self, SyncError> {
        Self::parse(SITE_TOML)
    }

    pub fn parse(contents: &str) -> Result<Self, SyncError> {
        let registry: ContentRegistry = toml::from_str(contents)
            .map_err(|err| SyncError::config(format!("invalid site content: {err}")))?;
        registry.check()?;
        debug!(
            albums = registry.album_cube.albums.len(),
            plans = registry.pricing.plans.len(),
            testimonials = registry.testimonials.testimonials.len(),
            "Loaded site content"
        );
        Ok(registry)
    }

    fn check(&self) -> Result<(), SyncError> {
        if self.album_cube.cube_textures.len() != 6 {
            return Err(SyncError::config(format!(
                "album cube needs 6 face textures, found {}",
                self.album_cube.cube_textures.len()
            )));
        }
        if self.hero.decode_text.is_empty() {
            return Err(SyncError::config("hero decode text is empty"));
        }
        Ok(())
    }

    pub fn site(&self) -> &SiteContent {
        &self.site
    }

    pub fn hero(&self) -> &HeroContent {
        &self.hero
    }

    pub fn stats(&self) -> &StatsContent {
        &self.stats
    }

    pub fn album_cube(&self) -> &AlbumCubeContent {
        &self.album_cube
    }

    pub fn features(&self) -> &FeaturesContent {
        &self.features
    }

    pub fn solutions(&self) -> &SolutionsContent {
        &self.solutions
    }

    pub fn parallax_gallery(&self) -> &ParallaxGalleryContent {
        &self.parallax_gallery
    }

    pub fn pricing(&self) -> &PricingContent {
        &self.pricing
    }

    pub fn testimonials(&self) -> &TestimonialsContent {
        &self.testimonials
    }

    pub fn contact(&self) -> &ContactContent {
        &self.contact
    }

    pub fn footer(&self) -> &FooterContent {
        &self.footer
    }

    /// Number of discrete items a section's zone steps through.
    pub fn item_count(&self, section: SectionName) -> usize {
        match section {
            SectionName::Site | SectionName::Hero | SectionName::Contact => 1,
            SectionName::Stats => self.stats.stats.len(),
            SectionName::AlbumCube => self.album_cube.albums.len(),
            SectionName::Features => self.features.features.len(),
            SectionName::Solutions => self.solutions.solutions.len(),
            SectionName::ParallaxGallery => self.parallax_gallery.gallery_images.len(),
            SectionName::Pricing => self.pricing.plans.len(),
            SectionName::Testimonials => self.testimonials.testimonials.len(),
            SectionName::Footer => self.footer.gallery_images.len(),
        }
    }
}
