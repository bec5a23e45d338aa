use super::super::layout::{Block, PageLayout};
use neuralchat_core::zone::DerivationKind;
use neuralchat_core::{ContentRegistry, RowDirection, SectionName, SyncError, ZoneConfig};

/// Entrance reveals fire when the block's top reaches 85% of the viewport.
const REVEAL_START: &str = "top 85%";
const REVEAL_END: &str = "bottom top";
const SCRUB_SECONDS: f32 = 1.0;
/// The lower strip starts shifted left so both strips cover the width.
const BOTTOM_ROW_BASE_OFFSET: f32 = -100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ZoneKey {
    Stats,
    AlbumCube,
    Features,
    Solutions,
    TopRow,
    BottomRow,
    Gallery,
    Pricing,
    Testimonials,
    Contact,
    Footer,
}

impl ZoneKey {
    pub(crate) const ALL: [ZoneKey; 11] = [
        ZoneKey::Stats,
        ZoneKey::AlbumCube,
        ZoneKey::Features,
        ZoneKey::Solutions,
        ZoneKey::TopRow,
        ZoneKey::BottomRow,
        ZoneKey::Gallery,
        ZoneKey::Pricing,
        ZoneKey::Testimonials,
        ZoneKey::Contact,
        ZoneKey::Footer,
    ];

    pub(crate) fn block(self) -> Block {
        match self {
            ZoneKey::Stats => Block::Stats,
            ZoneKey::AlbumCube => Block::AlbumCube,
            ZoneKey::Features => Block::Features,
            ZoneKey::Solutions => Block::Solutions,
            ZoneKey::TopRow | ZoneKey::BottomRow => Block::ParallaxStrips,
            ZoneKey::Gallery => Block::Gallery,
            ZoneKey::Pricing => Block::Pricing,
            ZoneKey::Testimonials => Block::Testimonials,
            ZoneKey::Contact => Block::Contact,
            ZoneKey::Footer => Block::Footer,
        }
    }

    fn id(self) -> &'static str {
        match self {
            ZoneKey::Stats => "stats",
            ZoneKey::AlbumCube => "album-cube",
            ZoneKey::Features => "features",
            ZoneKey::Solutions => "solutions",
            ZoneKey::TopRow => "parallax-top-row",
            ZoneKey::BottomRow => "parallax-bottom-row",
            ZoneKey::Gallery => "gallery-track",
            ZoneKey::Pricing => "pricing",
            ZoneKey::Testimonials => "testimonials",
            ZoneKey::Contact => "contact",
            ZoneKey::Footer => "footer-title",
        }
    }

    /// Whether the zone's markers depend on the layout beyond its geometry.
    pub(crate) fn depends_on_travel(self) -> bool {
        self == ZoneKey::Gallery
    }
}

pub(crate) fn zone_config(
    key: ZoneKey,
    layout: &PageLayout,
    content: &ContentRegistry,
    reduced_motion: bool,
) -> Result<ZoneConfig, SyncError> {
    let scrub = if reduced_motion { 0.0 } else { SCRUB_SECONDS };
    let reveal = |section: SectionName| -> Result<ZoneConfig, SyncError> {
        Ok(ZoneConfig::new(key.id(), DerivationKind::Reveal)
            .with_markers(REVEAL_START, REVEAL_END)?
            .item_count(content.item_count(section).max(1)))
    };

    match key {
        ZoneKey::Stats => reveal(SectionName::Stats),
        ZoneKey::Features => reveal(SectionName::Features),
        ZoneKey::Solutions => reveal(SectionName::Solutions),
        ZoneKey::Pricing => reveal(SectionName::Pricing),
        ZoneKey::Testimonials => reveal(SectionName::Testimonials),
        ZoneKey::Contact => reveal(SectionName::Contact),
        ZoneKey::AlbumCube => Ok(ZoneConfig::new(key.id(), DerivationKind::AlbumRotation)
            .with_markers("top top", "+=300%")?
            .pinned(true)
            .scrub(scrub)
            .item_count(content.item_count(SectionName::AlbumCube))),
        ZoneKey::TopRow => Ok(ZoneConfig::new(
            key.id(),
            DerivationKind::ParallaxRow {
                direction: RowDirection::Left,
                base_offset: 0.0,
            },
        )
        .with_markers("top bottom", "bottom top")?
        .scrub(scrub)),
        ZoneKey::BottomRow => Ok(ZoneConfig::new(
            key.id(),
            DerivationKind::ParallaxRow {
                direction: RowDirection::Right,
                base_offset: BOTTOM_ROW_BASE_OFFSET,
            },
        )
        .with_markers("top bottom", "bottom top")?
        .scrub(scrub)),
        ZoneKey::Gallery => {
            let travel = layout.gallery_travel();
            Ok(
                ZoneConfig::new(key.id(), DerivationKind::HorizontalTrack { travel })
                    .with_markers("top top", &format!("+={travel}"))?
                    .pinned(true)
                    .scrub(scrub)
                    .item_count(content.item_count(SectionName::ParallaxGallery).max(1)),
            )
        }
        ZoneKey::Footer => Ok(ZoneConfig::new(key.id(), DerivationKind::TitleParallax)
            .with_markers("top bottom", "bottom top")?
            .scrub(scrub)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuralchat_core::marker::ScrollRange;

    fn fixtures() -> (PageLayout, ContentRegistry) {
        let content = ContentRegistry::builtin().expect("bundled content must parse");
        let layout = PageLayout::compute(1280.0, 800.0, content.item_count(SectionName::ParallaxGallery));
        (layout, content)
    }

    #[test]
    fn every_zone_has_a_valid_config() {
        let (layout, content) = fixtures();
        for key in ZoneKey::ALL {
            let config = zone_config(key, &layout, &content, false).expect("valid zone config");
            config.validate().expect("config passes validation");
        }
    }

    #[test]
    fn pinned_ranges_match_reserved_spacers() {
        let (layout, content) = fixtures();
        for key in [ZoneKey::AlbumCube, ZoneKey::Gallery] {
            let config = zone_config(key, &layout, &content, false).expect("valid zone config");
            let block = layout.block(key.block());
            let range = ScrollRange::resolve(&config.start, &config.end, &layout.geometry(key.block()));
            assert_eq!(range.start, block.top, "{key:?}");
            assert!((range.len() - block.spacer).abs() < 1e-3, "{key:?}");
        }
    }

    #[test]
    fn reduced_motion_disables_scrub() {
        let (layout, content) = fixtures();
        let config = zone_config(ZoneKey::TopRow, &layout, &content, true).expect("valid zone config");
        assert_eq!(config.scrub, 0.0);
        let config = zone_config(ZoneKey::TopRow, &layout, &content, false).expect("valid zone config");
        assert_eq!(config.scrub, 1.0);
    }
}
