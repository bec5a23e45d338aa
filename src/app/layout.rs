//! Fixed page layout: every block has a known height, so the document offset
//! of each trigger element is computed instead of measured.

use neuralchat_core::{SectionName, ZoneGeometry};

pub(crate) const STATS_HEIGHT: f32 = 420.0;
pub(crate) const FEATURES_HEIGHT: f32 = 880.0;
pub(crate) const SOLUTIONS_HEIGHT: f32 = 760.0;
pub(crate) const STRIPS_HEIGHT: f32 = 560.0;
pub(crate) const PRICING_HEIGHT: f32 = 1180.0;
pub(crate) const TESTIMONIALS_HEIGHT: f32 = 620.0;
pub(crate) const CONTACT_HEIGHT: f32 = 860.0;
pub(crate) const FOOTER_HEIGHT: f32 = 980.0;
pub(crate) const GALLERY_CARD_WIDTH: f32 = 420.0;
pub(crate) const GALLERY_CARD_GAP: f32 = 24.0;
pub(crate) const GALLERY_TRACK_PADDING: f32 = 48.0;
/// Pinned scroll distance of the cube, in viewport heights.
pub(crate) const CUBE_PIN_VIEWPORTS: f32 = 3.0;
const MIN_VIEWPORT: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Block {
    Hero,
    Stats,
    AlbumCube,
    Features,
    Solutions,
    ParallaxStrips,
    Gallery,
    Pricing,
    Testimonials,
    Contact,
    Footer,
}

impl Block {
    pub(crate) const ORDER: [Block; 11] = [
        Block::Hero,
        Block::Stats,
        Block::AlbumCube,
        Block::Features,
        Block::Solutions,
        Block::ParallaxStrips,
        Block::Gallery,
        Block::Pricing,
        Block::Testimonials,
        Block::Contact,
        Block::Footer,
    ];

    pub(crate) fn section(self) -> SectionName {
        match self {
            Block::Hero => SectionName::Hero,
            Block::Stats => SectionName::Stats,
            Block::AlbumCube => SectionName::AlbumCube,
            Block::Features => SectionName::Features,
            Block::Solutions => SectionName::Solutions,
            Block::ParallaxStrips | Block::Gallery => SectionName::ParallaxGallery,
            Block::Pricing => SectionName::Pricing,
            Block::Testimonials => SectionName::Testimonials,
            Block::Contact => SectionName::Contact,
            Block::Footer => SectionName::Footer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BlockLayout {
    pub(crate) block: Block,
    pub(crate) top: f32,
    /// Height of the element itself; pinned blocks are one viewport tall.
    pub(crate) height: f32,
    /// Extra scroll distance reserved while the block is pinned.
    pub(crate) spacer: f32,
}

impl BlockLayout {
    pub(crate) fn total_height(&self) -> f32 {
        self.height + self.spacer
    }

    pub(crate) fn geometry(&self, viewport_height: f32) -> ZoneGeometry {
        ZoneGeometry {
            element_top: self.top,
            element_height: self.height,
            viewport_height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PageLayout {
    blocks: Vec<BlockLayout>,
    viewport_width: f32,
    viewport_height: f32,
    gallery_travel: f32,
}

pub(crate) fn gallery_track_width(cards: usize) -> f32 {
    if cards == 0 {
        return 0.0;
    }
    cards as f32 * GALLERY_CARD_WIDTH
        + (cards - 1) as f32 * GALLERY_CARD_GAP
        + 2.0 * GALLERY_TRACK_PADDING
}

impl PageLayout {
    pub(crate) fn compute(viewport_width: f32, viewport_height: f32, gallery_cards: usize) -> Self {
        let viewport_width = sane(viewport_width);
        let viewport_height = sane(viewport_height);
        let gallery_travel = (gallery_track_width(gallery_cards) - viewport_width).max(0.0);

        let mut top = 0.0;
        let blocks = Block::ORDER
            .into_iter()
            .map(|block| {
                let (height, spacer) = match block {
                    Block::Hero => (viewport_height, 0.0),
                    Block::Stats => (STATS_HEIGHT, 0.0),
                    Block::AlbumCube => (viewport_height, viewport_height * CUBE_PIN_VIEWPORTS),
                    Block::Features => (FEATURES_HEIGHT, 0.0),
                    Block::Solutions => (SOLUTIONS_HEIGHT, 0.0),
                    Block::ParallaxStrips => (STRIPS_HEIGHT, 0.0),
                    Block::Gallery => (viewport_height, gallery_travel),
                    Block::Pricing => (PRICING_HEIGHT, 0.0),
                    Block::Testimonials => (TESTIMONIALS_HEIGHT, 0.0),
                    Block::Contact => (CONTACT_HEIGHT, 0.0),
                    Block::Footer => (FOOTER_HEIGHT, 0.0),
                };
                let layout = BlockLayout {
                    block,
                    top,
                    height,
                    spacer,
                };
                top += layout.total_height();
                layout
            })
            .collect();

        PageLayout {
            blocks,
            viewport_width,
            viewport_height,
            gallery_travel,
        }
    }

    pub(crate) fn blocks(&self) -> &[BlockLayout] {
        &self.blocks
    }

    pub(crate) fn block(&self, block: Block) -> BlockLayout {
        self.blocks
            .iter()
            .copied()
            .find(|layout| layout.block == block)
            .unwrap_or(BlockLayout {
                block,
                top: 0.0,
                height: 0.0,
                spacer: 0.0,
            })
    }

    pub(crate) fn geometry(&self, block: Block) -> ZoneGeometry {
        self.block(block).geometry(self.viewport_height)
    }

    pub(crate) fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub(crate) fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub(crate) fn gallery_travel(&self) -> f32 {
        self.gallery_travel
    }

    pub(crate) fn content_height(&self) -> f32 {
        self.blocks
            .last()
            .map(|last| last.top + last.total_height())
            .unwrap_or(0.0)
    }

    pub(crate) fn max_scroll(&self) -> f32 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    /// Scroll offset that brings the section's first block to the top.
    pub(crate) fn section_offset(&self, section: SectionName) -> f32 {
        self.blocks
            .iter()
            .find(|layout| layout.block.section() == section)
            .map(|layout| layout.top)
            .unwrap_or(0.0)
            .clamp(0.0, self.max_scroll())
    }

    pub(crate) fn same_viewport(&self, width: f32, height: f32) -> bool {
        (sane(width) - self.viewport_width).abs() < 0.5
            && (sane(height) - self.viewport_height).abs() < 0.5
    }
}

fn sane(extent: f32) -> f32 {
    if extent.is_finite() {
        extent.max(MIN_VIEWPORT)
    } else {
        MIN_VIEWPORT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_stack_without_gaps() {
        let layout = PageLayout::compute(1280.0, 800.0, 6);
        let mut expected_top = 0.0;
        for block in layout.blocks() {
            assert_eq!(block.top, expected_top, "{:?}", block.block);
            expected_top += block.total_height();
        }
        assert_eq!(layout.content_height(), expected_top);
    }

    #[test]
    fn pinned_blocks_reserve_scroll_distance() {
        let layout = PageLayout::compute(1280.0, 800.0, 6);
        let cube = layout.block(Block::AlbumCube);
        assert_eq!(cube.height, 800.0);
        assert_eq!(cube.spacer, 2400.0);

        // 6 * 420 + 5 * 24 + 96 = 2736
        assert_eq!(gallery_track_width(6), 2736.0);
        assert_eq!(layout.gallery_travel(), 2736.0 - 1280.0);
        assert_eq!(layout.block(Block::Gallery).spacer, layout.gallery_travel());
    }

    #[test]
    fn wide_windows_do_not_travel() {
        let layout = PageLayout::compute(4000.0, 900.0, 6);
        assert_eq!(layout.gallery_travel(), 0.0);
        assert_eq!(PageLayout::compute(800.0, 600.0, 0).gallery_travel(), 0.0);
    }

    #[test]
    fn section_offsets_follow_order() {
        let layout = PageLayout::compute(1280.0, 800.0, 6);
        assert_eq!(layout.section_offset(SectionName::Hero), 0.0);
        assert_eq!(layout.section_offset(SectionName::Stats), 800.0);
        assert!(
            layout.section_offset(SectionName::Pricing)
                > layout.section_offset(SectionName::ParallaxGallery)
        );
        assert!(layout.section_offset(SectionName::Footer) <= layout.max_scroll());
    }

    #[test]
    fn degenerate_viewports_are_sanitized() {
        let layout = PageLayout::compute(f32::NAN, -5.0, 6);
        assert_eq!(layout.viewport_height(), 1.0);
        assert!(layout.content_height().is_finite());
        assert!(layout.same_viewport(f32::NAN, 0.0));
    }
}
