use enum_map::Enum;
use rand::Rng;
use ratatui::layout::{Flex, Layout, Rect, Size};

pub(crate) trait EnumExt: Enum {
    /// Pick a variant uniformly at random
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_usize(rng.random_range(0..Self::LENGTH))
    }
}

impl<T: Enum> EnumExt for T {}

/// Return a `Rect` of the given size centered within `area`, clipped to
/// `area` if it doesn't fit
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}
