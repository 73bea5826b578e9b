use std::fmt;
use std::str::FromStr;

use log::debug;

/// Named regions of the page, in the order they are stacked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Problem,
    Solution,
    Features,
    Team,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::Problem,
        SectionId::Solution,
        SectionId::Features,
        SectionId::Team,
        SectionId::Contact,
    ];

    /// Element id of the section in the rendered document.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Problem => "problem",
            SectionId::Solution => "solution",
            SectionId::Features => "features",
            SectionId::Team => "team",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or(())
    }
}

/// Vertical placement of a section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: `top` is inside, `top + height` is not.
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// Read access to the rendered layout.
///
/// The browser implementation lives in `crate::dom`; tests use a fixed table.
pub trait LayoutQuery {
    /// Current geometry of `id`, or `None` if the element isn't rendered.
    fn geometry(&self, id: SectionId) -> Option<SectionGeometry>;

    /// Smoothly scroll the element with this id into view.
    /// Returns false when no such element exists.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// Which section the nav bar highlights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationState {
    current: Option<SectionId>,
    margin: f64,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(crate::config::LOOKAHEAD_MARGIN_PX)
    }
}

impl NavigationState {
    pub fn new(margin: f64) -> Self {
        Self {
            current: Some(SectionId::Hero),
            margin,
        }
    }

    pub fn current(&self) -> Option<SectionId> {
        self.current
    }

    /// Re-evaluates the active section for `scroll_offset`.
    ///
    /// Takes the first section in page order whose range contains the offset
    /// plus the header margin. Keeps the previous value when nothing matches.
    /// Returns true if the active section changed.
    pub fn update_active_section<L: LayoutQuery + ?Sized>(
        &mut self,
        scroll_offset: f64,
        layout: &L,
    ) -> bool {
        let effective = scroll_offset + self.margin;
        let found = SectionId::ALL.into_iter().find(|id| {
            layout
                .geometry(*id)
                .map_or(false, |geometry| geometry.contains(effective))
        });

        match found {
            Some(id) if self.current != Some(id) => {
                debug!("Active section {:?} -> {}", self.current, id);
                self.current = Some(id);
                true
            }
            _ => false,
        }
    }
}

/// Scrolls to `section_id` if it is on the page; unknown ids are ignored.
pub fn scroll_to_section<L: LayoutQuery + ?Sized>(layout: &L, section_id: &str) -> bool {
    let found = layout.scroll_into_view(section_id);
    if !found {
        debug!("No section with id '{}' to scroll to", section_id);
    }
    found
}
