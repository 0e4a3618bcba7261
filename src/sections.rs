//! Scroll-position → active-section mapping for the navigation.

/// Page sections in document order. The order is load-bearing: scroll
/// activation takes the first interval match, so overlapping extents
/// resolve to the earlier section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Projects,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::About,
        Section::Contact,
    ];

    /// DOM id of the section's anchor element, used both as smooth-scroll
    /// target and for activation measurement.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "header",
            Section::Projects => "projects",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }
}

/// Pixels added below the scroll offset before testing section extents,
/// so a section activates slightly before it reaches the viewport top.
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;

/// Vertical extent of a section on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The section considered active at `scroll_y`, or `None` when the probe
/// point sits above (or below) every extent. Callers keep the previously
/// active section in that case.
pub fn section_at(scroll_y: f64, extents: &[(Section, Extent)]) -> Option<Section> {
    let probe = scroll_y + SCROLL_LOOKAHEAD_PX;
    extents
        .iter()
        .find(|(_, extent)| extent.contains(probe))
        .map(|(section, _)| *section)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<(Section, Extent)> {
        vec![
            (
                Section::Home,
                Extent {
                    top: 0.0,
                    height: 400.0,
                },
            ),
            (
                Section::Projects,
                Extent {
                    top: 400.0,
                    height: 500.0,
                },
            ),
            (
                Section::About,
                Extent {
                    top: 900.0,
                    height: 600.0,
                },
            ),
            (
                Section::Contact,
                Extent {
                    top: 1500.0,
                    height: 700.0,
                },
            ),
        ]
    }

    #[test]
    fn lookahead_boundary_activates_the_section_it_lands_in() {
        // Probe 500 + 100 = 600 sits inside Projects [400, 900).
        assert_eq!(section_at(500.0, &page()), Some(Section::Projects));
        // Probe exactly at a section's top belongs to that section.
        assert_eq!(section_at(300.0, &page()), Some(Section::Projects));
        assert_eq!(section_at(299.0, &page()), Some(Section::Home));
    }

    #[test]
    fn first_match_in_document_order_wins_on_overlap() {
        let overlapping = vec![
            (
                Section::Home,
                Extent {
                    top: 0.0,
                    height: 600.0,
                },
            ),
            (
                Section::Projects,
                Extent {
                    top: 400.0,
                    height: 500.0,
                },
            ),
        ];
        assert_eq!(section_at(350.0, &overlapping), Some(Section::Home));
    }

    #[test]
    fn no_match_returns_none_so_the_caller_keeps_the_previous_section() {
        let below_fold = vec![(
            Section::Projects,
            Extent {
                top: 2000.0,
                height: 500.0,
            },
        )];
        assert_eq!(section_at(0.0, &below_fold), None);
        // Past the end of the last extent.
        assert_eq!(section_at(5000.0, &page()), None);
    }

    #[test]
    fn anchors_match_the_fixed_navigation_targets() {
        let anchors: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["header", "projects", "about", "contact"]);
    }
}
