use crate::domain::catalog::Edition;

/// Viewport query under which only one page is shown at a time
pub const SINGLE_PAGE_QUERY: &str = "(max-width: 767px)";
/// How long the page-turn transition class stays on the slots
pub const PAGE_FLIP_MS: i32 = 500;
/// Delay before the spinner is hidden and the first spread is rendered
pub const LOADING_DELAY_MS: i32 = 800;
pub const ZOOM_SCALE: &str = "scale(1.05)";
pub const UNZOOMED_SCALE: &str = "scale(1)";
pub const SHARE_FALLBACK_TITLE: &str = "Sandesh Newsletter";
pub const SHARE_TEXT: &str = "Explore the latest Sandesh newsletter edition.";

/// What one page slot shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageSlot<'a> {
    Image { page: u32, src: &'a str },
    /// Page number past the last page of the edition
    EndOfEdition,
}

impl PageSlot<'_> {
    pub fn markup(&self) -> String {
        match self {
            PageSlot::Image { page, src } => format!(
                r#"<img src="{}" alt="Page {}" loading="lazy" />"#,
                escape_attr(src),
                page
            ),
            PageSlot::EndOfEdition => "<span>End of edition</span>".to_string(),
        }
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareData {
    pub fn new(viewer: Option<&FlipbookViewer>, url: &str) -> Self {
        Self {
            title: viewer
                .map(|v| v.edition().title.clone())
                .unwrap_or_else(|| SHARE_FALLBACK_TITLE.to_string()),
            text: SHARE_TEXT.to_string(),
            url: url.to_string(),
        }
    }
}

/// Pagination state of the flipbook
///
/// In dual-page mode `current_page` is the left page of the open spread and
/// navigation moves two pages at a time.
#[derive(Clone, Debug)]
pub struct FlipbookViewer {
    edition: Edition,
    current_page: u32,
    single_page_view: bool,
    zoomed: bool,
}

impl FlipbookViewer {
    pub fn new(edition: Edition, single_page_view: bool) -> Self {
        Self {
            edition,
            current_page: 1,
            single_page_view,
            zoomed: false,
        }
    }

    pub fn edition(&self) -> &Edition {
        &self.edition
    }

    pub fn total_pages(&self) -> u32 {
        self.edition.total_pages
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn is_single_page_view(&self) -> bool {
        self.single_page_view
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Highest valid left page. In dual-page mode the last spread always
    /// starts on an odd page.
    pub fn max_page(&self) -> u32 {
        let total = self.edition.total_pages.max(1);
        if self.single_page_view {
            total
        } else if total % 2 == 0 {
            total - 1
        } else {
            total
        }
    }

    fn step(&self) -> u32 {
        if self.single_page_view {
            1
        } else {
            2
        }
    }

    /// Returns true when the page changed
    pub fn next(&mut self) -> bool {
        if self.current_page < self.max_page() {
            self.current_page += self.step();
            true
        } else {
            false
        }
    }

    /// Returns true when the page changed
    pub fn prev(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page = self.current_page.saturating_sub(self.step()).max(1);
            true
        } else {
            false
        }
    }

    /// Jump straight to `page` (thumbnail click)
    pub fn go_to(&mut self, page: u32) {
        self.current_page = page.clamp(1, self.edition.total_pages.max(1));
    }

    /// Apply a layout change. Dual-page mode needs an odd left page.
    pub fn set_single_page_view(&mut self, single: bool) {
        self.single_page_view = single;
        if !single && self.current_page % 2 == 0 {
            self.current_page -= 1;
        }
        let max = self.max_page();
        if self.current_page > max {
            self.current_page = max;
        }
    }

    pub fn toggle_zoom(&mut self) -> bool {
        self.zoomed = !self.zoomed;
        self.zoomed
    }

    /// CSS transform for the flipbook element
    pub fn zoom_transform(&self) -> &'static str {
        if self.zoomed {
            ZOOM_SCALE
        } else {
            UNZOOMED_SCALE
        }
    }

    pub fn slot(&self, page: u32) -> PageSlot<'_> {
        match self.edition.image(page) {
            Some(src) => PageSlot::Image { page, src },
            None => PageSlot::EndOfEdition,
        }
    }

    /// Left slot and, in dual-page mode, the right slot
    pub fn visible_pages(&self) -> (PageSlot<'_>, Option<PageSlot<'_>>) {
        let left = self.slot(self.current_page);
        let right = if self.single_page_view {
            None
        } else {
            Some(self.slot(self.current_page + 1))
        };
        (left, right)
    }

    /// Labels for the thumbnail strip, one per page
    pub fn thumbnail_labels(&self) -> Vec<String> {
        (1..=self.edition.images.len())
            .map(|page| format!("Page {page}"))
            .collect()
    }

    pub fn download_ref(&self) -> &str {
        &self.edition.pdf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    fn viewer(key: &str, single: bool) -> FlipbookViewer {
        let catalog = Catalog::builtin();
        FlipbookViewer::new(catalog.select(Some(key)).clone(), single)
    }

    #[test]
    fn max_page_for_even_edition() {
        let mut v = viewer("nov-2025", false);
        assert_eq!(v.total_pages(), 16);
        assert_eq!(v.max_page(), 15);
        v.set_single_page_view(true);
        assert_eq!(v.max_page(), 16);
    }

    #[test]
    fn max_page_for_odd_edition() {
        let mut edition = Catalog::builtin().default_edition().clone();
        edition.total_pages = 11;
        edition.images.truncate(11);
        let v = FlipbookViewer::new(edition, false);
        assert_eq!(v.max_page(), 11);
    }

    #[test]
    fn dual_page_navigation_walks_spreads() {
        let mut v = viewer("feb-2026", false);
        let mut seen = vec![v.current_page()];
        while v.next() {
            seen.push(v.current_page());
        }
        assert_eq!(seen, vec![1, 3, 5, 7, 9, 11]);
        assert!(!v.next());

        while v.prev() {}
        assert_eq!(v.current_page(), 1);
        assert!(!v.prev());
    }

    #[test]
    fn single_page_navigation_walks_pages() {
        let mut v = viewer("feb-2026", true);
        let mut count = 1;
        while v.next() {
            count += 1;
        }
        assert_eq!(count, 12);
        assert_eq!(v.current_page(), 12);
    }

    #[test]
    fn prev_clamps_at_first_page() {
        let mut v = viewer("feb-2026", false);
        v.go_to(2);
        assert!(v.prev());
        assert_eq!(v.current_page(), 1);
    }

    #[test]
    fn switching_to_dual_forces_odd_left_page() {
        let mut v = viewer("feb-2026", true);
        v.go_to(12);
        v.set_single_page_view(false);
        assert_eq!(v.current_page(), 11);

        v.go_to(6);
        v.set_single_page_view(false);
        assert_eq!(v.current_page(), 5);
    }

    #[test]
    fn visible_pages_follow_layout() {
        let mut v = viewer("jan-2026", false);
        let (left, right) = v.visible_pages();
        assert_eq!(left, PageSlot::Image { page: 1, src: "assets/jan-2026/page-1.jpg" });
        assert_eq!(right, Some(PageSlot::Image { page: 2, src: "assets/jan-2026/page-2.jpg" }));

        v.set_single_page_view(true);
        let (_, right) = v.visible_pages();
        assert_eq!(right, None);
    }

    #[test]
    fn last_even_thumbnail_in_dual_mode_shows_end_marker() {
        let mut v = viewer("feb-2026", false);
        v.go_to(12);
        let (left, right) = v.visible_pages();
        assert_eq!(left, PageSlot::Image { page: 12, src: "assets/feb-2026/12.jpg" });
        assert_eq!(right, Some(PageSlot::EndOfEdition));
        assert!(!v.next());
    }

    #[test]
    fn go_to_clamps_to_edition() {
        let mut v = viewer("feb-2026", true);
        v.go_to(0);
        assert_eq!(v.current_page(), 1);
        v.go_to(99);
        assert_eq!(v.current_page(), 12);
    }

    #[test]
    fn markup_matches_page_template() {
        let v = viewer("feb-2026", false);
        assert_eq!(
            v.slot(3).markup(),
            r#"<img src="assets/feb-2026/3.jpg" alt="Page 3" loading="lazy" />"#
        );
        assert_eq!(v.slot(13).markup(), "<span>End of edition</span>");

        let quoted = PageSlot::Image { page: 1, src: "a\"b.jpg" };
        assert!(quoted.markup().contains("a&quot;b.jpg"));
    }

    #[test]
    fn zoom_toggles_transform() {
        let mut v = viewer("feb-2026", false);
        assert_eq!(v.zoom_transform(), "scale(1)");
        assert!(v.toggle_zoom());
        assert_eq!(v.zoom_transform(), "scale(1.05)");
        assert!(!v.toggle_zoom());
    }

    #[test]
    fn thumbnails_and_share_data() {
        let v = viewer("dec-2025", false);
        let labels = v.thumbnail_labels();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "Page 1");
        assert_eq!(labels[11], "Page 12");
        assert_eq!(v.download_ref(), "assets/dec-2025.pdf");

        let share = ShareData::new(Some(&v), "https://example.org/?edition=dec-2025");
        assert_eq!(share.title, "December 2025 Edition");
        assert_eq!(share.text, SHARE_TEXT);

        let fallback = ShareData::new(None, "https://example.org/");
        assert_eq!(fallback.title, "Sandesh Newsletter");
    }
}
