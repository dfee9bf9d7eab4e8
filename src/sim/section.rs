//! Section navigation
//!
//! The site is a small state machine: a landing menu, five section overviews
//! switched by scrolling, and detail pages for four of them. Transitions are
//! pure functions of the current view and the input, returning the next view
//! plus any commands the host page must carry out.

use serde::{Deserialize, Serialize};

use crate::consts::{GAME_URL, SOCIAL_URLS};

/// One of the five portfolio sections, in scroll order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    About,
    Game,
    Projects,
    Contact,
    Social,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Game,
        Section::Projects,
        Section::Contact,
        Section::Social,
    ];

    /// 1-based position in scroll order
    pub fn index(self) -> usize {
        match self {
            Section::About => 1,
            Section::Game => 2,
            Section::Projects => 3,
            Section::Contact => 4,
            Section::Social => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Section at `index`, clamped into 1..=5
    pub fn clamped(index: i64) -> Self {
        Self::ALL[(index.clamp(1, 5) - 1) as usize]
    }

    /// Whether the section has a detail page
    pub fn has_detail(self) -> bool {
        !matches!(self, Section::Game)
    }

    /// Landing menu label, also used as the overview heading
    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About me",
            Section::Game => "Game Section",
            Section::Projects => "Projects",
            Section::Contact => "Contact here",
            Section::Social => "Social Media",
        }
    }
}

/// What the canvas is currently showing
///
/// A single value, so at most one detail page can ever be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Landing,
    Overview(Section),
    Detail(Section),
}

impl View {
    pub fn section(self) -> Option<Section> {
        match self {
            View::Landing => None,
            View::Overview(s) | View::Detail(s) => Some(s),
        }
    }

    pub fn is_overview(self) -> bool {
        matches!(self, View::Overview(_))
    }

    pub fn is_detail(self) -> bool {
        matches!(self, View::Detail(_))
    }

    /// View after a wheel event
    ///
    /// Only overviews react. Scrolling up (negative delta) moves to the next
    /// section, scrolling down to the previous one, clamped to the ends.
    pub fn on_scroll(self, delta: f32) -> View {
        match self {
            View::Overview(s) => {
                let step = if delta < 0.0 {
                    1
                } else if delta > 0.0 {
                    -1
                } else {
                    0
                };
                View::Overview(Section::clamped(s.index() as i64 + step))
            }
            other => other,
        }
    }

    /// View after a pointer press, and the host commands it triggers
    pub fn on_press(self, press: &Press) -> (View, Vec<Command>) {
        match self {
            View::Landing => match press.menu_entry {
                Some(s) => (View::Overview(s), Vec::new()),
                None => (self, Vec::new()),
            },
            View::Overview(s) => match s {
                Section::Game if press.game_title => (self, vec![Command::OpenUrl(GAME_URL)]),
                Section::Game => (self, Vec::new()),
                Section::Projects if press.thumbnail.is_some() => (View::Detail(s), Vec::new()),
                Section::Projects => (self, Vec::new()),
                Section::Contact if press.center => {
                    (View::Detail(s), vec![Command::ShowContactForm])
                }
                _ if press.center => (View::Detail(s), Vec::new()),
                _ => (self, Vec::new()),
            },
            View::Detail(s) => {
                if press.back {
                    let commands = if s == Section::Contact {
                        vec![Command::RemoveContactForm]
                    } else {
                        Vec::new()
                    };
                    (View::Overview(s), commands)
                } else if s == Section::Social {
                    let commands = press
                        .icon
                        .and_then(|i| SOCIAL_URLS.get(i).copied())
                        .map(|url| vec![Command::OpenUrl(url)])
                        .unwrap_or_default();
                    (self, commands)
                } else {
                    (self, Vec::new())
                }
            }
        }
    }
}

/// Hit-test results for one pointer press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Press {
    /// Landing menu entry under the pointer
    pub menu_entry: Option<Section>,
    /// Within the center hotspot
    pub center: bool,
    /// Index of the project thumbnail under the pointer
    pub thumbnail: Option<usize>,
    /// Inside the Back control
    pub back: bool,
    /// Inside the game title region
    pub game_title: bool,
    /// Index of the social icon under the pointer
    pub icon: Option<usize>,
}

/// Side effects the host page performs after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open an external link in a new browsing context
    OpenUrl(&'static str),
    /// Build the contact form inputs
    ShowContactForm,
    /// Tear the contact form down
    RemoveContactForm,
}

/// Contact form lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContactForm {
    #[default]
    Hidden,
    /// Inputs visible
    Editing,
    /// Inputs gone, confirmation shown
    Sent,
}

impl ContactForm {
    pub const SENT_MESSAGE: &'static str =
        "Check your email, I have sent you valuable information.";

    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::ShowContactForm => ContactForm::Editing,
            Command::RemoveContactForm => ContactForm::Hidden,
            Command::OpenUrl(_) => self,
        }
    }

    /// Send pressed; only meaningful while editing
    pub fn send(self) -> Self {
        match self {
            ContactForm::Editing => ContactForm::Sent,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn press() -> Press {
        Press::default()
    }

    #[test]
    fn test_index_roundtrip() {
        for s in Section::ALL {
            assert_eq!(Section::from_index(s.index()), Some(s));
        }
        assert_eq!(Section::from_index(0), None);
        assert_eq!(Section::from_index(6), None);
    }

    #[test]
    fn test_landing_menu_click() {
        let p = Press {
            menu_entry: Some(Section::Projects),
            ..press()
        };
        let (view, cmds) = View::Landing.on_press(&p);
        assert_eq!(view, View::Overview(Section::Projects));
        assert!(cmds.is_empty());

        // Anything else on the landing page is ignored
        let p = Press {
            center: true,
            back: true,
            ..press()
        };
        assert_eq!(View::Landing.on_press(&p).0, View::Landing);
    }

    #[test]
    fn test_scroll_direction_and_clamp() {
        let v = View::Overview(Section::About);
        assert_eq!(v.on_scroll(-100.0), View::Overview(Section::Game));
        assert_eq!(v.on_scroll(100.0), View::Overview(Section::About));
        assert_eq!(v.on_scroll(0.0), v);
        let v = View::Overview(Section::Social);
        assert_eq!(v.on_scroll(-3.0), View::Overview(Section::Social));
        assert_eq!(v.on_scroll(3.0), View::Overview(Section::Contact));
    }

    #[test]
    fn test_scroll_ignored_outside_overview() {
        assert_eq!(View::Landing.on_scroll(-1.0), View::Landing);
        let d = View::Detail(Section::Contact);
        assert_eq!(d.on_scroll(-1.0), d);
    }

    #[test]
    fn test_center_click_opens_detail() {
        let p = Press {
            center: true,
            ..press()
        };
        for s in [Section::About, Section::Social] {
            let (view, cmds) = View::Overview(s).on_press(&p);
            assert_eq!(view, View::Detail(s));
            assert!(cmds.is_empty());
        }
        let (view, cmds) = View::Overview(Section::Contact).on_press(&p);
        assert_eq!(view, View::Detail(Section::Contact));
        assert_eq!(cmds, vec![Command::ShowContactForm]);

        // Game has no detail page; projects need a thumbnail
        assert_eq!(
            View::Overview(Section::Game).on_press(&p).0,
            View::Overview(Section::Game)
        );
        assert_eq!(
            View::Overview(Section::Projects).on_press(&p).0,
            View::Overview(Section::Projects)
        );
    }

    #[test]
    fn test_thumbnail_opens_projects_detail() {
        let p = Press {
            thumbnail: Some(2),
            ..press()
        };
        assert_eq!(
            View::Overview(Section::Projects).on_press(&p).0,
            View::Detail(Section::Projects)
        );
    }

    #[test]
    fn test_game_title_opens_link() {
        let p = Press {
            game_title: true,
            ..press()
        };
        let (view, cmds) = View::Overview(Section::Game).on_press(&p);
        assert_eq!(view, View::Overview(Section::Game));
        assert_eq!(cmds, vec![Command::OpenUrl(GAME_URL)]);
    }

    #[test]
    fn test_back_returns_to_overview() {
        let p = Press {
            back: true,
            ..press()
        };
        for s in [Section::About, Section::Projects, Section::Social] {
            let (view, cmds) = View::Detail(s).on_press(&p);
            assert_eq!(view, View::Overview(s));
            assert!(cmds.is_empty());
        }
        let (view, cmds) = View::Detail(Section::Contact).on_press(&p);
        assert_eq!(view, View::Overview(Section::Contact));
        assert_eq!(cmds, vec![Command::RemoveContactForm]);
    }

    #[test]
    fn test_detail_ignores_other_clicks() {
        let p = Press {
            center: true,
            ..press()
        };
        for s in [Section::About, Section::Projects, Section::Contact, Section::Social] {
            assert_eq!(View::Detail(s).on_press(&p), (View::Detail(s), Vec::new()));
        }
    }

    #[test]
    fn test_social_icons_open_links() {
        let p = Press {
            icon: Some(1),
            ..press()
        };
        let (view, cmds) = View::Detail(Section::Social).on_press(&p);
        assert_eq!(view, View::Detail(Section::Social));
        assert_eq!(cmds, vec![Command::OpenUrl(SOCIAL_URLS[1])]);
    }

    #[test]
    fn test_contact_form_lifecycle() {
        let form = ContactForm::default();
        assert_eq!(form.send(), ContactForm::Hidden);
        let form = form.apply(Command::ShowContactForm);
        assert_eq!(form, ContactForm::Editing);
        let form = form.send();
        assert_eq!(form, ContactForm::Sent);
        assert_eq!(form.apply(Command::RemoveContactForm), ContactForm::Hidden);
    }

    fn any_section() -> impl Strategy<Value = Section> {
        (1usize..=5).prop_map(|i| Section::ALL[i - 1])
    }

    proptest! {
        #[test]
        fn prop_scroll_stays_in_range(
            start in any_section(),
            deltas in prop::collection::vec(-500.0f32..500.0, 0..200),
        ) {
            let mut view = View::Overview(start);
            for delta in deltas {
                let before = view.section().map(Section::index).unwrap_or(0) as i64;
                view = view.on_scroll(delta);
                let after = view.section().map(Section::index).unwrap_or(0) as i64;
                prop_assert!((1..=5).contains(&after));
                prop_assert!((after - before).abs() <= 1);
            }
        }

        #[test]
        fn prop_detail_only_for_detailed_sections(
            start in any_section(),
            center in any::<bool>(), back in any::<bool>(), game_title in any::<bool>(),
            thumbnail in prop::option::of(0usize..3),
        ) {
            let p = Press { center, back, game_title, thumbnail, ..Press::default() };
            let (view, _) = View::Overview(start).on_press(&p);
            if let View::Detail(s) = view {
                prop_assert!(s.has_detail());
                prop_assert_eq!(s, start);
            }
        }
    }
}
