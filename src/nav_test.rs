use super::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct FakeLink(Rc<Cell<bool>>);

impl NavLink for FakeLink {
    fn set_active(&self, active: bool) {
        self.0.set(active);
    }
}

#[test]
fn from_hash_requires_exact_anchor() {
    assert_eq!(NavSection::from_hash("#blog", "#blog"), NavSection::Blog);
    assert_eq!(NavSection::from_hash("#blog-post", "#blog"), NavSection::Home);
    assert_eq!(NavSection::from_hash("", "#blog"), NavSection::Home);
}

#[test]
fn blog_fragment_activates_blog_link_only() {
    let (home, blog) = (FakeLink::default(), FakeLink::default());
    let nav = NavHighlighter::new(home.clone(), blog.clone(), "#blog");
    assert_eq!(nav.refresh("#blog"), NavSection::Blog);
    assert!(blog.0.get());
    assert!(!home.0.get());
}

#[test]
fn other_fragment_restores_home() {
    let (home, blog) = (FakeLink::default(), FakeLink::default());
    let nav = NavHighlighter::new(home.clone(), blog.clone(), "#blog");
    nav.refresh("#blog");
    assert_eq!(nav.refresh("#contact"), NavSection::Home);
    assert!(home.0.get());
    assert!(!blog.0.get());
}
