//! Home/blog navigation highlight driven by the URL fragment.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Which top-level section the fragment points at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavSection {
    #[default]
    Home,
    Blog,
}

impl NavSection {
    /// Blog only when the fragment equals the blog anchor exactly.
    pub fn from_hash(hash: &str, blog_anchor: &str) -> Self {
        if hash == blog_anchor { Self::Blog } else { Self::Home }
    }
}

/// A navigation link that can carry the active marker.
pub trait NavLink {
    fn set_active(&self, active: bool);
}

/// The two links the highlighter toggles between.
pub struct NavHighlighter<L> {
    home: L,
    blog: L,
    blog_anchor: String,
}

impl<L: NavLink> NavHighlighter<L> {
    pub fn new(home: L, blog: L, blog_anchor: impl Into<String>) -> Self {
        Self { home, blog, blog_anchor: blog_anchor.into() }
    }

    /// Re-evaluate for the current fragment and mark exactly one link active.
    pub fn refresh(&self, hash: &str) -> NavSection {
        let section = NavSection::from_hash(hash, &self.blog_anchor);
        self.home.set_active(section == NavSection::Home);
        self.blog.set_active(section == NavSection::Blog);
        log::debug!("nav section: {section:?}");
        section
    }
}
