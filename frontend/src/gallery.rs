use serde::Serialize;

/// One photo in the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GalleryEntry {
    pub id: u32,
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const GALLERY: &[GalleryEntry] = &[
    GalleryEntry {
        id: 1,
        image: "assets/images/math-fun.jpg",
        title: "Math Fun with Blocks",
        description: "Learning addition and subtraction with colorful building blocks!",
        category: "math",
    },
    GalleryEntry {
        id: 2,
        image: "assets/images/work3.jpg.jpeg",
        title: "Reading Circle",
        description: "Story time and reading practice in our cozy learning corner!",
        category: "reading",
    },
    GalleryEntry {
        id: 3,
        image: "assets/images/work4.jpg.jpeg",
        title: "Science Experiments",
        description: "Hands-on learning with safe and exciting science activities!",
        category: "science",
    },
    GalleryEntry {
        id: 4,
        image: "assets/images/work5.jpg.jpeg",
        title: "Art & Craft Session",
        description: "Creative projects that make learning colorful and fun!",
        category: "creative",
    },
    GalleryEntry {
        id: 5,
        image: "assets/images/work6.jpg.jpeg",
        title: "Homework Help",
        description: "Patient, one-on-one support with school assignments!",
        category: "math",
    },
    GalleryEntry {
        id: 6,
        image: "assets/images/work7.jpg.jpeg",
        title: "Group Learning",
        description: "Collaborative activities that build teamwork and social skills!",
        category: "reading",
    },
];

/// Filter value that selects every entry.
pub const ALL: &str = "all";

/// Entries matching `filter`, in model order. Unknown categories give an
/// empty list.
pub fn filter_entries<'a>(entries: &'a [GalleryEntry], filter: &str) -> Vec<&'a GalleryEntry> {
    entries
        .iter()
        .filter(|entry| filter == ALL || entry.category == filter)
        .collect()
}

pub fn find_entry(id: u32) -> Option<&'static GalleryEntry> {
    GALLERY.iter().find(|entry| entry.id == id)
}
