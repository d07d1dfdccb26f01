//! Project gallery records and category filtering.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Web,
    Design,
    App,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Design => "design",
            Category::App => "app",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "web" => Some(Category::Web),
            "design" => Some(Category::Design),
            "app" => Some(Category::App),
            _ => None,
        }
    }
}

/// The gallery's active filter: everything, or a single category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Parse a filter button's `data-filter` value.
    pub fn parse(s: &str) -> Option<Self> {
        if s == "all" {
            return Some(Filter::All);
        }
        Category::parse(s).map(Filter::Only)
    }

    /// Whether a card of `category` stays visible under this filter.
    pub fn admits(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(c) => c == category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(c) => c.as_str(),
        }
    }
}

/// Holds the single active filter; exactly one is active at any time.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterState {
    active: Filter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Filter {
        self.active
    }

    pub fn select(&mut self, filter: Filter) -> Filter {
        self.active = filter;
        self.active
    }
}

/// One gallery entry as consumed by the card renderer.
#[derive(Clone, Copy, Debug)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub description: &'static str,
}

/// Static project feed, rendered in order.
pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "E-commerce Website",
        category: Category::Web,
        image: "https://images.unsplash.com/photo-1557821552-17105176677c?w=800&auto=format&fit=crop",
        description: "A modern e-commerce platform with advanced features and seamless user experience.",
    },
    ProjectRecord {
        title: "Mobile App Design",
        category: Category::Design,
        image: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=800&auto=format&fit=crop",
        description: "UI/UX design for a fitness tracking mobile app with intuitive interface.",
    },
    ProjectRecord {
        title: "Task Management App",
        category: Category::App,
        image: "https://images.unsplash.com/photo-1540350394557-8d14678e7f91?w=800&auto=format&fit=crop",
        description: "A productivity app for managing daily tasks with team collaboration features.",
    },
    ProjectRecord {
        title: "Portfolio Website",
        category: Category::Web,
        image: "https://images.unsplash.com/photo-1547658719-da2b51169166?w=800&auto=format&fit=crop",
        description: "Creative portfolio website with 3D animations and modern design.",
    },
    ProjectRecord {
        title: "Social Media Dashboard",
        category: Category::Design,
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&auto=format&fit=crop",
        description: "Analytics dashboard for social media management and monitoring.",
    },
    ProjectRecord {
        title: "Weather App",
        category: Category::App,
        image: "https://images.unsplash.com/photo-1592210454359-9043f067919b?w=800&auto=format&fit=crop",
        description: "Real-time weather application with location-based forecasts.",
    },
];
