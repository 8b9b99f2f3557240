use plotters::style::RGBColor;

/// Fixed palette cycled over the categories, indexed by declaration order.
pub const PALETTE: [RGBColor; 6] = [
    RGBColor(46, 134, 171),
    RGBColor(162, 59, 114),
    RGBColor(241, 143, 1),
    RGBColor(199, 62, 29),
    RGBColor(89, 46, 131),
    RGBColor(4, 138, 129),
];

/// Classification buckets for the skill entries.
/// Declaration order is the match priority: when a name hits keywords from
/// several categories the first one listed here wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Programming,
    ToolsSystems,
    ProtocolsStandards,
    PlatformsCloud,
    FrameworksLibraries,
    Other,
}

const KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Programming,
        &[
            "c++",
            "stl",
            "python",
            "javascript",
            "haskell",
            "go",
            "r",
            "bash",
        ],
    ),
    (
        Category::ToolsSystems,
        &[
            "vi", "git", "linux", "unix", "make", "cmake", "docker", "jenkins",
        ],
    ),
    (
        Category::ProtocolsStandards,
        &["tcp", "xmpp", "sip", "fix", "onvif"],
    ),
    (
        Category::PlatformsCloud,
        &["google cloud", "aws", "cloudflare", "raspberry pi"],
    ),
    (
        Category::FrameworksLibraries,
        &["qt", "juce", "zeromq", "hugo", "jekyll"],
    ),
];

impl Category {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rank grouping the rows on the chart. Platforms sit above protocols
    /// here even though the match priority has them the other way around.
    pub fn sort_rank(self) -> usize {
        match self {
            Category::Programming => 0,
            Category::ToolsSystems => 1,
            Category::PlatformsCloud => 2,
            Category::ProtocolsStandards => 3,
            Category::FrameworksLibraries => 4,
            Category::Other => 5,
        }
    }

    pub fn color(self) -> RGBColor {
        PALETTE[self.index() % PALETTE.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Programming => "Programming",
            Category::ToolsSystems => "Tools & Systems",
            Category::ProtocolsStandards => "Protocols & Standards",
            Category::PlatformsCloud => "Platforms & Cloud",
            Category::FrameworksLibraries => "Frameworks & Libraries",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Assigns a category by keyword match against the full skill name,
/// ordinal prefix included. Keywords of one or two letters (R, Go, Vi, Qt)
/// only match whole tokens so they cannot fire inside longer words, the
/// rest match as case-insensitive substrings. Pure and total: every name
/// maps to exactly one category, Other when nothing hits.
pub fn categorize(name: &str) -> Category {
    let lower = name.to_lowercase();
    for (category, keywords) in KEYWORDS {
        let hit = keywords.iter().any(|kw| {
            if kw.len() <= 2 {
                lower.split_whitespace().any(|token| token == *kw)
            } else {
                lower.contains(kw)
            }
        });
        if hit {
            return *category;
        }
    }
    Category::Other
}
