//! Static catalog of games and services.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is compiled into the client. Pages filter it for display and
//! the cart refers to services by id.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Game grouping used by the category filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameCategory {
    Math,
    Emotions,
    Focus,
    Calming,
}

impl GameCategory {
    pub const ALL: [Self; 4] = [Self::Math, Self::Emotions, Self::Focus, Self::Calming];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Math => "Math Skills",
            Self::Emotions => "Emotional Skills",
            Self::Focus => "Focus & Attention",
            Self::Calming => "Calming Activities",
        }
    }

    /// CSS modifier for the category badge.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Emotions => "emotions",
            Self::Focus => "focus",
            Self::Calming => "calming",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: GameCategory,
    pub difficulty: Difficulty,
    pub time: &'static str,
    pub rating: f32,
    pub popular: bool,
    pub image_url: &'static str,
}

pub const GAMES: &[Game] = &[
    Game {
        id: 1,
        title: "Number Friends",
        description: "Learn basic addition and subtraction with friendly characters.",
        category: GameCategory::Math,
        difficulty: Difficulty::Easy,
        time: "10-15 min",
        rating: 4.8,
        popular: true,
        image_url: "https://images.pexels.com/photos/1148998/pexels-photo-1148998.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Game {
        id: 2,
        title: "Shape Sorter",
        description: "Match shapes and colors while learning counting skills.",
        category: GameCategory::Math,
        difficulty: Difficulty::Easy,
        time: "5-10 min",
        rating: 4.5,
        popular: false,
        image_url: "https://images.pexels.com/photos/1619344/pexels-photo-1619344.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Game {
        id: 3,
        title: "Feeling Friends",
        description: "Learn to identify and express emotions with animated characters.",
        category: GameCategory::Emotions,
        difficulty: Difficulty::Medium,
        time: "10-15 min",
        rating: 4.9,
        popular: true,
        image_url: "https://images.pexels.com/photos/6311440/pexels-photo-6311440.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Game {
        id: 4,
        title: "Breathing Bubbles",
        description: "Practice deep breathing techniques with interactive bubbles.",
        category: GameCategory::Calming,
        difficulty: Difficulty::Easy,
        time: "5 min",
        rating: 4.7,
        popular: false,
        image_url: "https://images.pexels.com/photos/1028599/pexels-photo-1028599.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Game {
        id: 5,
        title: "Forest Sounds",
        description: "Calming nature sounds with beautiful forest visuals.",
        category: GameCategory::Calming,
        difficulty: Difficulty::Easy,
        time: "10-30 min",
        rating: 4.6,
        popular: false,
        image_url: "https://images.pexels.com/photos/128234/pexels-photo-128234.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Game {
        id: 6,
        title: "Attention Safari",
        description: "Find hidden animals and objects to improve focus and attention.",
        category: GameCategory::Focus,
        difficulty: Difficulty::Medium,
        time: "10-15 min",
        rating: 4.4,
        popular: false,
        image_url: "https://images.pexels.com/photos/2832034/pexels-photo-2832034.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Game {
        id: 7,
        title: "Math Challenge",
        description: "Test your math skills with increasingly difficult number problems.",
        category: GameCategory::Math,
        difficulty: Difficulty::Hard,
        time: "15-20 min",
        rating: 4.3,
        popular: false,
        image_url: "https://images.pexels.com/photos/1438081/pexels-photo-1438081.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Game {
        id: 8,
        title: "Emotion Stories",
        description: "Interactive stories that help identify and process different emotions.",
        category: GameCategory::Emotions,
        difficulty: Difficulty::Medium,
        time: "15-20 min",
        rating: 4.7,
        popular: false,
        image_url: "https://images.pexels.com/photos/5756743/pexels-photo-5756743.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
];

/// Games in `category`, or every game when no category is selected.
#[must_use]
pub fn games_in(category: Option<GameCategory>) -> Vec<&'static Game> {
    GAMES
        .iter()
        .filter(|g| category.is_none_or(|c| g.category == c))
        .collect()
}

#[must_use]
pub fn popular_games() -> Vec<&'static Game> {
    GAMES.iter().filter(|g| g.popular).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Price in cents.
    pub price_cents: u64,
    pub duration: &'static str,
    pub format: &'static str,
    pub availability: &'static str,
    pub featured: bool,
    pub image_url: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        title: "One-on-One Therapy Session",
        description: "Personal therapy session with a certified specialist tailored to your child's specific needs.",
        price_cents: 7_500,
        duration: "45 minutes",
        format: "Video Call",
        availability: "Mon-Fri, 9AM-5PM",
        featured: true,
        image_url: "https://images.pexels.com/photos/7551438/pexels-photo-7551438.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Service {
        id: 2,
        title: "Parent Guidance Consultation",
        description: "Expert advice for parents on supporting their child's development and implementing effective strategies at home.",
        price_cents: 6_000,
        duration: "60 minutes",
        format: "Video Call",
        availability: "Mon-Sat, 10AM-6PM",
        featured: false,
        image_url: "https://images.pexels.com/photos/3768129/pexels-photo-3768129.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Service {
        id: 3,
        title: "Weekly Support Group",
        description: "Join other parents and children in a supportive group environment led by experienced facilitators.",
        price_cents: 4_500,
        duration: "90 minutes",
        format: "Video Call",
        availability: "Tuesdays & Thursdays, 7PM-8:30PM",
        featured: true,
        image_url: "https://images.unsplash.com/photo-1573497491208-6b1acb260507?auto=format&fit=crop&w=1470&q=80",
    },
    Service {
        id: 4,
        title: "In-Person Assessment",
        description: "Comprehensive in-person evaluation to assess your child's strengths, challenges, and developmental progress.",
        price_cents: 15_000,
        duration: "120 minutes",
        format: "In-Person",
        availability: "By Appointment",
        featured: false,
        image_url: "https://images.pexels.com/photos/3771107/pexels-photo-3771107.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Service {
        id: 5,
        title: "School Transition Support",
        description: "Guidance and strategies to help your child successfully transition between schools or educational settings.",
        price_cents: 8_500,
        duration: "60 minutes",
        format: "Video Call or In-Person",
        availability: "Weekdays, 3PM-6PM",
        featured: false,
        image_url: "https://images.pexels.com/photos/8535214/pexels-photo-8535214.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Service {
        id: 6,
        title: "Monthly Development Workshop",
        description: "Interactive workshop covering specific developmental areas with practical activities and resources.",
        price_cents: 3_500,
        duration: "120 minutes",
        format: "Video Call",
        availability: "First Saturday of each month, 10AM-12PM",
        featured: false,
        image_url: "https://images.pexels.com/photos/3755761/pexels-photo-3755761.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
];

#[must_use]
pub fn find_service(id: u32) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

#[must_use]
pub fn featured_services() -> Vec<&'static Service> {
    SERVICES.iter().filter(|s| s.featured).collect()
}

/// Format cents as dollars, e.g. `7500` → `"$75.00"`.
#[must_use]
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
